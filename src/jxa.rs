//! The osascript bridge
//!
//! Scripts run as JXA (`osascript -l JavaScript`) against whatever
//! application the script body targets. The bridge is split in two halves:
//!
//! - [`JxaBridge::run`] is the pure invocation: spawn, capture, classify,
//!   parse. It returns a typed `Result` and touches no UI.
//! - [`JxaBridge::execute`] is the reporting wrapper the UI calls: any
//!   failure becomes exactly one toast through the supplied [`Notifier`] and
//!   an absent value. Errors never escape it.
//!
//! # Testing
//!
//! Set the `SAFARIKIT_OSASCRIPT` environment variable to point the bridge at
//! a stub program instead of the real osascript binary. The integration
//! tests use a shell script stub for both the success and failure paths.

use std::process::Stdio;

use serde::de::DeserializeOwned;
use tokio::process::Command;

use crate::config::Preferences;
use crate::core::error::JxaError;
use crate::notify::{Notifier, Toast};

/// Environment variable overriding the spawned program (tests only).
const OSASCRIPT_OVERRIDE_ENV: &str = "SAFARIKIT_OSASCRIPT";

/// Issues JXA calls against the configured browser application.
///
/// Holds the preferences loaded at startup; the bridge never re-reads them.
#[derive(Debug, Clone)]
pub struct JxaBridge {
    preferences: Preferences,
}

impl JxaBridge {
    pub fn new(preferences: Preferences) -> Self {
        Self { preferences }
    }

    /// Bundle identifier of the application scripts should target.
    pub fn app_identifier(&self) -> &str {
        &self.preferences.safari_app_identifier
    }

    /// JXA snippet referencing the configured application, for script
    /// composition: `format!("const safari = {};", bridge.application_ref())`.
    pub fn application_ref(&self) -> String {
        format!("Application(\"{}\")", self.app_identifier())
    }

    fn osascript_program() -> String {
        std::env::var(OSASCRIPT_OVERRIDE_ENV).unwrap_or_else(|_| "osascript".to_string())
    }

    /// Runs `script` and parses its return value from JSON.
    ///
    /// The script body is wrapped in a function whose return value is
    /// serialized with `JSON.stringify`, so plain `return ...;` statements
    /// work. A script that returns nothing deserializes as JSON `null`,
    /// which `Option<T>` targets absorb.
    pub async fn run<T: DeserializeOwned>(&self, script: &str) -> Result<T, JxaError> {
        let wrapped = format!("JSON.stringify((() => {{\n{script}\n}})())");

        let output = Command::new(Self::osascript_program())
            .args(["-l", "JavaScript", "-e", wrapped.as_str()])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(JxaError::Launch)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(JxaError::classify_stderr(&stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let body = stdout.trim();
        // osascript prints "undefined" (or nothing) for scripts without a
        // return value
        let json = if body.is_empty() || body == "undefined" {
            "null"
        } else {
            body
        };

        tracing::debug!(bytes = json.len(), "JXA call succeeded");
        Ok(serde_json::from_str(json)?)
    }

    /// Runs `script`, reporting any failure to the user.
    ///
    /// Success yields the parsed value. Every failure, whatever its shape,
    /// is logged and surfaced as exactly one failure toast, and the call
    /// resolves to `None`; nothing propagates to the caller.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        script: &str,
        notifier: &dyn Notifier,
    ) -> Option<T> {
        match self.run(script).await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("JXA call failed: {err}");
                notifier.show(self.toast_for(&err));
                None
            }
        }
    }

    /// Maps a bridge error to the toast shown for it.
    fn toast_for(&self, err: &JxaError) -> Toast {
        match err {
            JxaError::AppNotFound(_) => Toast::failure(
                "Application not found",
                format!("{} must be running", self.app_identifier()),
            ),
            JxaError::Script(message) => Toast::failure("Something went wrong", message.clone()),
            other => Toast::failure("Something went wrong", other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastStyle;

    fn bridge() -> JxaBridge {
        JxaBridge::new(Preferences::default())
    }

    #[test]
    fn test_application_ref() {
        assert_eq!(bridge().application_ref(), "Application(\"com.apple.Safari\")");
    }

    #[test]
    fn test_toast_for_app_not_found() {
        let toast = bridge().toast_for(&JxaError::AppNotFound(
            "Application can't be found. (-2700)".to_string(),
        ));
        assert_eq!(toast.style, ToastStyle::Failure);
        assert_eq!(toast.title, "Application not found");
        assert_eq!(toast.message, "com.apple.Safari must be running");
    }

    #[test]
    fn test_toast_for_script_error_carries_message() {
        let toast = bridge().toast_for(&JxaError::Script("tabs is not defined".to_string()));
        assert_eq!(toast.title, "Something went wrong");
        assert_eq!(toast.message, "tabs is not defined");
    }

    #[test]
    fn test_toast_for_launch_error() {
        let err = JxaError::Launch(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no osascript",
        ));
        let toast = bridge().toast_for(&err);
        assert_eq!(toast.title, "Something went wrong");
        assert!(toast.message.contains("osascript"));
    }
}
