//! Preferences persistence
//!
//! Preferences are loaded once at startup and passed into the bridge as an
//! immutable value; nothing re-reads them mid-session. Stored as
//! `config.json` under the platform config directory.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// User preferences recognized by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Bundle identifier of the target browser application.
    #[serde(default = "default_safari_app_identifier")]
    pub safari_app_identifier: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            safari_app_identifier: default_safari_app_identifier(),
        }
    }
}

fn default_safari_app_identifier() -> String {
    "com.apple.Safari".to_string()
}

pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "safarikit", "safarikit")
        .map(|pd| pd.config_dir().to_path_buf())
}

fn config_file() -> Option<PathBuf> {
    get_config_dir().map(|mut dir| {
        dir.push("config.json");
        dir
    })
}

/// Loads preferences from `config.json`.
///
/// Missing file or unresolvable config directory yield defaults; a present
/// but unreadable or malformed file is an error the caller decides about.
pub fn load_preferences() -> Result<Preferences> {
    let Some(path) = config_file() else {
        return Ok(Preferences::default());
    };
    if !path.exists() {
        return Ok(Preferences::default());
    }

    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Loads preferences, degrading to defaults on any error.
///
/// Startup must not die on a broken config file; the problem is logged and
/// the defaults are used.
pub fn load_preferences_or_default() -> Preferences {
    match load_preferences() {
        Ok(prefs) => prefs,
        Err(err) => {
            tracing::warn!("Failed to load preferences, using defaults: {err}");
            Preferences::default()
        }
    }
}

/// Saves preferences to disk using an atomic write pattern.
/// 1. Writes to a temporary file.
/// 2. Sets restrictive permissions (0o600) on unix.
/// 3. Atomically renames to the target path.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O so a UI event loop never stalls on
/// the write.
pub async fn save_preferences(preferences: &Preferences) -> std::io::Result<()> {
    let Some(dir) = get_config_dir() else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "could not resolve a config directory",
        ));
    };

    tokio::fs::create_dir_all(&dir).await?;

    let json = serde_json::to_string_pretty(preferences)?;

    let mut temp_path = dir.clone();
    temp_path.push("config.json.tmp");
    let mut path = dir;
    path.push("config.json");

    #[cfg(unix)]
    {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600)
            .open(&temp_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    #[cfg(not(unix))]
    {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    tokio::fs::rename(temp_path, path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identifier() {
        let prefs = Preferences::default();
        assert_eq!(prefs.safari_app_identifier, "com.apple.Safari");
    }

    #[test]
    fn test_deserialize_empty_object_uses_default() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_roundtrip() {
        let prefs = Preferences {
            safari_app_identifier: "com.apple.SafariTechnologyPreview".to_string(),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
