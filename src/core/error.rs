use thiserror::Error;

/// Core error types for safarikit
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scripting-bridge call failed
    #[error(transparent)]
    Jxa(#[from] JxaError),
}

/// Errors produced by the osascript bridge.
///
/// Script failures are classified from stderr text so callers can tell
/// "the target application is not running" apart from everything else.
#[derive(Debug, Error)]
pub enum JxaError {
    /// The scripted application could not be found (usually: not running)
    #[error("application can't be found: {0}")]
    AppNotFound(String),

    /// The script itself raised an error
    #[error("{0}")]
    Script(String),

    /// osascript could not be spawned at all
    #[error("failed to launch osascript: {0}")]
    Launch(#[source] std::io::Error),

    /// The script ran but printed something that is not valid JSON
    #[error("invalid script output: {0}")]
    InvalidOutput(#[from] serde_json::Error),
}

/// Fixed prefix osascript puts in front of JXA exception text.
const EXECUTION_ERROR_PREFIX: &str = "execution error: Error: ";

impl JxaError {
    /// Classifies osascript stderr into a bridge error.
    ///
    /// Strips the fixed `execution error: Error: ` prefix wherever it
    /// appears, then matches known patterns. Only the first stderr line
    /// matters; osascript prints one line per thrown error.
    pub fn classify_stderr(stderr: &str) -> Self {
        let line = stderr.lines().next().unwrap_or("").trim();
        let message = match line.find(EXECUTION_ERROR_PREFIX) {
            Some(pos) => &line[pos + EXECUTION_ERROR_PREFIX.len()..],
            None => line,
        };

        if message.contains("Application can't be found") {
            JxaError::AppNotFound(message.to_string())
        } else {
            JxaError::Script(message.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
