//! safarikit - Safari integration helpers for a launcher companion
//!
//! Glue between a launcher-style UI and Safari: URL normalization, display
//! formatting, fuzzy search, day-bucketed history grouping, and an async
//! bridge that drives Safari over JXA (`osascript -l JavaScript`).
//!
//! # Architecture
//!
//! - [`jxa`] - The osascript bridge and its failure-reporting wrapper
//! - [`notify`] - Toast notifications and the [`notify::Notifier`] seam
//! - [`config`] - Preferences, loaded once at startup
//! - [`urls`] - Suspended-tab unwrapping and domain extraction
//! - [`text`] - Date formatting, title truncation, pluralization
//! - [`search`] - Fuzzy filtering over tab/history collections
//! - [`history`] - Folding history entries into per-day sections
//! - [`core`] - Shared error and data types
//!
//! # Failure policy
//!
//! Presentation helpers fail open: malformed URLs pass through, bad
//! timestamps render as "Invalid Date". Bridge failures terminate in a
//! toast via [`jxa::JxaBridge::execute`] and never reach the caller.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod history;
pub mod jxa;
pub mod notify;
pub mod search;
pub mod text;
pub mod urls;

// Re-export commonly used types
pub use config::Preferences;
pub use core::error::{Error, JxaError, Result};
pub use core::types::{HistoryItem, Tab};
pub use jxa::JxaBridge;
pub use notify::{LogNotifier, Notifier, Toast, ToastStyle};
