//! Core types shared across the crate
//!
//! - [`error`]: Error types and stderr classification for the JXA bridge
//! - [`types`]: Data shapes (`Tab`, `HistoryItem`) supplied by the scripts

pub mod error;
pub mod types;
