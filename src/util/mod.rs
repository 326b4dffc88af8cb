//! Utility functions module
//! 
//! Contains helpers for percentage rounding and human-readable
//! formatting of delays and progress.

pub mod format;

// Re-export commonly used functions
pub use format::{format_delay, progress_percent, round_percent};
