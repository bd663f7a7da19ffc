//! Logging utilities for triage operations

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_breakdown, log_evaluation, log_ignored_entry, log_warning};
