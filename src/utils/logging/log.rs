//! Logging utilities
//!
//! This module provides standardized log lines for triage operations.

use crate::algorithm::triage::ScoreBreakdown;
use crate::models::evaluation::EvaluationResult;

/// Log a completed evaluation with consistent format
///
/// # Arguments
/// * `result` - The evaluation outcome
/// * `appointment` - Formatted recommended appointment time
pub fn log_evaluation(result: &EvaluationResult, appointment: &str) {
    log::info!(
        "score: {} urgency: {} appt_time: {}",
        result.score,
        result.urgency_tier,
        appointment
    );
}

/// Log the contributions behind a score at debug level
pub fn log_breakdown(breakdown: &ScoreBreakdown) {
    if breakdown.was_truncated() {
        log::debug!(
            "Raw score {} truncated to {} ({})",
            breakdown.raw_total,
            breakdown.score,
            breakdown.summary()
        );
    } else {
        log::debug!("Score {} ({})", breakdown.score, breakdown.summary());
    }
}

/// Log a list entry that intake could not recognize
///
/// # Arguments
/// * `field` - Payload field the entry came from
/// * `entry` - The unrecognized entry
pub fn log_ignored_entry(field: &str, entry: &str) {
    log::debug!("Ignoring unrecognized entry in {field}: {entry:?}");
}

/// Log a warning with consistent format
pub fn log_warning(message: &str, context: Option<&str>) {
    if let Some(context) = context {
        log::warn!("{message}: {context}");
    } else {
        log::warn!("{message}");
    }
}
