//! Triage report for transport
//!
//! Turns an [`EvaluationResult`] into absolute, formatted times. The
//! assessment time is always supplied by the caller.

use crate::algorithm::triage::UrgencyTier;
use crate::config::TriageConfig;
use crate::error::{Result, TriageError};
use crate::models::evaluation::EvaluationResult;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Recommended appointment time for a result assessed at `assessed_at`.
///
/// Returns `None` when the sum falls outside chrono's calendar range.
#[must_use]
pub fn appointment_time(
    result: &EvaluationResult,
    assessed_at: NaiveDateTime,
) -> Option<NaiveDateTime> {
    assessed_at.checked_add_signed(result.appointment_offset)
}

/// Format a timestamp with the configured format
pub fn format_timestamp(timestamp: NaiveDateTime, config: &TriageConfig) -> Result<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", timestamp.format(&config.timestamp_format)).map_err(|_| {
        TriageError::Config(format!(
            "invalid timestamp_format `{}`",
            config.timestamp_format
        ))
    })?;
    Ok(rendered)
}

/// Serializable outcome of one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageReport {
    /// Severity score, 0 to 100
    pub severity_score: u8,
    /// Urgency tier
    pub urgency_tier: UrgencyTier,
    /// Tier label
    pub urgency_label: String,
    /// Sentence shown to the patient
    pub urgency_message: String,
    /// Formatted recommended appointment time
    pub recommended_appointment: String,
    /// Whether the appointment should happen the same day
    pub same_day_appointment: bool,
    /// Formatted time the assessment was performed
    pub assessment_time: String,
    /// Whether the answers contain a red flag that warrants urgent care
    pub urgent_care_advised: bool,
}

impl TriageReport {
    /// Build a report from an evaluation result.
    ///
    /// Fails with [`TriageError::Config`] if the timestamp format cannot be
    /// rendered and with [`TriageError::TimeOutOfRange`] if the appointment
    /// time overflows the calendar.
    pub fn new(
        result: &EvaluationResult,
        urgent_care_advised: bool,
        assessed_at: NaiveDateTime,
        config: &TriageConfig,
    ) -> Result<Self> {
        let appointment = appointment_time(result, assessed_at).ok_or_else(|| {
            TriageError::TimeOutOfRange(format!(
                "{assessed_at} + {} for tier {}",
                result.appointment_offset, result.urgency_tier
            ))
        })?;

        Ok(Self {
            severity_score: result.score,
            urgency_tier: result.urgency_tier,
            urgency_label: result.urgency_tier.label().to_string(),
            urgency_message: result.urgency_tier.patient_message().to_string(),
            recommended_appointment: format_timestamp(appointment, config)?,
            same_day_appointment: result.urgency_tier.is_same_day(),
            assessment_time: format_timestamp(assessed_at, config)?,
            urgent_care_advised,
        })
    }
}
