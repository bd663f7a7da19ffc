//! Evaluation result model

use crate::algorithm::triage::tiers::UrgencyTier;
use chrono::TimeDelta;

/// Highest possible severity score
pub const MAX_SCORE: u8 = 100;

/// Outcome of scoring one assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationResult {
    /// Severity score, between 0 and [`MAX_SCORE`]
    pub score: u8,
    /// Urgency tier the score falls in
    pub urgency_tier: UrgencyTier,
    /// How long after the assessment the appointment should be scheduled
    pub appointment_offset: TimeDelta,
}

impl EvaluationResult {
    /// Build the result for a clamped score
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        let urgency_tier = UrgencyTier::classify(score);
        Self {
            score,
            urgency_tier,
            appointment_offset: urgency_tier.appointment_offset(),
        }
    }
}
