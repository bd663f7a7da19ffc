//! Severity scoring for patient self-assessments
//!
//! This module turns an [`Assessment`] into a bounded severity score, an
//! urgency tier and an appointment offset. The score is the sum of
//! independent contributions, each derived from one or more answers and
//! sometimes capped or multiplied on its own, then truncated at 100.
//!
//! Evaluation is pure: no clock, no I/O, no shared state. The caller adds
//! the returned offset to its own notion of "now".

pub mod emergency;
pub mod tiers;
pub mod weights;

use crate::models::assessment::Assessment;
use crate::models::evaluation::{EvaluationResult, MAX_SCORE};
use itertools::Itertools;
use rayon::prelude::*;
use smallvec::SmallVec;
use std::fmt;
use weights::{
    CHRONIC_WORSENED_POINTS, DAILY_ASSISTANCE_CAP, DAILY_ASSISTANCE_POINTS_PER_NEED, FALL_POINTS,
    FEVER_POINTS, IMMUNE_MULTIPLIER, INFECTION_CAP, INFECTION_POINTS_PER_SYMPTOM,
    MEDICATION_POINTS, MENTAL_HEALTH_CAP, MENTAL_HEALTH_POINTS_PER_CONCERN, NUTRITION_POINTS,
    SEVERE_PAIN_POINTS, SOCIAL_ISOLATION_POINTS, per_entry_points, urgent_symptom_weight,
};

pub use emergency::requires_urgent_care;
pub use tiers::UrgencyTier;

/// Risk factor behind one score contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContributionKind {
    /// Fever above 102°F
    Fever,
    /// Weighted urgent symptoms
    UrgentSymptoms,
    /// Severe pain
    SeverePain,
    /// Infection symptoms, with immune multiplier and cap
    Infection,
    /// Fall without confirmed weight-bearing
    Fall,
    /// Chronic condition that got worse
    ChronicWorsened,
    /// Mental health concerns, capped
    MentalHealth,
    /// Daily assistance needs, capped
    DailyAssistance,
    /// Medication management issues
    Medication,
    /// Nutrition concerns
    Nutrition,
    /// Social isolation
    SocialIsolation,
}

impl ContributionKind {
    /// Short name for logs and summaries
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fever => "fever",
            Self::UrgentSymptoms => "urgent symptoms",
            Self::SeverePain => "severe pain",
            Self::Infection => "infection",
            Self::Fall => "fall",
            Self::ChronicWorsened => "chronic worsening",
            Self::MentalHealth => "mental health",
            Self::DailyAssistance => "daily assistance",
            Self::Medication => "medication",
            Self::Nutrition => "nutrition",
            Self::SocialIsolation => "social isolation",
        }
    }
}

impl fmt::Display for ContributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Points added by one risk factor, after its own cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    /// Risk factor
    pub kind: ContributionKind,
    /// Points added to the raw total
    pub points: u32,
}

/// Every contribution to a score, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// One entry per risk factor, zero-point entries included
    pub contributions: SmallVec<[Contribution; 11]>,
    /// Sum of contributions before truncation
    pub raw_total: u32,
    /// Final score, truncated to [`MAX_SCORE`]
    pub score: u8,
}

impl ScoreBreakdown {
    /// Points from a given risk factor
    #[must_use]
    pub fn points_for(&self, kind: ContributionKind) -> u32 {
        self.contributions
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.points)
            .sum()
    }

    /// Whether the raw total exceeded the maximum score
    #[must_use]
    pub fn was_truncated(&self) -> bool {
        self.raw_total > u32::from(MAX_SCORE)
    }

    /// One-line summary of the non-zero contributions, e.g. `fever +20, severe pain +20`
    #[must_use]
    pub fn summary(&self) -> String {
        let summary = self
            .contributions
            .iter()
            .filter(|c| c.points > 0)
            .map(|c| format!("{} +{}", c.kind, c.points))
            .join(", ");
        if summary.is_empty() {
            "no risk factors".to_string()
        } else {
            summary
        }
    }
}

const fn flag_points(flag: bool, points: u32) -> u32 {
    if flag { points } else { 0 }
}

fn infection_points(assessment: &Assessment) -> u32 {
    let subtotal = per_entry_points(
        assessment.infection_symptoms.len(),
        INFECTION_POINTS_PER_SYMPTOM,
    );
    let (numerator, denominator) = IMMUNE_MULTIPLIER;
    let subtotal = if assessment.has_immune_condition && subtotal > 0 {
        subtotal.saturating_mul(numerator) / denominator
    } else {
        subtotal
    };
    subtotal.min(INFECTION_CAP)
}

/// Score an assessment and list what each risk factor contributed
#[must_use]
pub fn score_breakdown(assessment: &Assessment) -> ScoreBreakdown {
    let urgent_points = assessment
        .urgent_symptoms
        .iter()
        .map(|symptom| urgent_symptom_weight(*symptom))
        .fold(0u32, u32::saturating_add);

    let contributions: SmallVec<[Contribution; 11]> = [
        (
            ContributionKind::Fever,
            flag_points(assessment.fever_above_102, FEVER_POINTS),
        ),
        (ContributionKind::UrgentSymptoms, urgent_points),
        (
            ContributionKind::SeverePain,
            flag_points(assessment.severe_pain, SEVERE_PAIN_POINTS),
        ),
        (ContributionKind::Infection, infection_points(assessment)),
        (
            ContributionKind::Fall,
            flag_points(assessment.fall_without_confirmed_weight_bearing(), FALL_POINTS),
        ),
        (
            ContributionKind::ChronicWorsened,
            flag_points(assessment.chronic_condition_worsened(), CHRONIC_WORSENED_POINTS),
        ),
        (
            ContributionKind::MentalHealth,
            per_entry_points(
                assessment.mental_health_concerns.len(),
                MENTAL_HEALTH_POINTS_PER_CONCERN,
            )
            .min(MENTAL_HEALTH_CAP),
        ),
        (
            ContributionKind::DailyAssistance,
            per_entry_points(
                assessment.daily_assistance_needs.len(),
                DAILY_ASSISTANCE_POINTS_PER_NEED,
            )
            .min(DAILY_ASSISTANCE_CAP),
        ),
        (
            ContributionKind::Medication,
            flag_points(assessment.medication_management_issues, MEDICATION_POINTS),
        ),
        (
            ContributionKind::Nutrition,
            flag_points(assessment.nutrition_concerns, NUTRITION_POINTS),
        ),
        (
            ContributionKind::SocialIsolation,
            flag_points(assessment.social_isolation, SOCIAL_ISOLATION_POINTS),
        ),
    ]
    .into_iter()
    .map(|(kind, points)| Contribution { kind, points })
    .collect();

    let raw_total = contributions
        .iter()
        .map(|c| c.points)
        .fold(0u32, u32::saturating_add);
    // Truncated to MAX_SCORE, so the conversion cannot fail
    let score = u8::try_from(raw_total.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE);

    ScoreBreakdown {
        contributions,
        raw_total,
        score,
    }
}

/// Evaluate an assessment into a score, urgency tier and appointment offset
#[must_use]
pub fn evaluate(assessment: &Assessment) -> EvaluationResult {
    EvaluationResult::from_score(score_breakdown(assessment).score)
}

/// Evaluate many assessments in parallel, preserving input order
#[must_use]
pub fn evaluate_all(assessments: &[Assessment]) -> Vec<EvaluationResult> {
    assessments.par_iter().map(evaluate).collect()
}
