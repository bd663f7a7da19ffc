//! A Rust library for scoring patient self-assessments into a severity
//! score, an urgency tier and a recommended appointment deadline.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod processing;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::TriageConfig;
pub use error::{Result, TriageError};
pub use models::{Answer, Assessment, EvaluationResult, MAX_SCORE, UrgentSymptom};

// Scoring
pub use algorithm::triage::{
    Contribution, ContributionKind, ScoreBreakdown, UrgencyTier, evaluate, evaluate_all,
    requires_urgent_care, score_breakdown,
};

// Boundary
pub use intake::{assessment_from_json, assessments_from_json};
pub use processing::{process_batch, process_payload, report_for};
pub use report::{TriageReport, appointment_time, format_timestamp};
