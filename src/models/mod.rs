//! Domain models for patient triage
//!
//! The input side is [`Assessment`], the output side [`EvaluationResult`].

pub mod assessment;
pub mod evaluation;
pub mod types;

pub use assessment::Assessment;
pub use evaluation::{EvaluationResult, MAX_SCORE};
pub use types::{Answer, UrgentSymptom};
