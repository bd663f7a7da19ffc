//! End-to-end processing of intake payloads
//!
//! Normalizes a payload, scores it and builds the report, logging one
//! line per assessment.

use crate::algorithm::triage::{requires_urgent_care, score_breakdown};
use crate::config::TriageConfig;
use crate::error::Result;
use crate::intake::{assessment_from_json, assessments_from_json};
use crate::models::assessment::Assessment;
use crate::models::evaluation::EvaluationResult;
use crate::report::TriageReport;
use crate::utils::logging::{log_breakdown, log_evaluation, log_warning};
use chrono::NaiveDateTime;
use rayon::prelude::*;
use serde_json::Value;

/// Score a validated assessment and build its report
pub fn report_for(
    assessment: &Assessment,
    assessed_at: NaiveDateTime,
    config: &TriageConfig,
) -> Result<TriageReport> {
    let breakdown = score_breakdown(assessment);
    let result = EvaluationResult::from_score(breakdown.score);
    let report = TriageReport::new(
        &result,
        requires_urgent_care(assessment),
        assessed_at,
        config,
    )?;

    if config.log_evaluations {
        log_breakdown(&breakdown);
        log_evaluation(&result, &report.recommended_appointment);
    }

    Ok(report)
}

/// Process a single intake payload
pub fn process_payload(
    payload: &Value,
    assessed_at: NaiveDateTime,
    config: &TriageConfig,
) -> Result<TriageReport> {
    config.validate()?;
    let assessment = assessment_from_json(payload, config)?;
    report_for(&assessment, assessed_at, config)
}

/// Process a single payload or an array of payloads.
///
/// Every item is validated before any is scored, so one bad item fails
/// the whole batch. Scoring runs in parallel and reports keep the input
/// order.
pub fn process_batch(
    payload: &Value,
    assessed_at: NaiveDateTime,
    config: &TriageConfig,
) -> Result<Vec<TriageReport>> {
    config.validate()?;
    let assessments = assessments_from_json(payload, config)?;
    if assessments.is_empty() {
        log_warning("Batch payload contained no assessments", None);
    }

    assessments
        .par_iter()
        .enumerate()
        .map(|(index, assessment)| {
            report_for(assessment, assessed_at, config).map_err(|e| e.in_batch_item(index))
        })
        .collect()
}
