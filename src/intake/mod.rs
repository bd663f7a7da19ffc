//! Boundary normalization of intake payloads
//!
//! Converts the loosely-typed JSON object posted by the intake form into a
//! validated [`Assessment`]. Missing keys and `null` values take their
//! defaults; values of the wrong JSON type fail fast with
//! [`TriageError::InvalidField`]. Scoring never sees a missing key.

use crate::config::TriageConfig;
use crate::error::{Result, TriageError};
use crate::models::assessment::Assessment;
use crate::models::types::{Answer, UrgentSymptom};
use crate::utils::logging::log_ignored_entry;
use log::debug;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Payload keys understood by intake
pub const KNOWN_FIELDS: [&str; 14] = [
    "fever_above_102",
    "urgent_symptoms",
    "severe_pain",
    "infection_symptoms",
    "has_immune_condition",
    "recent_fall",
    "can_bear_weight",
    "has_chronic_condition",
    "worsened_symptoms",
    "mental_health_concerns",
    "daily_assistance_needs",
    "medication_management_issues",
    "nutrition_concerns",
    "social_isolation",
];

/// Build an assessment from a single JSON object
pub fn assessment_from_json(payload: &Value, config: &TriageConfig) -> Result<Assessment> {
    let fields = payload.as_object().ok_or_else(|| {
        TriageError::InvalidPayload(format!(
            "expected an object, found {}",
            crate::error::json_type_name(payload)
        ))
    })?;

    check_unknown_fields(fields, config)?;

    Ok(Assessment {
        fever_above_102: read_flag(fields, "fever_above_102")?,
        urgent_symptoms: read_urgent_symptoms(fields, config)?,
        severe_pain: read_flag(fields, "severe_pain")?,
        infection_symptoms: read_entries(fields, "infection_symptoms", config)?,
        has_immune_condition: read_flag(fields, "has_immune_condition")?,
        recent_fall: read_flag(fields, "recent_fall")?,
        can_bear_weight: read_answer(fields, "can_bear_weight")?,
        has_chronic_condition: read_flag(fields, "has_chronic_condition")?,
        worsened_symptoms: read_answer(fields, "worsened_symptoms")?,
        mental_health_concerns: read_entries(fields, "mental_health_concerns", config)?,
        daily_assistance_needs: read_entries(fields, "daily_assistance_needs", config)?,
        medication_management_issues: read_flag(fields, "medication_management_issues")?,
        nutrition_concerns: read_flag(fields, "nutrition_concerns")?,
        social_isolation: read_flag(fields, "social_isolation")?,
    })
}

/// Build assessments from a single object or an array of objects.
///
/// Errors raised for an array element are wrapped in
/// [`TriageError::BatchItem`] with the element's position.
pub fn assessments_from_json(payload: &Value, config: &TriageConfig) -> Result<Vec<Assessment>> {
    match payload {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                assessment_from_json(item, config).map_err(|e| e.in_batch_item(index))
            })
            .collect(),
        _ => Ok(vec![assessment_from_json(payload, config)?]),
    }
}

fn check_unknown_fields(fields: &Map<String, Value>, config: &TriageConfig) -> Result<()> {
    for key in fields.keys() {
        if KNOWN_FIELDS.contains(&key.as_str()) {
            continue;
        }
        if config.reject_unknown_fields {
            return Err(TriageError::UnknownField(key.clone()));
        }
        debug!("Ignoring unknown intake field: {key}");
    }
    Ok(())
}

/// Value of a key, treating `null` as absent
fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

fn read_flag(fields: &Map<String, Value>, key: &str) -> Result<bool> {
    match present(fields, key) {
        None => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(other) => Err(TriageError::invalid_field(key, "boolean", other)),
    }
}

fn read_answer(fields: &Map<String, Value>, key: &str) -> Result<Answer> {
    match present(fields, key) {
        None => Ok(Answer::Unknown),
        Some(Value::Bool(value)) => Ok(Answer::from(*value)),
        Some(other) => Err(TriageError::invalid_field(key, "boolean or null", other)),
    }
}

fn read_strings<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<Vec<&'a str>> {
    let Some(value) = present(fields, key) else {
        return Ok(Vec::new());
    };
    let items = value
        .as_array()
        .ok_or_else(|| TriageError::invalid_field(key, "array of strings", value))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .ok_or_else(|| TriageError::invalid_field(format!("{key}[{index}]"), "string", item))
        })
        .collect()
}

fn read_entries(
    fields: &Map<String, Value>,
    key: &str,
    config: &TriageConfig,
) -> Result<Vec<String>> {
    Ok(read_strings(fields, key)?
        .into_iter()
        .filter(|entry| !config.is_ignored_entry(entry))
        .map(str::to_string)
        .collect())
}

fn read_urgent_symptoms(
    fields: &Map<String, Value>,
    config: &TriageConfig,
) -> Result<BTreeSet<UrgentSymptom>> {
    let mut symptoms = BTreeSet::new();
    for entry in read_strings(fields, "urgent_symptoms")? {
        if config.is_ignored_entry(entry) {
            continue;
        }
        match UrgentSymptom::parse(entry) {
            Some(symptom) => {
                symptoms.insert(symptom);
            }
            None => log_ignored_entry("urgent_symptoms", entry),
        }
    }
    Ok(symptoms)
}
