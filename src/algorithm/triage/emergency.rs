//! Emergency warning rule of the intake form
//!
//! Independent of the numeric score: any single red flag is enough to
//! advise the patient to seek urgent care.

use crate::config::NONE_OF_THE_ABOVE;
use crate::models::assessment::Assessment;

/// Whether the answers contain a red flag that warrants urgent care.
///
/// A [`NONE_OF_THE_ABOVE`] infection entry is not a symptom, whatever the
/// intake configuration kept in the list. The score is unaffected.
#[must_use]
pub fn requires_urgent_care(assessment: &Assessment) -> bool {
    assessment.fever_above_102
        || !assessment.urgent_symptoms.is_empty()
        || assessment.severe_pain
        || assessment
            .infection_symptoms
            .iter()
            .any(|entry| !entry.trim().eq_ignore_ascii_case(NONE_OF_THE_ABOVE))
        || assessment.fall_without_confirmed_weight_bearing()
        || assessment.chronic_condition_worsened()
}
