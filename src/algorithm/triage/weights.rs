//! Fixed scoring weights
//!
//! Points per risk factor, with the caps and multiplier applied to the
//! list-based contributions before they enter the total.

use crate::models::types::UrgentSymptom;

/// Fever above 102°F
pub const FEVER_POINTS: u32 = 20;

/// Severe pain
pub const SEVERE_PAIN_POINTS: u32 = 20;

/// Points per infection symptom
pub const INFECTION_POINTS_PER_SYMPTOM: u32 = 10;
/// Immune condition multiplier for the infection subtotal, as numerator/denominator (x1.5)
pub const IMMUNE_MULTIPLIER: (u32, u32) = (3, 2);
/// Cap on the infection contribution, applied after the multiplier
pub const INFECTION_CAP: u32 = 30;

/// Fall without confirmed weight-bearing
pub const FALL_POINTS: u32 = 20;

/// Chronic condition with worsened symptoms
pub const CHRONIC_WORSENED_POINTS: u32 = 25;

/// Points per mental health concern
pub const MENTAL_HEALTH_POINTS_PER_CONCERN: u32 = 10;
/// Cap on the mental health contribution
pub const MENTAL_HEALTH_CAP: u32 = 10;

/// Points per daily assistance need
pub const DAILY_ASSISTANCE_POINTS_PER_NEED: u32 = 3;
/// Cap on the daily assistance contribution
pub const DAILY_ASSISTANCE_CAP: u32 = 10;

/// Medication management issues
pub const MEDICATION_POINTS: u32 = 5;
/// Nutrition concerns
pub const NUTRITION_POINTS: u32 = 2;
/// Social isolation
pub const SOCIAL_ISOLATION_POINTS: u32 = 2;

/// Weight of each urgent symptom
pub static URGENT_SYMPTOM_WEIGHTS: [(UrgentSymptom, u32); 3] = [
    (UrgentSymptom::Confusion, 15),
    (UrgentSymptom::PersistentVomiting, 20),
    (UrgentSymptom::SevereDehydration, 25),
];

/// Look up the weight of an urgent symptom
#[must_use]
pub fn urgent_symptom_weight(symptom: UrgentSymptom) -> u32 {
    URGENT_SYMPTOM_WEIGHTS
        .iter()
        .find(|(candidate, _)| *candidate == symptom)
        .map_or(0, |(_, weight)| *weight)
}

/// Number of list entries as points, saturating instead of overflowing
#[must_use]
pub fn per_entry_points(entries: usize, points_per_entry: u32) -> u32 {
    u32::try_from(entries)
        .unwrap_or(u32::MAX)
        .saturating_mul(points_per_entry)
}
