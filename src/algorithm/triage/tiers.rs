//! Urgency tiers for triage scores
//!
//! Maps a severity score onto one of six tiers, each carrying a label and
//! the delay within which an appointment should take place.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency tiers, ordered from most to least urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    /// Score 90 and above
    Immediate,
    /// Score 75 to 89
    VeryUrgent,
    /// Score 60 to 74
    Urgent,
    /// Score 40 to 59
    Within24Hours,
    /// Score 30 to 39
    Within2Days,
    /// Score below 30
    Routine,
}

/// Inclusive lower bound of each tier, highest first
static TIER_THRESHOLDS: [(u8, UrgencyTier); 6] = [
    (90, UrgencyTier::Immediate),
    (75, UrgencyTier::VeryUrgent),
    (60, UrgencyTier::Urgent),
    (40, UrgencyTier::Within24Hours),
    (30, UrgencyTier::Within2Days),
    (0, UrgencyTier::Routine),
];

impl UrgencyTier {
    /// All tiers, most urgent first
    pub const ALL: [Self; 6] = [
        Self::Immediate,
        Self::VeryUrgent,
        Self::Urgent,
        Self::Within24Hours,
        Self::Within2Days,
        Self::Routine,
    ];

    /// Classify a score. The first threshold the score reaches wins.
    #[must_use]
    pub fn classify(score: u8) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(min_score, _)| score >= *min_score)
            .map_or(Self::Routine, |(_, tier)| *tier)
    }

    /// Lowest score that falls in this tier
    #[must_use]
    pub fn min_score(self) -> u8 {
        TIER_THRESHOLDS
            .iter()
            .find(|(_, tier)| *tier == self)
            .map_or(0, |(min_score, _)| *min_score)
    }

    /// Short human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate attention required",
            Self::VeryUrgent => "Very urgent - appointment needed quickly",
            Self::Urgent => "Urgent - same-day appointment needed",
            Self::Within24Hours => "Schedule within 24 hours",
            Self::Within2Days => "Schedule within 2 days",
            Self::Routine => "Routine - wait for scheduled checkup",
        }
    }

    /// Sentence shown to the patient
    #[must_use]
    pub const fn patient_message(self) -> &'static str {
        match self {
            Self::Immediate => "IMMEDIATE ATTENTION REQUIRED",
            Self::VeryUrgent => "Very urgent - an appointment is needed quickly",
            Self::Urgent => "Urgent - a same-day appointment is needed",
            Self::Within24Hours => "Schedule an appointment within 24 hours",
            Self::Within2Days => "Schedule an appointment within 2 days",
            Self::Routine => "We recommend waiting until your routine checkup appointment",
        }
    }

    /// Delay after the assessment within which the appointment should happen
    #[must_use]
    pub fn appointment_offset(self) -> TimeDelta {
        match self {
            Self::Immediate => TimeDelta::hours(1),
            Self::VeryUrgent => TimeDelta::hours(2),
            Self::Urgent => TimeDelta::hours(4),
            Self::Within24Hours => TimeDelta::days(1),
            Self::Within2Days => TimeDelta::days(2),
            Self::Routine => TimeDelta::days(7),
        }
    }

    /// Whether the appointment falls on the same day as the assessment
    #[must_use]
    pub fn is_same_day(self) -> bool {
        self.appointment_offset() <= TimeDelta::hours(4)
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive_lower_edges() {
        assert_eq!(UrgencyTier::classify(100), UrgencyTier::Immediate);
        assert_eq!(UrgencyTier::classify(90), UrgencyTier::Immediate);
        assert_eq!(UrgencyTier::classify(89), UrgencyTier::VeryUrgent);
        assert_eq!(UrgencyTier::classify(75), UrgencyTier::VeryUrgent);
        assert_eq!(UrgencyTier::classify(74), UrgencyTier::Urgent);
        assert_eq!(UrgencyTier::classify(60), UrgencyTier::Urgent);
        assert_eq!(UrgencyTier::classify(59), UrgencyTier::Within24Hours);
        assert_eq!(UrgencyTier::classify(40), UrgencyTier::Within24Hours);
        assert_eq!(UrgencyTier::classify(39), UrgencyTier::Within2Days);
        assert_eq!(UrgencyTier::classify(30), UrgencyTier::Within2Days);
        assert_eq!(UrgencyTier::classify(29), UrgencyTier::Routine);
        assert_eq!(UrgencyTier::classify(0), UrgencyTier::Routine);
    }

    #[test]
    fn test_min_score_round_trips_through_classify() {
        for tier in UrgencyTier::ALL {
            assert_eq!(UrgencyTier::classify(tier.min_score()), tier);
        }
    }

    #[test]
    fn test_offsets_grow_as_urgency_drops() {
        for pair in UrgencyTier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].appointment_offset() < pair[1].appointment_offset());
        }
    }

    #[test]
    fn test_same_day_tiers() {
        assert!(UrgencyTier::Immediate.is_same_day());
        assert!(UrgencyTier::Urgent.is_same_day());
        assert!(!UrgencyTier::Within24Hours.is_same_day());
        assert!(!UrgencyTier::Routine.is_same_day());
    }
}
