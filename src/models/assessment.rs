//! Patient self-assessment model
//!
//! An [`Assessment`] is the validated, strongly-typed answer set of one
//! intake form. Every field has a well-defined default, so
//! `Assessment::default()` is the form with nothing ticked. Untyped
//! payloads go through [`crate::intake`], which applies those defaults.

use crate::models::types::{Answer, UrgentSymptom};
use std::collections::BTreeSet;

/// Answers from one patient self-assessment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assessment {
    /// Fever above 102°F
    pub fever_above_102: bool,
    /// Urgent symptoms reported
    pub urgent_symptoms: BTreeSet<UrgentSymptom>,
    /// Severe pain
    pub severe_pain: bool,
    /// Infection symptoms, one entry per reported symptom
    pub infection_symptoms: Vec<String>,
    /// Known immune-compromising condition
    pub has_immune_condition: bool,
    /// Fell recently
    pub recent_fall: bool,
    /// Able to bear weight after the fall
    pub can_bear_weight: Answer,
    /// Has a chronic condition
    pub has_chronic_condition: bool,
    /// Chronic condition symptoms are worse today
    pub worsened_symptoms: Answer,
    /// Mental health concerns reported
    pub mental_health_concerns: Vec<String>,
    /// Daily activities the patient needs help with
    pub daily_assistance_needs: Vec<String>,
    /// Trouble managing medication
    pub medication_management_issues: bool,
    /// Poor nutrition
    pub nutrition_concerns: bool,
    /// Loneliness or social isolation
    pub social_isolation: bool,
}

impl Assessment {
    /// Create an assessment with every field at its default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fall where weight-bearing was not confirmed.
    ///
    /// An unanswered weight-bearing question counts the same as "no".
    #[must_use]
    pub const fn fall_without_confirmed_weight_bearing(&self) -> bool {
        self.recent_fall && !self.can_bear_weight.is_yes()
    }

    /// A chronic condition whose symptoms are confirmed worse today.
    ///
    /// An unanswered worsening question does not count.
    #[must_use]
    pub const fn chronic_condition_worsened(&self) -> bool {
        self.has_chronic_condition && self.worsened_symptoms.is_yes()
    }

    /// Set the fever flag
    #[must_use]
    pub const fn with_fever_above_102(mut self, value: bool) -> Self {
        self.fever_above_102 = value;
        self
    }

    /// Add an urgent symptom
    #[must_use]
    pub fn with_urgent_symptom(mut self, symptom: UrgentSymptom) -> Self {
        self.urgent_symptoms.insert(symptom);
        self
    }

    /// Set the severe pain flag
    #[must_use]
    pub const fn with_severe_pain(mut self, value: bool) -> Self {
        self.severe_pain = value;
        self
    }

    /// Add an infection symptom
    #[must_use]
    pub fn with_infection_symptom(mut self, symptom: impl Into<String>) -> Self {
        self.infection_symptoms.push(symptom.into());
        self
    }

    /// Set the immune condition flag
    #[must_use]
    pub const fn with_immune_condition(mut self, value: bool) -> Self {
        self.has_immune_condition = value;
        self
    }

    /// Set the recent fall flag
    #[must_use]
    pub const fn with_recent_fall(mut self, value: bool) -> Self {
        self.recent_fall = value;
        self
    }

    /// Answer the weight-bearing question
    #[must_use]
    pub const fn with_can_bear_weight(mut self, answer: Answer) -> Self {
        self.can_bear_weight = answer;
        self
    }

    /// Set the chronic condition flag
    #[must_use]
    pub const fn with_chronic_condition(mut self, value: bool) -> Self {
        self.has_chronic_condition = value;
        self
    }

    /// Answer the worsened symptoms question
    #[must_use]
    pub const fn with_worsened_symptoms(mut self, answer: Answer) -> Self {
        self.worsened_symptoms = answer;
        self
    }

    /// Add a mental health concern
    #[must_use]
    pub fn with_mental_health_concern(mut self, concern: impl Into<String>) -> Self {
        self.mental_health_concerns.push(concern.into());
        self
    }

    /// Add a daily assistance need
    #[must_use]
    pub fn with_daily_assistance_need(mut self, need: impl Into<String>) -> Self {
        self.daily_assistance_needs.push(need.into());
        self
    }

    /// Set the medication management flag
    #[must_use]
    pub const fn with_medication_management_issues(mut self, value: bool) -> Self {
        self.medication_management_issues = value;
        self
    }

    /// Set the nutrition flag
    #[must_use]
    pub const fn with_nutrition_concerns(mut self, value: bool) -> Self {
        self.nutrition_concerns = value;
        self
    }

    /// Set the social isolation flag
    #[must_use]
    pub const fn with_social_isolation(mut self, value: bool) -> Self {
        self.social_isolation = value;
        self
    }
}
