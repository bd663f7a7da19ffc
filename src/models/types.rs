//! Common domain type definitions
//!
//! This module contains the enum types used by the assessment model.

use std::fmt;

/// Symptom that calls for prompt attention on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UrgentSymptom {
    /// Confusion or disorientation
    Confusion,
    /// Persistent vomiting
    PersistentVomiting,
    /// Severe dehydration (dizziness, dry mouth, no urination)
    SevereDehydration,
}

impl UrgentSymptom {
    /// All urgent symptoms
    pub const ALL: [Self; 3] = [
        Self::Confusion,
        Self::PersistentVomiting,
        Self::SevereDehydration,
    ];

    /// Canonical snake_case code used in payloads
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Confusion => "confusion",
            Self::PersistentVomiting => "persistent_vomiting",
            Self::SevereDehydration => "severe_dehydration",
        }
    }

    /// Label shown on the intake form
    #[must_use]
    pub const fn form_label(self) -> &'static str {
        match self {
            Self::Confusion => "Confusion or disorientation",
            Self::PersistentVomiting => "Persistent vomiting",
            Self::SevereDehydration => "Severe dehydration (dizziness, dry mouth, no urination)",
        }
    }

    /// Recognize a symptom from its code or form label.
    ///
    /// Matching ignores case and surrounding whitespace, and treats spaces
    /// and hyphens as underscores. Returns `None` for anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if let Some(symptom) = Self::ALL
            .into_iter()
            .find(|symptom| symptom.form_label().eq_ignore_ascii_case(trimmed))
        {
            return Some(symptom);
        }

        let normalized: String = trimmed
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "confusion" | "disorientation" => Some(Self::Confusion),
            "persistent_vomiting" | "persistentvomiting" => Some(Self::PersistentVomiting),
            "severe_dehydration" | "severedehydration" => Some(Self::SevereDehydration),
            _ => None,
        }
    }
}

impl fmt::Display for UrgentSymptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Answer to a yes/no question the patient may leave unanswered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Answer {
    /// Explicit yes
    Yes,
    /// Explicit no
    No,
    /// Not answered
    #[default]
    Unknown,
}

impl Answer {
    /// True only for an explicit yes
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// True when the question was left unanswered
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl From<Option<bool>> for Answer {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unknown, Self::from)
    }
}
