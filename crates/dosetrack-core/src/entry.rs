//! Daily journal entries and their validation.
//!
//! One entry per calendar date records whether the dose was taken plus
//! four self-reported symptom ratings. Dates are pure calendar values
//! (`NaiveDate`, no time component, no timezone).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// The four self-reported symptom ratings, each in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomScores {
    pub energy: u8,
    pub libido: u8,
    pub rigidity: u8,
    pub self_esteem: u8,
}

impl SymptomScores {
    /// Check every rating against the allowed `1..=10` range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("energy", self.energy),
            ("libido", self.libido),
            ("rigidity", self.rigidity),
            ("self_esteem", self.self_esteem),
        ];
        for (field, value) in fields {
            if !(1..=10).contains(&value) {
                return Err(ValidationError::RatingOutOfRange {
                    field,
                    value,
                    min: 1,
                    max: 10,
                });
            }
        }
        Ok(())
    }
}

/// A recorded day in the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Stable identity, assigned at first creation for the date
    pub id: Uuid,

    /// Calendar date; the journal holds at most one entry per date
    pub date: NaiveDate,

    /// Whether the dose was taken on this date
    pub medication_taken: bool,

    /// Symptom ratings
    pub symptoms: SymptomScores,

    /// Optional performance rating in `0..=10`
    #[serde(default)]
    pub performance: Option<u8>,

    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Timestamp of first creation; never changes afterwards
    pub created_at: DateTime<Utc>,
}

/// Candidate for [`Journal::upsert`]: a [`DailyEntry`] without identity.
///
/// [`Journal::upsert`]: crate::journal::Journal::upsert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub medication_taken: bool,
    pub symptoms: SymptomScores,
    #[serde(default)]
    pub performance: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EntryDraft {
    /// Validate every rating the draft carries.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.symptoms.validate()?;
        validate_performance(self.performance)
    }
}

/// Partial update for an existing entry.
///
/// `None` leaves a field untouched. For the two optional entry fields the
/// inner option distinguishes setting a value (`Some(Some(v))`) from
/// clearing it (`Some(None)`). A patch can never change `date`, `id`, or
/// `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default)]
    pub medication_taken: Option<bool>,
    #[serde(default)]
    pub symptoms: Option<SymptomScores>,
    #[serde(default)]
    pub performance: Option<Option<u8>>,
    #[serde(default)]
    pub notes: Option<Option<String>>,
}

impl EntryPatch {
    /// Validate every rating the patch carries.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(symptoms) = &self.symptoms {
            symptoms.validate()?;
        }
        if let Some(performance) = self.performance {
            validate_performance(performance)?;
        }
        Ok(())
    }

    /// True if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.medication_taken.is_none()
            && self.symptoms.is_none()
            && self.performance.is_none()
            && self.notes.is_none()
    }
}

fn validate_performance(performance: Option<u8>) -> Result<(), ValidationError> {
    match performance {
        Some(value) if value > 10 => Err(ValidationError::RatingOutOfRange {
            field: "performance",
            value,
            min: 0,
            max: 10,
        }),
        _ => Ok(()),
    }
}

/// Parse the `YYYY-MM-DD` date format used at the presentation boundary.
pub fn parse_entry_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| ValidationError::MalformedDate {
        input: input.to_string(),
    })
}
