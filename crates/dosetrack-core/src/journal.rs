//! The adherence journal: an ordered collection of daily entries.
//!
//! Invariant: at most one entry per calendar date. Recording a date that
//! already has an entry replaces its fields in place while keeping the
//! entry's identity (`id` and `created_at` survive re-records).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entry::{DailyEntry, EntryDraft, EntryPatch};
use crate::error::{CoreError, Result, ValidationError};

/// The collection of daily entries, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<DailyEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a journal from a stored snapshot.
    ///
    /// Snapshots are produced by this crate, so the per-date uniqueness
    /// invariant already holds for the input.
    pub fn from_entries(entries: Vec<DailyEntry>) -> Self {
        Self { entries }
    }

    /// Record a day. Inserts a new entry, or replaces the fields of the
    /// existing entry for that date.
    ///
    /// Out-of-range ratings are rejected, not clamped. Returns the id of
    /// the affected entry; for a replaced date this is the original id.
    pub fn upsert(&mut self, draft: EntryDraft, now: DateTime<Utc>) -> Result<Uuid, ValidationError> {
        draft.validate()?;

        if let Some(existing) = self.entries.iter_mut().find(|e| e.date == draft.date) {
            existing.medication_taken = draft.medication_taken;
            existing.symptoms = draft.symptoms;
            existing.performance = draft.performance;
            existing.notes = draft.notes;
            return Ok(existing.id);
        }

        let entry = DailyEntry {
            id: Uuid::new_v4(),
            date: draft.date,
            medication_taken: draft.medication_taken,
            symptoms: draft.symptoms,
            performance: draft.performance,
            notes: draft.notes,
            created_at: now,
        };
        let id = entry.id;
        // Newest first, matching read order in the presentation layer
        self.entries.insert(0, entry);
        Ok(id)
    }

    /// Apply a partial update to the entry with the given id.
    ///
    /// A missing id is an error, not a silent no-op. Validation runs
    /// before any field is touched, so a failed patch leaves the entry
    /// unchanged.
    pub fn apply_patch(&mut self, id: Uuid, patch: EntryPatch) -> Result<&DailyEntry> {
        patch.validate()?;

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(CoreError::EntryNotFound(id))?;

        if let Some(medication_taken) = patch.medication_taken {
            entry.medication_taken = medication_taken;
        }
        if let Some(symptoms) = patch.symptoms {
            entry.symptoms = symptoms;
        }
        if let Some(performance) = patch.performance {
            entry.performance = performance;
        }
        if let Some(notes) = patch.notes {
            entry.notes = notes;
        }
        Ok(entry)
    }

    /// All entries, newest recorded date first for fresh inserts.
    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    /// The entry for a calendar date, if one was recorded.
    pub fn entry_for(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// The entry with the given id, if present.
    pub fn entry(&self, id: Uuid) -> Option<&DailyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the journal, yielding its entries for a snapshot.
    pub fn into_entries(self) -> Vec<DailyEntry> {
        self.entries
    }
}
