//! Program engine: owns the journal and the milestone catalog, runs the
//! record -> re-evaluate -> persist pipeline.
//!
//! The engine is the single mutation point. Every write validates input,
//! updates the journal, re-derives the streak and totals, evaluates
//! milestone unlocks with the updated log, and hands a complete state
//! snapshot to the injected store. Reads are plain derivations over the
//! in-memory state. Everything is synchronous; exactly one session
//! mutates the engine at a time.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::entry::{DailyEntry, EntryDraft, EntryPatch};
use crate::error::Result;
use crate::journal::Journal;
use crate::milestones::{default_catalog, evaluate_milestones, Milestone};
use crate::stats::{
    average_performance, current_streak, daily_series, program_progress, total_adherent_days,
    weekly_summaries, DailyPoint, ProgramProgress, WeeklySummary,
};
use crate::storage::{ProgramConfig, ProgramState, SnapshotStore};

/// What the presentation layer needs after a mutation: the affected
/// entry plus the freshly derived numbers and any unlocks to announce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub entry_id: Uuid,
    pub current_streak: u32,
    pub total_adherent_days: u32,
    /// Milestone ids unlocked by this mutation, in catalog order
    pub newly_unlocked: Vec<String>,
}

/// The adherence engine for one session's program.
pub struct ProgramEngine<S: SnapshotStore> {
    journal: Journal,
    catalog: Vec<Milestone>,
    config: ProgramConfig,
    store: S,
}

impl<S: SnapshotStore> ProgramEngine<S> {
    /// Open with the default configuration. Loads the previously stored
    /// state, or seeds an empty journal and the default catalog when the
    /// store has nothing yet.
    pub fn open(store: S) -> Result<Self> {
        Self::with_config(store, ProgramConfig::default())
    }

    /// Open with an explicit configuration.
    pub fn with_config(store: S, config: ProgramConfig) -> Result<Self> {
        let (journal, catalog) = match store.load()? {
            Some(state) => (Journal::from_entries(state.entries), state.milestones),
            None => {
                info!("no stored state found, seeding default catalog");
                (Journal::new(), default_catalog())
            }
        };
        Ok(Self {
            journal,
            catalog,
            config,
            store,
        })
    }

    /// Record (or re-record) a day's entry, then re-evaluate milestones
    /// and persist the full state.
    pub fn record_entry(&mut self, draft: EntryDraft) -> Result<RecordOutcome> {
        self.record_entry_at(draft, Utc::now())
    }

    /// [`record_entry`](Self::record_entry) with an explicit clock, for
    /// deterministic callers and tests. `now.date_naive()` is the "today"
    /// the streak anchors to.
    pub fn record_entry_at(
        &mut self,
        draft: EntryDraft,
        now: DateTime<Utc>,
    ) -> Result<RecordOutcome> {
        debug!(date = %draft.date, taken = draft.medication_taken, "recording entry");
        let entry_id = self.journal.upsert(draft, now)?;
        self.reevaluate(entry_id, now)
    }

    /// Apply a partial update to an existing entry, then re-evaluate
    /// milestones and persist. Unknown ids are an error.
    pub fn update_entry(&mut self, id: Uuid, patch: EntryPatch) -> Result<RecordOutcome> {
        self.update_entry_at(id, patch, Utc::now())
    }

    /// [`update_entry`](Self::update_entry) with an explicit clock.
    pub fn update_entry_at(
        &mut self,
        id: Uuid,
        patch: EntryPatch,
        now: DateTime<Utc>,
    ) -> Result<RecordOutcome> {
        self.journal.apply_patch(id, patch)?;
        self.reevaluate(id, now)
    }

    fn reevaluate(&mut self, entry_id: Uuid, now: DateTime<Utc>) -> Result<RecordOutcome> {
        let total = total_adherent_days(self.journal.entries());
        let streak = current_streak(self.journal.entries(), now.date_naive());
        let newly_unlocked = evaluate_milestones(&mut self.catalog, total, streak, now);
        if !newly_unlocked.is_empty() {
            info!(milestones = ?newly_unlocked, "milestones unlocked");
        }

        let state = self.snapshot();
        self.store.save(&state)?;

        Ok(RecordOutcome {
            entry_id,
            current_streak: streak,
            total_adherent_days: total,
            newly_unlocked,
        })
    }

    /// All journal entries.
    pub fn entries(&self) -> &[DailyEntry] {
        self.journal.entries()
    }

    /// The entry recorded for a calendar date, if any.
    pub fn entry_for(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.journal.entry_for(date)
    }

    /// The milestone catalog, unlock timestamps included.
    pub fn milestones(&self) -> &[Milestone] {
        &self.catalog
    }

    /// Current streak anchored at today (UTC calendar date).
    pub fn current_streak(&self) -> u32 {
        self.current_streak_on(Utc::now().date_naive())
    }

    /// Current streak anchored at an explicit date.
    pub fn current_streak_on(&self, as_of: NaiveDate) -> u32 {
        current_streak(self.journal.entries(), as_of)
    }

    pub fn total_adherent_days(&self) -> u32 {
        total_adherent_days(self.journal.entries())
    }

    /// Progress through the configured program length.
    pub fn progress(&self) -> ProgramProgress {
        program_progress(self.total_adherent_days(), self.config.program.length_days)
    }

    /// Mean performance rating across rated entries.
    pub fn average_performance(&self) -> Option<f64> {
        average_performance(self.journal.entries())
    }

    /// Chart series: one point per day over the trailing window.
    pub fn daily_series(&self, as_of: NaiveDate, days: u32) -> Vec<DailyPoint> {
        daily_series(self.journal.entries(), as_of, days)
    }

    /// Chart series: four weekly rollups ending at `as_of`.
    pub fn weekly_summaries(&self, as_of: NaiveDate) -> Vec<WeeklySummary> {
        weekly_summaries(self.journal.entries(), as_of)
    }

    /// The engine's configuration.
    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// A complete copy of the current state, as handed to the store.
    pub fn snapshot(&self) -> ProgramState {
        ProgramState {
            entries: self.journal.entries().to_vec(),
            milestones: self.catalog.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::SymptomScores;
    use crate::storage::MemorySnapshotStore;
    use chrono::Duration;

    fn draft(date: NaiveDate, taken: bool) -> EntryDraft {
        EntryDraft {
            date,
            medication_taken: taken,
            symptoms: SymptomScores {
                energy: 5,
                libido: 5,
                rigidity: 5,
                self_esteem: 5,
            },
            performance: None,
            notes: None,
        }
    }

    fn noon(date: NaiveDate) -> DateTime<Utc> {
        date.and_hms_opt(12, 0, 0).unwrap().and_utc()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn engine() -> ProgramEngine<MemorySnapshotStore> {
        ProgramEngine::open(MemorySnapshotStore::new()).unwrap()
    }

    #[test]
    fn test_open_seeds_default_catalog() {
        let engine = engine();
        assert_eq!(engine.milestones().len(), 12);
        assert!(engine.entries().is_empty());
        assert_eq!(engine.total_adherent_days(), 0);
    }

    #[test]
    fn test_first_record_unlocks_first_dose() {
        let mut engine = engine();
        let outcome = engine
            .record_entry_at(draft(today(), true), noon(today()))
            .unwrap();

        assert_eq!(outcome.total_adherent_days, 1);
        assert_eq!(outcome.current_streak, 1);
        assert_eq!(outcome.newly_unlocked, vec!["first-dose".to_string()]);
    }

    #[test]
    fn test_mutation_persists_snapshot() {
        let mut engine = engine();
        engine
            .record_entry_at(draft(today(), true), noon(today()))
            .unwrap();

        let stored = engine.store.stored().expect("snapshot saved");
        assert_eq!(stored.entries.len(), 1);
        let first_dose = stored.milestones.iter().find(|m| m.id == "first-dose");
        assert!(first_dose.unwrap().is_unlocked());
    }

    #[test]
    fn test_streak_builds_across_days() {
        let mut engine = engine();
        for offset in (0..7).rev() {
            let date = today() - Duration::days(offset);
            let outcome = engine.record_entry_at(draft(date, true), noon(date)).unwrap();
            if offset == 0 {
                assert_eq!(outcome.current_streak, 7);
                assert!(outcome.newly_unlocked.contains(&"7-day-streak".to_string()));
            }
        }
    }

    #[test]
    fn test_first_dose_survives_flip_to_not_taken() {
        let mut engine = engine();
        let outcome = engine
            .record_entry_at(draft(today(), true), noon(today()))
            .unwrap();

        let patch = EntryPatch {
            medication_taken: Some(false),
            ..Default::default()
        };
        let outcome = engine
            .update_entry_at(outcome.entry_id, patch, noon(today()))
            .unwrap();

        assert_eq!(outcome.total_adherent_days, 0);
        assert_eq!(outcome.current_streak, 0);
        let first_dose = engine
            .milestones()
            .iter()
            .find(|m| m.id == "first-dose")
            .unwrap();
        assert!(first_dose.is_unlocked());
    }

    #[test]
    fn test_update_unknown_id_is_an_error() {
        let mut engine = engine();
        let err = engine
            .update_entry_at(Uuid::new_v4(), EntryPatch::default(), noon(today()))
            .unwrap_err();
        assert!(matches!(err, crate::error::CoreError::EntryNotFound(_)));
    }

    #[test]
    fn test_reopen_restores_state() {
        let mut engine = engine();
        engine
            .record_entry_at(draft(today(), true), noon(today()))
            .unwrap();
        let store = engine.store.clone();

        let reopened = ProgramEngine::open(store).unwrap();
        assert_eq!(reopened.entries().len(), 1);
        assert_eq!(reopened.total_adherent_days(), 1);
        let first_dose = reopened
            .milestones()
            .iter()
            .find(|m| m.id == "first-dose")
            .unwrap();
        assert!(first_dose.is_unlocked());
    }

    #[test]
    fn test_progress_uses_configured_length() {
        let mut config = ProgramConfig::default();
        config.program.length_days = 90;
        let mut engine = ProgramEngine::with_config(MemorySnapshotStore::new(), config).unwrap();

        for offset in (0..45).rev() {
            let date = today() - Duration::days(offset);
            engine.record_entry_at(draft(date, true), noon(date)).unwrap();
        }

        let progress = engine.progress();
        assert_eq!(progress.program_length, 90);
        assert_eq!(progress.percent_complete, 50.0);
        assert_eq!(progress.days_remaining, 45);
    }

    #[test]
    fn test_invalid_draft_leaves_state_untouched() {
        let mut engine = engine();
        let mut bad = draft(today(), true);
        bad.symptoms.energy = 11;

        assert!(engine.record_entry_at(bad, noon(today())).is_err());
        assert!(engine.entries().is_empty());
        assert!(engine.store.stored().is_none());
    }
}
