//! Whole-state snapshot persistence.
//!
//! After every mutation the engine hands its complete state to a
//! [`SnapshotStore`]; on startup the previous state is read back in full.
//! Last write wins, whole-state overwrite, no incremental diffs or
//! append logs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::DailyEntry;
use crate::error::StoreError;
use crate::milestones::Milestone;

/// The complete persisted state: every journal entry plus the milestone
/// catalog with its unlock timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramState {
    #[serde(default)]
    pub entries: Vec<DailyEntry>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// Persistence seam between the engine and whatever holds its state.
pub trait SnapshotStore {
    /// Read the previously stored state, or `None` when nothing was
    /// stored yet (first launch).
    fn load(&self) -> Result<Option<ProgramState>, StoreError>;

    /// Overwrite the stored state with a complete snapshot.
    fn save(&mut self, state: &ProgramState) -> Result<(), StoreError>;
}

/// File-backed store keeping the snapshot as a single JSON document.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Open the store at the default location, `journal.json` inside the
    /// data directory. The file itself is only created on first save.
    pub fn open() -> Result<Self, StoreError> {
        let dir = super::data_dir().map_err(|e| StoreError::DataDir(e.to_string()))?;
        Ok(Self {
            path: dir.join("journal.json"),
        })
    }

    /// Open a store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Option<ProgramState>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let state: ProgramState = serde_json::from_str(&content)?;
        Ok(Some(state))
    }

    fn save(&mut self, state: &ProgramState) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), entries = state.entries.len(), "snapshot saved");
        Ok(())
    }
}

/// In-memory store for callers that do not persist, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    state: Option<ProgramState>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start pre-populated, as if a previous session had saved `state`.
    pub fn with_state(state: ProgramState) -> Self {
        Self { state: Some(state) }
    }

    /// The last snapshot saved, if any.
    pub fn stored(&self) -> Option<&ProgramState> {
        self.state.as_ref()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<ProgramState>, StoreError> {
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &ProgramState) -> Result<(), StoreError> {
        self.state = Some(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::SymptomScores;
    use crate::milestones::default_catalog;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_state() -> ProgramState {
        ProgramState {
            entries: vec![DailyEntry {
                id: Uuid::new_v4(),
                date: "2024-03-01".parse().unwrap(),
                medication_taken: true,
                symptoms: SymptomScores {
                    energy: 7,
                    libido: 6,
                    rigidity: 5,
                    self_esteem: 8,
                },
                performance: Some(6),
                notes: Some("good day".to_string()),
                created_at: Utc::now(),
            }],
            milestones: default_catalog(),
        }
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::with_path(dir.path().join("journal.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonSnapshotStore::with_path(dir.path().join("journal.json"));

        let state = sample_state();
        store.save(&state).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_save_overwrites_whole_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonSnapshotStore::with_path(dir.path().join("journal.json"));

        store.save(&sample_state()).unwrap();
        store.save(&ProgramState::default()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.entries.is_empty());
        assert!(loaded.milestones.is_empty());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemorySnapshotStore::new();
        assert_eq!(store.load().unwrap(), None);

        let state = sample_state();
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));
    }
}
