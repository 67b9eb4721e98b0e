//! # Dosetrack Core Library
//!
//! This library provides the core business logic for Dosetrack, a
//! 180-day medication adherence journal. It owns the daily entry log and
//! the milestone catalog, derives streaks and progress figures, and hands
//! complete state snapshots to a pluggable store. Presentation layers
//! (desktop shell, web view) are thin wrappers over this crate: they feed
//! user input in, render derived numbers out, and never hold state of
//! their own.
//!
//! ## Architecture
//!
//! - **Journal**: one entry per calendar date with update-in-place
//!   semantics; recording a date that already has an entry replaces it
//! - **Stats**: strict consecutive-day streak (a single missed day zeroes
//!   it), adherent-day totals, program progress, chart-ready series
//! - **Milestones**: fixed 12-entry catalog evaluated against totals or
//!   the current streak; unlocks are permanent
//! - **Engine**: the record -> re-evaluate -> persist pipeline over an
//!   injected [`SnapshotStore`]
//! - **Storage**: JSON whole-state snapshots and TOML configuration
//!
//! ## Key Components
//!
//! - [`ProgramEngine`]: owning engine, entry point for all mutations
//! - [`Journal`]: the ordered collection of daily entries
//! - [`Milestone`]: catalog entry with a tagged metric kind
//! - [`SnapshotStore`]: persistence seam (`load`/`save` of full state)

pub mod engine;
pub mod entry;
pub mod error;
pub mod journal;
pub mod milestones;
pub mod stats;
pub mod storage;

pub use engine::{ProgramEngine, RecordOutcome};
pub use entry::{parse_entry_date, DailyEntry, EntryDraft, EntryPatch, SymptomScores};
pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use journal::Journal;
pub use milestones::{default_catalog, evaluate_milestones, Milestone, MilestoneMetric};
pub use stats::{
    average_performance, current_streak, daily_series, program_progress, total_adherent_days,
    weekly_summaries, DailyPoint, ProgramProgress, WeeklySummary,
};
pub use storage::{
    data_dir, JsonSnapshotStore, MemorySnapshotStore, ProgramConfig, ProgramState, SnapshotStore,
};
