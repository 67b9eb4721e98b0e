//! Derived quantities over the journal.
//!
//! Everything in this module is a pure function of the entry slice: the
//! strict consecutive-day streak, adherent-day totals, program progress,
//! and the chart-ready series consumed by the presentation layer.

pub mod progress;
pub mod streak;
pub mod trends;

pub use progress::{average_performance, program_progress, ProgramProgress};
pub use streak::{current_streak, total_adherent_days};
pub use trends::{daily_series, weekly_summaries, DailyPoint, WeeklySummary};
