//! Milestone catalog and unlock evaluation.
//!
//! Milestones are thresholds on one of two derived quantities: the total
//! number of adherent days, or the current consecutive-day streak. Each
//! catalog entry carries its metric kind explicitly, so evaluation never
//! dispatches on id strings. Unlocks are permanent: once `unlocked_at` is
//! set it never changes and the milestone is never re-evaluated, even if
//! the metric later drops below the target.

pub mod catalog;

pub use catalog::default_catalog;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which derived quantity a milestone is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneMetric {
    /// Total adherent days across the whole journal
    TotalDays,
    /// Current consecutive-day streak
    Streak,
}

impl MilestoneMetric {
    /// Pick this metric's value out of the pair of derived quantities.
    pub fn value(&self, total_days: u32, streak: u32) -> u32 {
        match self {
            MilestoneMetric::TotalDays => total_days,
            MilestoneMetric::Streak => streak,
        }
    }
}

/// A catalog entry: display metadata plus the unlock rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Stable unique identifier
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Threshold the metric is compared against
    pub target: u32,
    /// Which quantity the target applies to
    pub metric: MilestoneMetric,
    /// Set exactly once, when the metric first reaches the target
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Milestone {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }

    /// Current raw value of this milestone's metric, for progress bars.
    pub fn progress_toward(&self, total_days: u32, streak: u32) -> u32 {
        self.metric.value(total_days, streak)
    }

    /// Progress as a percentage of the target, capped at 100.
    pub fn percent_complete(&self, total_days: u32, streak: u32) -> f64 {
        if self.target == 0 {
            return 100.0;
        }
        let value = f64::from(self.metric.value(total_days, streak));
        (value / f64::from(self.target) * 100.0).min(100.0)
    }
}

/// Unlock every still-locked milestone whose metric has reached its
/// target, stamping `unlocked_at = now`.
///
/// Already-unlocked milestones are skipped entirely, which makes the
/// evaluation idempotent: re-running with unchanged metrics changes
/// nothing, not even timestamps. Returns the ids unlocked by this call,
/// in catalog order. The catalog itself is never reordered or shrunk.
pub fn evaluate_milestones(
    catalog: &mut [Milestone],
    total_days: u32,
    streak: u32,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut newly_unlocked = Vec::new();
    for milestone in catalog.iter_mut() {
        if milestone.is_unlocked() {
            continue;
        }
        if milestone.metric.value(total_days, streak) >= milestone.target {
            milestone.unlocked_at = Some(now);
            newly_unlocked.push(milestone.id.clone());
        }
    }
    newly_unlocked
}
