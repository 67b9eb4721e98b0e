//! Chart-ready series over a trailing calendar window.
//!
//! The presentation layer plots adherence bars, performance lines, and
//! symptom lines over the last 30 days, plus four weekly rollups. Days
//! without an entry are zero-filled so the series always covers the full
//! window.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::DailyEntry;

/// One plotted day. Missing days carry zeros everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub medication_taken: bool,
    pub performance: u8,
    pub energy: u8,
    pub libido: u8,
    pub rigidity: u8,
    pub self_esteem: u8,
}

/// Averages over one week of the trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Week number within the window, 1-based, oldest first
    pub week: u32,
    /// Mean performance rating, one decimal
    pub avg_performance: f64,
    /// Mean energy rating, one decimal
    pub avg_energy: f64,
    /// Mean libido rating, one decimal
    pub avg_libido: f64,
    /// Share of days with the dose taken, whole percent
    pub adherence_pct: f64,
}

/// One point per calendar day over the `days` ending at `as_of`,
/// oldest first.
pub fn daily_series(entries: &[DailyEntry], as_of: NaiveDate, days: u32) -> Vec<DailyPoint> {
    (0..days)
        .map(|i| {
            let date = as_of - Duration::days(i64::from(days - 1 - i));
            match entries.iter().find(|e| e.date == date) {
                Some(entry) => DailyPoint {
                    date,
                    medication_taken: entry.medication_taken,
                    performance: entry.performance.unwrap_or(0),
                    energy: entry.symptoms.energy,
                    libido: entry.symptoms.libido,
                    rigidity: entry.symptoms.rigidity,
                    self_esteem: entry.symptoms.self_esteem,
                },
                None => DailyPoint {
                    date,
                    medication_taken: false,
                    performance: 0,
                    energy: 0,
                    libido: 0,
                    rigidity: 0,
                    self_esteem: 0,
                },
            }
        })
        .collect()
}

/// Four weekly rollups over the 28 days ending at `as_of`, oldest week
/// first. Ratings average to one decimal, adherence to a whole percent.
pub fn weekly_summaries(entries: &[DailyEntry], as_of: NaiveDate) -> Vec<WeeklySummary> {
    let series = daily_series(entries, as_of, 28);

    series
        .chunks(7)
        .enumerate()
        .map(|(i, week)| {
            let len = week.len() as f64;
            let mut performance = 0u32;
            let mut energy = 0u32;
            let mut libido = 0u32;
            let mut taken = 0u32;
            for point in week {
                performance += u32::from(point.performance);
                energy += u32::from(point.energy);
                libido += u32::from(point.libido);
                if point.medication_taken {
                    taken += 1;
                }
            }

            WeeklySummary {
                week: i as u32 + 1,
                avg_performance: round1(f64::from(performance) / len),
                avg_energy: round1(f64::from(energy) / len),
                avg_libido: round1(f64::from(libido) / len),
                adherence_pct: (f64::from(taken) / len * 100.0).round(),
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
