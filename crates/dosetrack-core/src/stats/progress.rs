//! Program-level progress figures.

use serde::{Deserialize, Serialize};

use crate::entry::DailyEntry;

/// Progress through the fixed-length program, derived from the number of
/// adherent days rather than elapsed calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgramProgress {
    /// Adherent days accumulated so far
    pub total_days: u32,
    /// Program length in days
    pub program_length: u32,
    /// Completion percentage, capped at 100
    pub percent_complete: f64,
    /// Days left to the program end, floored at 0
    pub days_remaining: u32,
    /// Rough months left, 30-day months rounded up
    pub months_remaining: u32,
    /// True once `total_days` reaches the program length
    pub complete: bool,
}

/// Compute progress toward a program of `program_length` days.
pub fn program_progress(total_adherent_days: u32, program_length: u32) -> ProgramProgress {
    let percent_complete = if program_length == 0 {
        100.0
    } else {
        (f64::from(total_adherent_days) / f64::from(program_length) * 100.0).min(100.0)
    };
    let days_remaining = program_length.saturating_sub(total_adherent_days);

    ProgramProgress {
        total_days: total_adherent_days,
        program_length,
        percent_complete,
        days_remaining,
        months_remaining: days_remaining.div_ceil(30),
        complete: total_adherent_days >= program_length,
    }
}

/// Mean performance rating over entries that carry a non-zero rating.
///
/// Zero ratings are treated as "not rated", matching how the dashboard
/// has always computed this figure. Returns `None` when nothing counts.
pub fn average_performance(entries: &[DailyEntry]) -> Option<f64> {
    let rated: Vec<u8> = entries
        .iter()
        .filter_map(|e| e.performance)
        .filter(|p| *p > 0)
        .collect();
    if rated.is_empty() {
        return None;
    }
    let sum: u32 = rated.iter().map(|p| u32::from(*p)).sum();
    Some(f64::from(sum) / rated.len() as f64)
}
