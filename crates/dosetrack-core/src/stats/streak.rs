//! Consecutive-day streak and adherent-day totals.

use chrono::NaiveDate;

use crate::entry::DailyEntry;

/// Length of the run of consecutive adherent days ending at `as_of`.
///
/// The most recent adherent day must be `as_of` itself or the streak is
/// already 0, and a single missing or non-adherent day truncates the
/// count at that point. Runs deeper in the past, on the far side of a
/// gap, never count.
pub fn current_streak(entries: &[DailyEntry], as_of: NaiveDate) -> u32 {
    let mut adherent: Vec<NaiveDate> = entries
        .iter()
        .filter(|e| e.medication_taken)
        .map(|e| e.date)
        .collect();
    adherent.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0;
    for (i, date) in adherent.iter().enumerate() {
        let days_back = (as_of - *date).num_days();
        if days_back == i as i64 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Count of entries with the dose taken. The journal already guarantees
/// one entry per date, so no further deduplication happens here.
pub fn total_adherent_days(entries: &[DailyEntry]) -> u32 {
    entries.iter().filter(|e| e.medication_taken).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::SymptomScores;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn entry(date: NaiveDate, taken: bool) -> DailyEntry {
        DailyEntry {
            id: Uuid::new_v4(),
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
            created_at: Utc::now(),
        }
    }

    fn day(as_of: NaiveDate, offset: i64) -> NaiveDate {
        as_of + Duration::days(offset)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_empty_log_has_no_streak() {
        assert_eq!(current_streak(&[], today()), 0);
    }

    #[test]
    fn test_streak_requires_entry_today() {
        // Adherent yesterday and the two days before, nothing today
        let entries = vec![
            entry(day(today(), -1), true),
            entry(day(today(), -2), true),
            entry(day(today(), -3), true),
        ];
        assert_eq!(current_streak(&entries, today()), 0);
    }

    #[test]
    fn test_five_day_run() {
        let entries: Vec<_> = (0..5).map(|i| entry(day(today(), -i), true)).collect();
        assert_eq!(current_streak(&entries, today()), 5);
    }

    #[test]
    fn test_gap_truncates_run() {
        // Adherent on days 0,-1,-2, non-adherent on -3, adherent on -4,-5
        let entries = vec![
            entry(today(), true),
            entry(day(today(), -1), true),
            entry(day(today(), -2), true),
            entry(day(today(), -3), false),
            entry(day(today(), -4), true),
            entry(day(today(), -5), true),
        ];
        assert_eq!(current_streak(&entries, today()), 3);
    }

    #[test]
    fn test_missing_day_breaks_like_non_adherent_day() {
        // No entry at all on -2
        let entries = vec![
            entry(today(), true),
            entry(day(today(), -1), true),
            entry(day(today(), -3), true),
            entry(day(today(), -4), true),
        ];
        assert_eq!(current_streak(&entries, today()), 2);
    }

    #[test]
    fn test_non_adherent_today_zeroes_streak() {
        let entries = vec![entry(today(), false), entry(day(today(), -1), true)];
        assert_eq!(current_streak(&entries, today()), 0);
    }

    #[test]
    fn test_streak_ignores_entry_order() {
        let mut entries = vec![
            entry(day(today(), -2), true),
            entry(today(), true),
            entry(day(today(), -1), true),
        ];
        assert_eq!(current_streak(&entries, today()), 3);
        entries.reverse();
        assert_eq!(current_streak(&entries, today()), 3);
    }

    #[test]
    fn test_future_entry_breaks_walk() {
        // An adherent entry dated after as_of sorts first and mismatches
        // the index walk immediately
        let entries = vec![entry(day(today(), 1), true), entry(today(), true)];
        assert_eq!(current_streak(&entries, today()), 0);
    }

    #[test]
    fn test_total_adherent_days() {
        let entries = vec![
            entry(today(), true),
            entry(day(today(), -1), false),
            entry(day(today(), -5), true),
            entry(day(today(), -9), true),
        ];
        assert_eq!(total_adherent_days(&entries), 3);
        assert_eq!(total_adherent_days(&[]), 0);
    }
}
