//! The fixed 12-entry milestone catalog for the 180-day program.
//!
//! Ten milestones track total adherent days (1 through 180), two track
//! the consecutive-day streak. Seeded once when no stored catalog exists;
//! afterwards only `unlocked_at` ever changes.

use super::{Milestone, MilestoneMetric};

fn milestone(
    id: &str,
    title: &str,
    description: &str,
    icon: &str,
    target: u32,
    metric: MilestoneMetric,
) -> Milestone {
    Milestone {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        target,
        metric,
        unlocked_at: None,
    }
}

/// Build the default catalog in display order.
pub fn default_catalog() -> Vec<Milestone> {
    use MilestoneMetric::{Streak, TotalDays};

    vec![
        milestone(
            "first-dose",
            "First Step",
            "Took your first dose. Welcome to your journey!",
            "🚀",
            1,
            TotalDays,
        ),
        milestone(
            "7-day-streak",
            "Week 1 Champion",
            "Completed your first week! Consistency is key.",
            "🔥",
            7,
            Streak,
        ),
        milestone(
            "14-day-milestone",
            "2 Week Warrior",
            "Two weeks strong! Your body is adapting.",
            "💪",
            14,
            TotalDays,
        ),
        milestone(
            "30-day-milestone",
            "Month 1 Master",
            "First month complete! You should start feeling changes.",
            "🌟",
            30,
            TotalDays,
        ),
        milestone(
            "45-day-milestone",
            "6 Week Achiever",
            "Halfway through month 2! Results are becoming visible.",
            "⚡",
            45,
            TotalDays,
        ),
        milestone(
            "60-day-milestone",
            "Month 2 Complete",
            "2 months done! Significant improvements should be noticeable.",
            "💎",
            60,
            TotalDays,
        ),
        milestone(
            "90-day-milestone",
            "Quarter Champion",
            "3 months! You are halfway to your goal.",
            "🏆",
            90,
            TotalDays,
        ),
        milestone(
            "120-day-milestone",
            "Month 4 Hero",
            "4 months strong! Your dedication is paying off.",
            "🦸",
            120,
            TotalDays,
        ),
        milestone(
            "150-day-milestone",
            "Month 5 Legend",
            "5 months complete! You are in the final stretch.",
            "👑",
            150,
            TotalDays,
        ),
        milestone(
            "180-day-complete",
            "Program Complete",
            "6 months done! You finished the full 180-day program.",
            "🏅",
            180,
            TotalDays,
        ),
        milestone(
            "perfect-month",
            "Perfect Month",
            "Did not miss a single dose for 30 consecutive days!",
            "⭐",
            30,
            Streak,
        ),
        milestone(
            "dedication-master",
            "Dedication Master",
            "Maintained a 60-day streak without missing any doses!",
            "🎯",
            60,
            Streak,
        ),
    ]
}
