//! Achievement badges.
//!
//! A fixed, ordered rule table evaluated against today's record and the
//! trailing-7-day view. Every predicate is a pure function; unlock status
//! is recomputed on each call and never persisted.

use serde::{Deserialize, Serialize};

use super::ledger::{DailyRecord, DayEntry};

/// A badge definition: identity plus a pure unlock predicate.
pub struct Badge {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    predicate: fn(&DailyRecord, &[DayEntry]) -> bool,
}

/// Evaluation result for one badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeStatus {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub unlocked: bool,
}

/// The badge table, in display order.
pub const BADGES: [Badge; 6] = [
    Badge {
        id: "first-task",
        icon: "🎯",
        title: "First task",
        description: "Complete your first task",
        predicate: |today, _| today.tasks_completed >= 1,
    },
    Badge {
        id: "productive-day",
        icon: "🔥",
        title: "Productive day",
        description: "Complete 5 tasks in one day",
        predicate: |today, _| today.tasks_completed >= 5,
    },
    Badge {
        id: "focus-master",
        icon: "🧠",
        title: "Focus master",
        description: "Complete 3 Pomodoro sessions",
        predicate: |today, _| today.pomodoro_sessions >= 3,
    },
    Badge {
        id: "perfect-score",
        icon: "💯",
        title: "Perfect score",
        description: "Complete 100% of your tasks",
        predicate: |today, _| {
            today.total_tasks > 0 && today.tasks_completed == today.total_tasks
        },
    },
    Badge {
        id: "week-warrior",
        icon: "⚡",
        title: "Week warrior",
        description: "Complete 20 tasks in one week",
        predicate: |_, week| {
            week.iter().map(|d| d.record.tasks_completed).sum::<u32>() >= 20
        },
    },
    Badge {
        id: "consistency-king",
        icon: "👑",
        title: "Consistency king",
        description: "Work every day for 7 days",
        predicate: |_, week| week.iter().all(|d| d.record.tasks_completed > 0),
    },
];

/// Evaluate every badge, in table order.
pub fn evaluate_badges(today: &DailyRecord, week: &[DayEntry]) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|badge| BadgeStatus {
            id: badge.id.to_string(),
            icon: badge.icon.to_string(),
            title: badge.title.to_string(),
            description: badge.description.to_string(),
            unlocked: (badge.predicate)(today, week),
        })
        .collect()
}
