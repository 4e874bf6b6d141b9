//! Weekly rollups derived from the trailing-7-day view.
//!
//! Nothing here is stored; views are recomputed from the ledger on demand.

use serde::{Deserialize, Serialize};

use super::ledger::DayEntry;

/// One day of the weekly chart view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekDay {
    pub date_key: String,
    pub day_label: String,
    pub tasks: u32,
    pub sessions: u32,
}

/// Totals over the trailing 7 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub total_tasks: u32,
    pub total_sessions: u32,
    /// Day label of the best day, or None when the whole week is idle.
    pub best_day: Option<String>,
    pub best_day_tasks: u32,
}

/// Flatten a trailing-7-day view into chart rows, oldest first.
pub fn weekly_view(days: &[DayEntry]) -> Vec<WeekDay> {
    days.iter()
        .map(|d| WeekDay {
            date_key: d.date_key.clone(),
            day_label: d.day_label.clone(),
            tasks: d.record.tasks_completed,
            sessions: d.record.pomodoro_sessions,
        })
        .collect()
}

/// Sum the week and find the best day.
///
/// The scan uses strict `>` oldest-to-newest, so the earliest day reaching
/// the maximum task count wins ties. An all-zero week has no best day.
pub fn weekly_summary(days: &[DayEntry]) -> WeeklySummary {
    let mut total_tasks = 0;
    let mut total_sessions = 0;
    let mut best_day = None;
    let mut best_day_tasks = 0;

    for day in days {
        total_tasks += day.record.tasks_completed;
        total_sessions += day.record.pomodoro_sessions;

        if day.record.tasks_completed > best_day_tasks {
            best_day_tasks = day.record.tasks_completed;
            best_day = Some(day.day_label.clone());
        }
    }

    WeeklySummary {
        total_tasks,
        total_sessions,
        best_day,
        best_day_tasks,
    }
}

/// Total focus minutes for a number of completed sessions.
pub fn focus_minutes(sessions: u32, minutes_per_session: u32) -> u32 {
    sessions.saturating_mul(minutes_per_session)
}

/// Render minutes as "2h 30min" or "45min".
pub fn format_focus_time(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{hours}h {minutes}min")
    } else {
        format!("{minutes}min")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DailyRecord;

    fn week(tasks: [u32; 7], sessions: [u32; 7]) -> Vec<DayEntry> {
        const LABELS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        (0..7)
            .map(|i| DayEntry {
                date_key: format!("2024-02-{:02}", 3 + i),
                day_label: LABELS[i].to_string(),
                record: DailyRecord {
                    tasks_completed: tasks[i],
                    pomodoro_sessions: sessions[i],
                    total_tasks: tasks[i],
                },
            })
            .collect()
    }

    #[test]
    fn first_day_reaching_max_wins() {
        let days = week([0, 2, 2, 0, 5, 0, 0], [0; 7]);
        let summary = weekly_summary(&days);
        assert_eq!(summary.total_tasks, 9);
        assert_eq!(summary.best_day.as_deref(), Some("Wed"));
        assert_eq!(summary.best_day_tasks, 5);
    }

    #[test]
    fn earlier_tie_is_kept() {
        let days = week([0, 4, 1, 4, 0, 0, 0], [0; 7]);
        let summary = weekly_summary(&days);
        assert_eq!(summary.best_day.as_deref(), Some("Sun"));
        assert_eq!(summary.best_day_tasks, 4);
    }

    #[test]
    fn idle_week_has_no_best_day() {
        let summary = weekly_summary(&week([0; 7], [0; 7]));
        assert_eq!(summary.best_day, None);
        assert_eq!(summary.best_day_tasks, 0);
        assert_eq!(summary.total_tasks, 0);
    }

    #[test]
    fn sessions_are_summed_separately() {
        let summary = weekly_summary(&week([1, 0, 0, 0, 0, 0, 0], [2, 0, 3, 0, 0, 1, 0]));
        assert_eq!(summary.total_sessions, 6);
        assert_eq!(summary.total_tasks, 1);
    }

    #[test]
    fn view_preserves_order_and_counts() {
        let days = week([0, 2, 2, 0, 5, 0, 0], [1, 0, 0, 0, 2, 0, 0]);
        let view = weekly_view(&days);
        assert_eq!(view.len(), 7);
        assert_eq!(view[4].tasks, 5);
        assert_eq!(view[4].sessions, 2);
        assert_eq!(view[0].day_label, "Sat");
    }

    #[test]
    fn focus_time_formatting() {
        assert_eq!(format_focus_time(focus_minutes(0, 25)), "0min");
        assert_eq!(format_focus_time(focus_minutes(1, 25)), "25min");
        assert_eq!(format_focus_time(focus_minutes(5, 25)), "2h 5min");
    }
}
