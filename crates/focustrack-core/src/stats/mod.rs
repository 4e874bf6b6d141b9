//! Statistics for Focustrack
//!
//! This module owns the per-day productivity counters and everything
//! derived from them: trailing-7-day views, weekly rollups, and badge
//! evaluation.

mod badges;
mod ledger;
mod weekly;

pub use badges::{evaluate_badges, Badge, BadgeStatus, BADGES};
pub use ledger::{DailyRecord, DayEntry, StatisticsLedger, STATS_KEY};
pub use weekly::{
    focus_minutes, format_focus_time, weekly_summary, weekly_view, WeekDay, WeeklySummary,
};
