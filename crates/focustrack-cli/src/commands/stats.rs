use clap::Subcommand;
use focustrack_core::stats::{focus_minutes, format_focus_time};
use focustrack_core::Config;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's counters
    Today,
    /// Trailing-7-day view with weekly summary
    Week,
    /// Badge unlock status
    Badges,
    /// Dump the full ledger as JSON
    Export,
    /// Zero out today's counters
    ResetToday {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Delete all statistics
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let tracker = super::open_tracker(&config)?;

    match action {
        StatsAction::Today => {
            let record = tracker.daily_record()?;
            let focus =
                format_focus_time(focus_minutes(record.pomodoro_sessions, config.timer.focus_minutes));
            let view = serde_json::json!({
                "date": tracker.today_key(),
                "tasks_completed": record.tasks_completed,
                "pomodoro_sessions": record.pomodoro_sessions,
                "total_tasks": record.total_tasks,
                "completion_rate": record.completion_rate(),
                "focus_time": focus,
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        StatsAction::Week => {
            let view = serde_json::json!({
                "days": tracker.weekly_view()?,
                "summary": tracker.weekly_summary()?,
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        StatsAction::Badges => {
            let badges = tracker.badges()?;
            println!("{}", serde_json::to_string_pretty(&badges)?);
        }
        StatsAction::Export => {
            println!("{}", serde_json::to_string_pretty(&tracker.export_stats()?)?);
        }
        StatsAction::ResetToday { yes } => {
            if !yes {
                return Err("refusing to reset today's statistics without --yes".into());
            }
            tracker.reset_today()?;
            println!("today's statistics reset");
        }
        StatsAction::Clear { yes } => {
            if !yes {
                return Err("refusing to clear all statistics without --yes".into());
            }
            tracker.clear_stats()?;
            println!("all statistics cleared");
        }
    }
    Ok(())
}
