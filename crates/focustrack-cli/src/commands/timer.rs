use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

use clap::Subcommand;
use focustrack_core::{
    Config, Database, Event, Notifier, NullNotifier, SystemClock, Tracker,
};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run one session in the foreground with a live countdown
    Run {
        /// Session length in minutes (overrides the configured length)
        #[arg(long)]
        minutes: Option<u32>,
    },
    /// Print the timer snapshot as JSON
    Status,
}

/// Prints the end-of-session notification to the terminal.
struct PrintNotifier;

impl Notifier for PrintNotifier {
    fn session_finished(&self, sessions_today: u32) {
        println!();
        println!("⏰ Time's up! Sessions today: {sessions_today}");
    }
}

fn format_clock(remaining_secs: u32) -> String {
    format!("{:02}:{:02}", remaining_secs / 60, remaining_secs % 60)
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimerAction::Run { minutes } => {
            let duration_secs = match minutes {
                Some(m) if m > 0 => m.saturating_mul(60),
                _ => config.timer_duration_secs(),
            };
            let notifier: Box<dyn Notifier> = if config.notifications.enabled {
                Box::new(PrintNotifier)
            } else {
                Box::new(NullNotifier)
            };
            let store = Rc::new(Database::open()?);
            let mut tracker =
                Tracker::with_parts(store, duration_secs, Box::new(SystemClock), notifier)?;

            tracker.start_timer();
            print!("{}", format_clock(tracker.timer_snapshot().remaining_secs));
            std::io::stdout().flush()?;

            loop {
                std::thread::sleep(Duration::from_secs(1));
                if let Some(Event::SessionRecorded { .. }) = tracker.tick()? {
                    break;
                }
                print!("\r{}", format_clock(tracker.timer_snapshot().remaining_secs));
                std::io::stdout().flush()?;
            }
        }
        TimerAction::Status => {
            let tracker = super::open_tracker(&config)?;
            let snapshot = tracker.timer_snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formatting_pads_both_fields() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(0), "00:00");
    }
}
