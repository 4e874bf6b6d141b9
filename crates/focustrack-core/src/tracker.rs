//! The wiring object.
//!
//! `Tracker` owns the timer, the ledger, and the task list, and is the only
//! mutating surface a presentation layer drives. It connects the two data
//! flows: task-list mutations resynchronize today's counters, and timer
//! completions record one session each.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::StoreError;
use crate::events::Event;
use crate::notify::{Notifier, NullNotifier};
use crate::stats::{
    evaluate_badges, weekly_summary, weekly_view, BadgeStatus, DailyRecord, DayEntry,
    StatisticsLedger, WeekDay, WeeklySummary,
};
use crate::storage::KeyValueStore;
use crate::timer::{TimerSnapshot, TimerStateMachine};
use crate::todo::{TodoCollection, TodoFilter, TodoItem, TodoSnapshot};

/// Store key holding the free-text daily goal.
pub const GOAL_KEY: &str = "dailyGoal";
/// Store key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Theme preference persisted for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// The productivity tracker: timer, ledger, and task list behind one
/// explicitly constructed owner. No module-level state anywhere.
pub struct Tracker {
    timer: TimerStateMachine,
    ledger: StatisticsLedger,
    todos: TodoCollection,
    store: Rc<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
}

impl Tracker {
    /// Build a tracker on the given store with the configured session
    /// length, a system clock, and no notifier attached.
    pub fn new(store: Rc<dyn KeyValueStore>, config: &Config) -> Result<Self, StoreError> {
        Self::with_parts(
            store,
            config.timer_duration_secs(),
            Box::new(SystemClock),
            Box::new(NullNotifier),
        )
    }

    /// Build a tracker with explicit collaborators. Tests pin the clock and
    /// observe notifications through this.
    pub fn with_parts(
        store: Rc<dyn KeyValueStore>,
        duration_secs: u32,
        clock: Box<dyn Clock>,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, StoreError> {
        let ledger = StatisticsLedger::new(store.clone());
        let todos = TodoCollection::load(store.clone())?;
        Ok(Self {
            timer: TimerStateMachine::new(duration_secs),
            ledger,
            todos,
            store,
            clock,
            notifier,
        })
    }

    pub fn today_key(&self) -> String {
        self.clock.today_key()
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn start_timer(&mut self) -> Option<Event> {
        self.timer.start()
    }

    pub fn pause_timer(&mut self) -> Option<Event> {
        self.timer.pause()
    }

    pub fn reset_timer(&mut self) -> Option<Event> {
        self.timer.reset()
    }

    /// Advance the countdown by one second.
    ///
    /// On the completing tick this records exactly one session for today,
    /// notifies, and re-arms the machine for the next session - in that
    /// order. Returns the recording event so the caller sees the new total.
    pub fn tick(&mut self) -> Result<Option<Event>, StoreError> {
        if let Some(Event::TimerCompleted { .. }) = self.timer.tick() {
            let date_key = self.clock.today_key();
            let sessions_today = self.ledger.increment_pomodoro_sessions(&date_key)?;
            self.notifier.session_finished(sessions_today);
            self.timer.rearm();
            return Ok(Some(Event::SessionRecorded {
                date_key,
                sessions_today,
                at: Utc::now(),
            }));
        }
        Ok(None)
    }

    pub fn timer_snapshot(&self) -> TimerSnapshot {
        self.timer.snapshot()
    }

    // ── Tasks ────────────────────────────────────────────────────────

    pub fn add_task(&mut self, text: &str) -> Result<Option<TodoSnapshot>, StoreError> {
        let snapshot = self.todos.add(text)?;
        self.resync(snapshot)?;
        Ok(snapshot)
    }

    pub fn toggle_task(&mut self, index: usize) -> Result<Option<TodoSnapshot>, StoreError> {
        let snapshot = self.todos.toggle(index)?;
        self.resync(snapshot)?;
        Ok(snapshot)
    }

    pub fn remove_task(&mut self, index: usize) -> Result<Option<TodoSnapshot>, StoreError> {
        let snapshot = self.todos.remove(index)?;
        self.resync(snapshot)?;
        Ok(snapshot)
    }

    pub fn tasks(&self, filter: TodoFilter) -> Vec<(usize, &TodoItem)> {
        self.todos.items(filter)
    }

    /// Overwrite today's task counters from the full list. The snapshot is
    /// the sole source of truth; no partial increments are kept.
    fn resync(&self, snapshot: Option<TodoSnapshot>) -> Result<(), StoreError> {
        if let Some(snap) = snapshot {
            self.ledger.update_daily_counts(
                &self.clock.today_key(),
                snap.total_tasks,
                snap.completed_tasks,
            )?;
        }
        Ok(())
    }

    // ── Statistics views (read-only) ─────────────────────────────────

    pub fn daily_record(&self) -> Result<DailyRecord, StoreError> {
        self.ledger.record(&self.clock.today_key())
    }

    pub fn record_for(&self, date_key: &str) -> Result<DailyRecord, StoreError> {
        self.ledger.record(date_key)
    }

    pub fn trailing_7_days(&self) -> Result<Vec<DayEntry>, StoreError> {
        self.ledger.trailing_7_days(self.clock.today())
    }

    pub fn weekly_view(&self) -> Result<Vec<WeekDay>, StoreError> {
        Ok(weekly_view(&self.trailing_7_days()?))
    }

    pub fn weekly_summary(&self) -> Result<WeeklySummary, StoreError> {
        Ok(weekly_summary(&self.trailing_7_days()?))
    }

    pub fn badges(&self) -> Result<Vec<BadgeStatus>, StoreError> {
        let today = self.daily_record()?;
        let week = self.trailing_7_days()?;
        Ok(evaluate_badges(&today, &week))
    }

    pub fn export_stats(&self) -> Result<serde_json::Value, StoreError> {
        self.ledger.export()
    }

    // ── Statistics maintenance ───────────────────────────────────────

    pub fn reset_today(&self) -> Result<(), StoreError> {
        self.ledger.reset_day(&self.clock.today_key())
    }

    pub fn clear_stats(&self) -> Result<(), StoreError> {
        self.ledger.clear_all()
    }

    // ── Daily goal and theme ─────────────────────────────────────────

    pub fn daily_goal(&self) -> Result<Option<String>, StoreError> {
        match self.store.get(GOAL_KEY)? {
            Some(serde_json::Value::String(goal)) => Ok(Some(goal)),
            _ => Ok(None),
        }
    }

    /// Save the daily goal. Blank input is a no-op, matching task entry.
    pub fn set_daily_goal(&self, goal: &str) -> Result<bool, StoreError> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Ok(false);
        }
        self.store
            .set(GOAL_KEY, &serde_json::Value::String(goal.to_string()))?;
        Ok(true)
    }

    pub fn theme(&self) -> Result<Theme, StoreError> {
        match self.store.get(THEME_KEY)? {
            Some(serde_json::Value::String(s)) => Ok(s.parse().unwrap_or_default()),
            _ => Ok(Theme::default()),
        }
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.store
            .set(THEME_KEY, &serde_json::Value::String(theme.to_string()))
    }
}
