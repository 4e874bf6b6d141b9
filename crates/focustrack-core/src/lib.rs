//! # Focustrack Core Library
//!
//! This library provides the core business logic for Focustrack, a personal
//! productivity tracker: a countdown work-session timer coupled to a daily
//! statistics ledger and a rule-based achievement evaluator. It implements a
//! CLI-first philosophy where all operations are available via a standalone
//! CLI binary, with any GUI being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Timer**: a tick-driven state machine that requires the caller to
//!   invoke `tick()` once per second while a session runs
//! - **Statistics**: a per-day ledger persisted through a key-value store,
//!   with trailing-7-day rollups and badge evaluation derived on demand
//! - **Storage**: SQLite-backed key-value store and TOML-based configuration
//! - **Tracker**: the single wiring object that connects timer completions
//!   and task-list mutations to the ledger
//!
//! ## Key Components
//!
//! - [`TimerStateMachine`]: core timer state machine
//! - [`StatisticsLedger`]: daily counters and weekly rollups
//! - [`Tracker`]: the one mutating entry point a presentation layer drives
//! - [`Database`]: key-value persistence
//! - [`Config`]: application configuration management

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod notify;
pub mod stats;
pub mod storage;
pub mod timer;
pub mod todo;
pub mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{ConfigError, CoreError, StoreError};
pub use events::Event;
pub use notify::{Notifier, NullNotifier};
pub use stats::{
    evaluate_badges, weekly_summary, weekly_view, Badge, BadgeStatus, DailyRecord, DayEntry,
    StatisticsLedger, WeekDay, WeeklySummary,
};
pub use storage::{Database, KeyValueStore, MemoryStore};
pub use timer::{TimerSnapshot, TimerState, TimerStateMachine};
pub use todo::{TodoCollection, TodoFilter, TodoItem, TodoSnapshot};
pub use tracker::{Theme, Tracker};
