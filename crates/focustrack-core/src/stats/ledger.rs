//! Per-day statistics ledger.
//!
//! The ledger is a mapping from ISO date key to [`DailyRecord`], persisted
//! as one JSON object under a single store key. Every write is a full
//! read-modify-write of the whole mapping; under the single-threaded model
//! this is safe by construction. Absent days are synthesized as zero
//! records on read and never written by a read.

use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::date_key;
use crate::error::StoreError;
use crate::storage::KeyValueStore;

/// Store key holding the full ledger mapping.
pub const STATS_KEY: &str = "productivityStats";

/// One day's productivity counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyRecord {
    pub tasks_completed: u32,
    pub pomodoro_sessions: u32,
    pub total_tasks: u32,
}

impl DailyRecord {
    /// Percent of tasks completed today, 0 when no tasks exist.
    pub fn completion_rate(&self) -> u32 {
        if self.total_tasks == 0 {
            return 0;
        }
        ((self.tasks_completed as f64 / self.total_tasks as f64) * 100.0).round() as u32
    }
}

/// One day of a trailing-7-day view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    pub date_key: String,
    /// Short weekday name ("Mon", "Tue", ...).
    pub day_label: String,
    pub record: DailyRecord,
}

/// Owner of the persisted day-to-counters mapping.
///
/// The key-value store is the only persistence backend; a stored value that
/// fails to parse is treated as an empty ledger, never an error.
pub struct StatisticsLedger {
    store: Rc<dyn KeyValueStore>,
}

impl StatisticsLedger {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load_all(&self) -> Result<BTreeMap<String, DailyRecord>, StoreError> {
        match self.store.get(STATS_KEY)? {
            Some(value) => Ok(serde_json::from_value(value).unwrap_or_default()),
            None => Ok(BTreeMap::new()),
        }
    }

    fn save_all(&self, all: &BTreeMap<String, DailyRecord>) -> Result<(), StoreError> {
        let value = serde_json::to_value(all).map_err(StoreError::Encode)?;
        self.store.set(STATS_KEY, &value)
    }

    /// The record for a date, or a zero record if the date is absent.
    /// Never writes.
    pub fn record(&self, date_key: &str) -> Result<DailyRecord, StoreError> {
        Ok(self
            .load_all()?
            .get(date_key)
            .copied()
            .unwrap_or_default())
    }

    /// Replace one day's counters wholesale. Persists immediately.
    pub fn set_record(&self, date_key: &str, record: DailyRecord) -> Result<(), StoreError> {
        let mut all = self.load_all()?;
        all.insert(date_key.to_string(), record);
        self.save_all(&all)
    }

    /// Add one completed session to a day. Returns the new session count.
    pub fn increment_pomodoro_sessions(&self, date_key: &str) -> Result<u32, StoreError> {
        let mut all = self.load_all()?;
        let record = all.entry(date_key.to_string()).or_default();
        record.pomodoro_sessions += 1;
        let sessions = record.pomodoro_sessions;
        self.save_all(&all)?;
        Ok(sessions)
    }

    /// Resynchronize a day's task counters against the full task list.
    ///
    /// This is an overwrite, not an increment, so it is idempotent and safe
    /// to call on every task-list mutation.
    pub fn update_daily_counts(
        &self,
        date_key: &str,
        total_tasks: u32,
        completed_tasks: u32,
    ) -> Result<DailyRecord, StoreError> {
        let mut all = self.load_all()?;
        let record = all.entry(date_key.to_string()).or_default();
        record.total_tasks = total_tasks;
        record.tasks_completed = completed_tasks;
        let updated = *record;
        self.save_all(&all)?;
        Ok(updated)
    }

    /// The 7 days ending on and including `reference`, oldest first.
    /// Absent days come back as zero records.
    pub fn trailing_7_days(&self, reference: NaiveDate) -> Result<Vec<DayEntry>, StoreError> {
        let all = self.load_all()?;
        let mut days = Vec::with_capacity(7);
        for offset in (0..7).rev() {
            let date = reference - Days::new(offset);
            let key = date_key(date);
            let record = all.get(&key).copied().unwrap_or_default();
            days.push(DayEntry {
                date_key: key,
                day_label: date.format("%a").to_string(),
                record,
            });
        }
        Ok(days)
    }

    /// Zero out one day's counters.
    pub fn reset_day(&self, date_key: &str) -> Result<(), StoreError> {
        self.set_record(date_key, DailyRecord::default())
    }

    /// Empty the entire ledger.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        self.save_all(&BTreeMap::new())
    }

    /// The full mapping as JSON, for export.
    pub fn export(&self) -> Result<serde_json::Value, StoreError> {
        serde_json::to_value(self.load_all()?).map_err(StoreError::Encode)
    }
}
