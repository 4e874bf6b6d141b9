//! Injectable "today" source.
//!
//! Every ledger operation keys off the current calendar day. Routing that
//! decision through a trait keeps day-boundary behavior deterministic in
//! tests instead of depending on the ambient wall clock.

use chrono::{Local, NaiveDate};

/// Format a date as the ledger key, ISO `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Source of the current calendar day.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Today's ledger key.
    fn today_key(&self) -> String {
        date_key(self.today())
    }
}

/// Wall-clock implementation using the process's local calendar day.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date, for deterministic tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
