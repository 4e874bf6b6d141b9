//! Timer state machine.
//!
//! The machine is tick-driven. It holds no thread and no OS timer - the
//! caller invokes `tick()` once per second while a session runs. A tick
//! arriving after a pause or reset is a no-op by the state guard, so there
//! is no stale-callback hazard to cancel.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused | Finished) -> Idle
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = TimerStateMachine::default();
//! timer.start();
//! // Once per second:
//! timer.tick(); // Returns Some(Event::TimerCompleted) when the session ends
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Default session length: 25 minutes.
pub const DEFAULT_DURATION_SECS: u32 = 25 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    /// The countdown reached zero. Transient: the owner re-arms back to
    /// Idle once the completed session has been recorded.
    Finished,
}

/// Read-only view of the current session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub state: TimerState,
    pub remaining_secs: u32,
    pub duration_secs: u32,
}

/// Countdown state machine for one work session.
///
/// Sessions are transient: the machine is created at process start and
/// never persisted.
#[derive(Debug, Clone)]
pub struct TimerStateMachine {
    duration_secs: u32,
    remaining_secs: u32,
    state: TimerState,
}

impl TimerStateMachine {
    /// Create a machine with the given session length in seconds.
    ///
    /// A zero duration is rejected at configuration time and falls back to
    /// the default.
    pub fn new(duration_secs: u32) -> Self {
        let duration_secs = if duration_secs == 0 {
            DEFAULT_DURATION_SECS
        } else {
            duration_secs
        };
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            state: TimerState::Idle,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            state: self.state,
            remaining_secs: self.remaining_secs,
            duration_secs: self.duration_secs,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start from Idle, or resume from Paused with the remaining time
    /// unchanged. Idempotent while Running.
    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle => {
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    duration_secs: self.duration_secs,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Paused => {
                self.state = TimerState::Running;
                Some(Event::TimerResumed {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            // Already running, or finished and waiting to be re-armed.
            TimerState::Running | TimerState::Finished => None,
        }
    }

    /// Suspend the countdown. No-op outside Running.
    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Return to Idle with a full session's time, from any state.
    pub fn reset(&mut self) -> Option<Event> {
        self.state = TimerState::Idle;
        self.remaining_secs = self.duration_secs;
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Some(Event::TimerCompleted)` on the tick that reaches zero,
    /// exactly once per session. Ticks outside Running are no-ops.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Finished;
            return Some(Event::TimerCompleted {
                duration_secs: self.duration_secs,
                at: Utc::now(),
            });
        }
        None
    }

    /// The auto-transition out of Finished: back to Idle, ready for the
    /// next session. No-op in any other state.
    pub fn rearm(&mut self) {
        if self.state == TimerState::Finished {
            self.state = TimerState::Idle;
            self.remaining_secs = self.duration_secs;
        }
    }
}

impl Default for TimerStateMachine {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pause_resume() {
        let mut timer = TimerStateMachine::default();
        assert_eq!(timer.state(), TimerState::Idle);

        assert!(timer.start().is_some());
        assert_eq!(timer.state(), TimerState::Running);

        assert!(timer.pause().is_some());
        assert_eq!(timer.state(), TimerState::Paused);

        assert!(timer.start().is_some());
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn start_while_running_is_noop() {
        let mut timer = TimerStateMachine::default();
        assert!(timer.start().is_some());
        assert!(timer.start().is_none());
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn pause_outside_running_is_noop() {
        let mut timer = TimerStateMachine::default();
        assert!(timer.pause().is_none());
        assert_eq!(timer.state(), TimerState::Idle);

        timer.start();
        timer.pause();
        assert!(timer.pause().is_none());
        assert_eq!(timer.state(), TimerState::Paused);
    }

    #[test]
    fn tick_decrements_while_running() {
        let mut timer = TimerStateMachine::new(10);
        timer.start();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 9);
    }

    #[test]
    fn tick_outside_running_is_noop() {
        let mut timer = TimerStateMachine::new(10);
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 10);

        timer.start();
        timer.tick();
        timer.pause();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 9);
    }

    #[test]
    fn pause_then_resume_keeps_remaining() {
        let mut timer = TimerStateMachine::new(100);
        timer.start();
        for _ in 0..40 {
            timer.tick();
        }
        timer.pause();
        let at_pause = timer.remaining_secs();
        timer.start();
        assert_eq!(timer.remaining_secs(), at_pause);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut timer = TimerStateMachine::new(3);
        timer.start();

        assert!(timer.tick().is_none());
        assert!(timer.tick().is_none());
        let completed = timer.tick();
        assert!(matches!(completed, Some(Event::TimerCompleted { .. })));
        assert_eq!(timer.state(), TimerState::Finished);
        assert_eq!(timer.remaining_secs(), 0);

        // Further ticks do nothing; completion never fires twice.
        assert!(timer.tick().is_none());
        assert_eq!(timer.state(), TimerState::Finished);
    }

    #[test]
    fn rearm_prepares_next_session() {
        let mut timer = TimerStateMachine::new(2);
        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.state(), TimerState::Finished);

        timer.rearm();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 2);
    }

    #[test]
    fn rearm_outside_finished_is_noop() {
        let mut timer = TimerStateMachine::new(10);
        timer.start();
        timer.tick();
        timer.rearm();
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining_secs(), 9);
    }

    #[test]
    fn reset_from_any_state() {
        let mut timer = TimerStateMachine::new(5);
        timer.start();
        timer.tick();
        assert!(timer.reset().is_some());
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 5);

        for _ in 0..5 {
            timer.start();
            timer.tick();
        }
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 5);
    }

    #[test]
    fn zero_duration_falls_back_to_default() {
        let timer = TimerStateMachine::new(0);
        assert_eq!(timer.duration_secs(), DEFAULT_DURATION_SECS);
        assert_eq!(timer.remaining_secs(), DEFAULT_DURATION_SECS);
    }

    #[test]
    fn full_session_passes_through_finished() {
        let mut timer = TimerStateMachine::default();
        timer.start();
        let mut completions = 0;
        for _ in 0..DEFAULT_DURATION_SECS {
            if timer.tick().is_some() {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(timer.state(), TimerState::Finished);
    }
}
