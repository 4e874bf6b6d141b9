mod machine;

pub use machine::{TimerSnapshot, TimerState, TimerStateMachine, DEFAULT_DURATION_SECS};
