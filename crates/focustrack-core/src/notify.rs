//! "Time's up" collaborator.
//!
//! The core never assumes a consumer is attached; when nothing is wired up,
//! completion notifications fall through to [`NullNotifier`].

/// Receives the end-of-session notification.
pub trait Notifier {
    /// Called once per completed session, after the ledger increment.
    fn session_finished(&self, sessions_today: u32);
}

/// No-op notifier used when no presentation layer is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn session_finished(&self, _sessions_today: u32) {}
}
