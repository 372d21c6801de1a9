//! Request tracking: whether a dispatched command is still in flight.

use purifier_domain::entity::Entity;
use purifier_domain::time::Timestamp;

/// Remembers when the last command that awaits feedback was sent.
///
/// A command counts as pending until the fan reports an update newer than
/// the dispatch time. The tracker is per-card view state, passed by value
/// or reference; it holds no shared globals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTracker {
    dispatched_at: Option<Timestamp>,
}

impl RequestTracker {
    /// Record a command sent at `at`.
    pub fn mark(&mut self, at: Timestamp) {
        self.dispatched_at = Some(at);
    }

    /// Whether the fan has not yet reported back since the last command.
    #[must_use]
    pub fn is_pending(&self, fan: Option<&Entity>) -> bool {
        self.dispatched_at
            .is_some_and(|at| fan.is_none_or(|fan| fan.last_updated < at))
    }
}
