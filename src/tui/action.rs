use std::sync::Arc;
use std::time::SystemTime;

use crate::feed::Snapshot;

/// Global actions - every state change flows through one of these.
///
/// Actions are dispatched from user input (key events) and from the
/// background feed poller. Each is handled to completion before the next.
#[derive(Debug, Clone)]
pub enum Action {
    /// A fresh snapshot arrived; replaces the previous one wholesale.
    SnapshotUpdated {
        snapshot: Arc<Snapshot>,
        fetched_at: SystemTime,
    },

    /// Cycle the matchup panel to the next registered view.
    NextMatchupView,
    /// Cycle the matchup panel to the previous registered view.
    PrevMatchupView,
    /// Flip the advanced-stats overlay.
    ToggleOverlay,

    /// The feed poller failed; shown in the status bar, never fatal.
    FeedError(String),

    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_are_cloneable() {
        let action = Action::SnapshotUpdated {
            snapshot: Arc::new(Snapshot::default()),
            fetched_at: SystemTime::now(),
        };
        let _cloned = action.clone();
        let _also = Action::FeedError("boom".to_string()).clone();
    }
}
