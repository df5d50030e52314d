use std::sync::Arc;
use std::time::SystemTime;

use crate::config::Config;
use crate::feed::Snapshot;

use super::views::matchup::MatchupView;

/// Root application state - single source of truth.
///
/// All changes happen through the reducer; the render pass re-derives every
/// view-model from this state on each event, with no caching in between.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Latest feed snapshot, replaced wholesale on every update.
    pub snapshot: Option<Arc<Snapshot>>,

    /// Which matchup view variant is active.
    pub matchup_view: MatchupViewState,

    /// Whether the advanced-stats overlay is open.
    pub overlay: OverlayState,

    pub system: SystemState,
}

/// Cyclic index over the fixed registry of matchup views.
///
/// The index is always in `0..MatchupView::COUNT`; `next` and `prev` wrap in
/// both directions and are exact inverses of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchupViewState {
    index: usize,
}

impl MatchupViewState {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> MatchupView {
        MatchupView::ALL[self.index]
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % MatchupView::COUNT,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self {
            index: (self.index + MatchupView::COUNT - 1) % MatchupView::COUNT,
        }
    }
}

/// Open/closed flag for the advanced-stats overlay. Toggling is a pure flip,
/// independent of whether any overlay content is currently derivable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    open: bool,
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub last_refresh: Option<SystemTime>,
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cycle_starts_at_first_view() {
        let state = MatchupViewState::default();
        assert_eq!(state.index(), 0);
        assert_eq!(state.current(), MatchupView::ALL[0]);
    }

    #[test]
    fn test_view_cycle_next_wraps_around() {
        let mut state = MatchupViewState::default();
        for _ in 0..MatchupView::COUNT {
            assert!(state.index() < MatchupView::COUNT);
            state = state.next();
        }
        assert_eq!(state, MatchupViewState::default());
    }

    #[test]
    fn test_view_cycle_prev_is_inverse_of_next() {
        let start = MatchupViewState::default();
        assert_eq!(start.next().prev(), start);
        assert_eq!(start.prev().next(), start);
        // prev from the initial view lands on the last view.
        assert_eq!(start.prev().index(), MatchupView::COUNT - 1);
    }

    #[test]
    fn test_overlay_toggle_flips() {
        let closed = OverlayState::default();
        assert!(!closed.is_open());
        let open = closed.toggle();
        assert!(open.is_open());
        assert_eq!(open.toggle(), closed);
    }
}
