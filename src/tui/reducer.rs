use tracing::debug;

use super::action::Action;
use super::state::AppState;

/// Pure state reducer.
///
/// Takes current state and an action, returns new state. No side effects,
/// no I/O: the title sink and the terminal are driven by the event loop
/// after the reducer has run.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::SnapshotUpdated {
            snapshot,
            fetched_at,
        } => {
            debug!("ACTION: snapshot updated");
            let mut state = state;
            state.snapshot = Some(snapshot);
            state.system.last_refresh = Some(fetched_at);
            state.system.error_message = None;
            state
        }

        Action::NextMatchupView => {
            let mut state = state;
            state.matchup_view = state.matchup_view.next();
            state
        }

        Action::PrevMatchupView => {
            let mut state = state;
            state.matchup_view = state.matchup_view.prev();
            state
        }

        Action::ToggleOverlay => {
            let mut state = state;
            state.overlay = state.overlay.toggle();
            state
        }

        Action::FeedError(message) => {
            debug!("ACTION: feed error: {}", message);
            let mut state = state;
            state.system.error_message = Some(message);
            state
        }

        // Quit is handled by the event loop; the state is unchanged.
        Action::Quit => state,
    }
}
