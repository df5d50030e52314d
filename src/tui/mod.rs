pub mod action;
pub mod keys;
pub mod players;
pub mod reducer;
pub mod render;
pub mod selectors;
pub mod state;
pub mod title;
pub mod views;

pub use action::Action;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::debug;

use crate::background;
use crate::config::Config;
use crate::data_provider::FeedProvider;
use title::{TerminalTitle, TitleGuard};

/// Main entry point for the dashboard.
///
/// Single consumer loop: feed actions are drained before every draw, then
/// the keyboard is polled with a 100ms budget. Each action is handled to
/// completion before the next; every draw re-derives all view content from
/// the current state.
pub async fn run(config: Config, provider: Arc<dyn FeedProvider>) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let poller = tokio::spawn(background::poll_feed(
        provider,
        action_tx,
        config.refresh_interval,
    ));

    // Owns the terminal title for the rest of this function; restores it on
    // drop, whichever way we leave.
    let mut title = TitleGuard::new(TerminalTitle, config.title);

    let mut state = AppState::default();
    state.system.config = config;

    loop {
        while let Ok(action) = action_rx.try_recv() {
            if let Action::SnapshotUpdated { ref snapshot, .. } = action {
                title.sync(snapshot);
            }
            state = reduce(state, action);
        }

        terminal.draw(|f| render::draw(f, &state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = key_to_action(key, &state) {
                    if matches!(action, Action::Quit) {
                        debug!("ACTION: quitting");
                        break;
                    }
                    state = reduce(state, action);
                }
            }
        }
    }

    poller.abort();
    drop(title);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
