//! Terminal-title synchronization.
//!
//! The title line is a pure function of the latest snapshot; publishing is
//! gated on the `title` config flag and ownership of the sink is scoped to
//! the dashboard's lifetime through [`TitleGuard`], which restores the sink
//! exactly once on drop no matter how the dashboard exits.

use crossterm::{execute, terminal::SetTitle};
use std::io;

use crate::feed::{GameStatus, LineScore, Snapshot, TeamInfo};
use crate::tui::selectors;

/// Compact score/inning summary, e.g. `LAD 2 - SF 1 ▲ 7` or `NYY 5 - BOS 3F`.
pub fn game_title(status: &GameStatus, linescore: &LineScore, teams: &TeamInfo) -> String {
    format!(
        "{} {} - {} {}{}",
        teams.away.abbreviation,
        linescore.teams.away.runs,
        teams.home.abbreviation,
        linescore.teams.home.runs,
        inning_suffix(status, linescore)
    )
}

/// Suffix priority: postponed, cancelled, final, then the half-inning marker
/// for any other started game with a known inning. Pre-game and warmup get
/// no suffix at all.
pub fn inning_suffix(status: &GameStatus, linescore: &LineScore) -> String {
    match status.detailed_state.as_str() {
        "Postponed" => "PPD".to_string(),
        "Cancelled" => "C".to_string(),
        "Final" => "F".to_string(),
        "Pre-Game" | "Warmup" => String::new(),
        _ => match linescore.current_inning {
            Some(inning) => {
                let half = if linescore.is_top_inning { '▲' } else { '▼' };
                format!(" {} {}", half, inning)
            }
            None => String::new(),
        },
    }
}

/// Destination for the published title.
pub trait TitleSink {
    fn publish(&mut self, title: &str);
    /// Reset the sink to its prior/default value.
    fn restore(&mut self);
}

/// Real sink backed by the terminal's title escape sequence.
///
/// The previous title cannot be read back, so restore publishes the empty
/// title, which terminals treat as their default.
pub struct TerminalTitle;

impl TitleSink for TerminalTitle {
    fn publish(&mut self, title: &str) {
        let _ = execute!(io::stdout(), SetTitle(title));
    }

    fn restore(&mut self) {
        let _ = execute!(io::stdout(), SetTitle(""));
    }
}

/// Scoped ownership of the title sink for one dashboard lifetime.
///
/// Created on activation; `sync` republishes on every snapshot; dropping the
/// guard restores the sink exactly once, even if nothing was ever published.
/// With the config flag disabled the guard is inert end to end.
pub struct TitleGuard<S: TitleSink> {
    sink: S,
    enabled: bool,
}

impl<S: TitleSink> TitleGuard<S> {
    pub fn new(sink: S, enabled: bool) -> Self {
        Self { sink, enabled }
    }

    /// Recompute and publish the title for the given snapshot. A snapshot
    /// missing any of status, linescore or teams publishes nothing.
    pub fn sync(&mut self, snapshot: &Snapshot) {
        if !self.enabled {
            return;
        }
        let (Some(status), Some(linescore), Some(teams)) = (
            selectors::game_status(snapshot),
            selectors::linescore(snapshot),
            selectors::teams(snapshot),
        ) else {
            return;
        };
        self.sink.publish(&game_title(status, linescore, teams));
    }
}

impl<S: TitleSink> Drop for TitleGuard<S> {
    fn drop(&mut self) {
        if self.enabled {
            self.sink.restore();
        }
    }
}
