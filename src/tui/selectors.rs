//! Pure accessors over the feed snapshot.
//!
//! Every view derives its inputs through these; a missing sub-document
//! surfaces as `None` and downstream views render their no-data state.

use crate::feed::{Boxscore, CurrentPlay, GameStatus, LineScore, Snapshot, TeamInfo};

pub fn game_status(snapshot: &Snapshot) -> Option<&GameStatus> {
    snapshot.status.as_ref()
}

pub fn linescore(snapshot: &Snapshot) -> Option<&LineScore> {
    snapshot.linescore.as_ref()
}

pub fn teams(snapshot: &Snapshot) -> Option<&TeamInfo> {
    snapshot.teams.as_ref()
}

pub fn current_play(snapshot: &Snapshot) -> Option<&CurrentPlay> {
    snapshot.current_play.as_ref()
}

pub fn boxscore(snapshot: &Snapshot) -> Option<&Boxscore> {
    snapshot.boxscore.as_ref()
}

/// Pitcher and batter ids of the current matchup; either may be absent.
pub fn matchup_ids(snapshot: &Snapshot) -> (Option<i64>, Option<i64>) {
    let matchup = current_play(snapshot).and_then(|p| p.matchup.as_ref());
    match matchup {
        Some(m) => (
            m.pitcher.as_ref().map(|p| p.id),
            m.batter.as_ref().map(|b| b.id),
        ),
        None => (None, None),
    }
}
