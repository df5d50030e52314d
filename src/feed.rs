//! Typed model of the raw live-game feed snapshot.
//!
//! The feed is one nested JSON document replaced wholesale on every refresh.
//! Every sub-document is optional: a game that has not started yet ships
//! without a linescore or boxscore, and mid-game documents routinely omit
//! individual stat leaves. Absence is data here, not an error.

use serde::Deserialize;
use std::collections::HashMap;

/// Roster map key for a player id (fixed `ID` prefix + numeric id).
pub fn player_key(id: i64) -> String {
    format!("ID{}", id)
}

/// Full game-feed document at a point in time. Immutable per update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub status: Option<GameStatus>,
    pub linescore: Option<LineScore>,
    pub teams: Option<TeamInfo>,
    pub current_play: Option<CurrentPlay>,
    pub boxscore: Option<Boxscore>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameStatus {
    /// Phase label: `Pre-Game`, `Warmup`, `In Progress`, `Final`,
    /// `Postponed`, `Cancelled`, ...
    pub detailed_state: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineScore {
    pub teams: LineScoreTeams,
    pub current_inning: Option<u32>,
    pub is_top_inning: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LineScoreTeams {
    pub home: TeamLineScore,
    pub away: TeamLineScore,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamLineScore {
    pub runs: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamInfo {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Team {
    pub abbreviation: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentPlay {
    pub matchup: Option<Matchup>,
}

/// Current pitcher/batter pairing. Either side may be absent between plays.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Matchup {
    pub pitcher: Option<PersonRef>,
    pub batter: Option<PersonRef>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PersonRef {
    pub id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Boxscore {
    pub home: TeamBoxscore,
    pub away: TeamBoxscore,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamBoxscore {
    /// Keyed by `player_key(id)`.
    pub players: HashMap<String, PlayerRecord>,
    /// Ordered list of player ids; source order is display order.
    pub batting_order: Vec<i64>,
}

impl TeamBoxscore {
    pub fn player(&self, id: i64) -> Option<&PlayerRecord> {
        self.players.get(&player_key(id))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRecord {
    pub person: Person,
    pub position: Option<Position>,
    /// Raw slot encoding, e.g. `"300"` = 3rd slot, first occupant.
    pub batting_order: Option<String>,
    /// Today's game values.
    pub stats: StatGroups,
    /// Cumulative season values.
    pub season_stats: StatGroups,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: i64,
    pub full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Position {
    pub abbreviation: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatGroups {
    pub batting: Option<BattingStats>,
    pub pitching: Option<PitchingStats>,
}

/// A raw stat scalar. The feed mixes pre-formatted strings (`".287"`,
/// `"5.1"`) with plain numbers, so both forms are kept as received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Stat {
    Number(f64),
    Text(String),
}

impl Stat {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Stat::Number(n) => Some(*n),
            Stat::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|n| n as i64)
    }
}

impl From<f64> for Stat {
    fn from(n: f64) -> Self {
        Stat::Number(n)
    }
}

impl From<i64> for Stat {
    fn from(n: i64) -> Self {
        Stat::Number(n as f64)
    }
}

impl From<&str> for Stat {
    fn from(s: &str) -> Self {
        Stat::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PitchingStats {
    pub era: Option<Stat>,
    pub whip: Option<Stat>,
    pub strikeouts_per9_inn: Option<Stat>,
    pub wins: Option<Stat>,
    pub losses: Option<Stat>,
    pub innings_pitched: Option<Stat>,
    pub hits: Option<Stat>,
    pub earned_runs: Option<Stat>,
    pub strike_outs: Option<Stat>,
    pub base_on_balls: Option<Stat>,
    pub pitches_thrown: Option<Stat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BattingStats {
    pub avg: Option<Stat>,
    pub obp: Option<Stat>,
    pub slg: Option<Stat>,
    pub ops: Option<Stat>,
    pub home_runs: Option<Stat>,
    pub rbi: Option<Stat>,
    pub stolen_bases: Option<Stat>,
    pub at_bats: Option<Stat>,
    pub hits: Option<Stat>,
    pub runs: Option<Stat>,
    pub strike_outs: Option<Stat>,
    pub base_on_balls: Option<Stat>,
}
