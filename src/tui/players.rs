//! Player resolution and batting-order projection.

use crate::feed::{Boxscore, PlayerRecord, Stat, Team, TeamBoxscore, TeamInfo};
use crate::formatting::{STAT_PLACEHOLDER, format_stat};

/// Average shown for a lineup player with no season batting line yet.
const EMPTY_AVG: &str = ".000";

/// Result of resolving a player id against the two rosters.
///
/// The team is always known: home when the id is rostered there, away
/// otherwise. The player record may still be absent - an id rostered on
/// neither side resolves to the away team with no record, and callers must
/// treat that as a lookup miss rather than dereference it.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSide<'a> {
    pub team: &'a Team,
    pub player: Option<&'a PlayerRecord>,
}

/// First-match-home-else-away lookup over the two rosters.
pub fn lookup_player<'a>(
    boxscore: &'a Boxscore,
    teams: &'a TeamInfo,
    player_id: i64,
) -> PlayerSide<'a> {
    if let Some(player) = boxscore.home.player(player_id) {
        return PlayerSide {
            team: &teams.home,
            player: Some(player),
        };
    }
    PlayerSide {
        team: &teams.away,
        player: boxscore.away.player(player_id),
    }
}

/// One display row of a team's batting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupRow {
    pub id: i64,
    pub name: String,
    pub position: String,
    /// 1-based lineup slot.
    pub slot: u32,
    pub at_bats: i64,
    pub hits: i64,
    /// Season batting average in its pre-formatted feed form.
    pub avg: String,
}

/// Project a team's `battingOrder` list into ordered display rows.
///
/// Ids with no matching roster record are dropped silently; relative order
/// of the kept entries follows the input list. The slot number comes from
/// the raw `battingOrder` field (slot and substitution order encoded
/// jointly, `300` = 3rd slot); a zero or unparseable raw value falls back
/// to the row's 1-based position in the list.
pub fn batting_order(team: &TeamBoxscore) -> Vec<LineupRow> {
    team.batting_order
        .iter()
        .enumerate()
        .filter_map(|(idx, &id)| {
            let player = team.player(id)?;
            let batting = player.stats.batting.as_ref();
            let season = player.season_stats.batting.as_ref();

            let slot = player
                .batting_order
                .as_deref()
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .map(|raw| raw / 100)
                .filter(|slot| *slot > 0)
                .unwrap_or(idx as u32 + 1);

            let avg = match season.and_then(|b| b.avg.as_ref()) {
                Some(stat) => {
                    let formatted = format_stat(Some(stat), 0);
                    if formatted == STAT_PLACEHOLDER {
                        EMPTY_AVG.to_string()
                    } else {
                        formatted
                    }
                }
                None => EMPTY_AVG.to_string(),
            };

            Some(LineupRow {
                id: player.person.id,
                name: player.person.full_name.clone(),
                position: player
                    .position
                    .as_ref()
                    .map(|p| p.abbreviation.clone())
                    .unwrap_or_default(),
                slot,
                at_bats: stat_count(batting.and_then(|b| b.at_bats.as_ref())),
                hits: stat_count(batting.and_then(|b| b.hits.as_ref())),
                avg,
            })
        })
        .collect()
}

fn stat_count(stat: Option<&Stat>) -> i64 {
    stat.and_then(Stat::as_i64).unwrap_or(0)
}
