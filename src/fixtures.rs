//! Mock fixture data for testing and development
//!
//! Provides one deterministic game (LAD at SF) used by:
//! 1. Unit tests - predictable lineups, matchup and scores
//! 2. Demo mode - `scripted_snapshot` advances the game one step per poll
//! 3. Benchmarks - consistent input for the projection core

use std::collections::HashMap;

use crate::feed::{
    BattingStats, Boxscore, CurrentPlay, GameStatus, LineScore, LineScoreTeams, Matchup, Person,
    PersonRef, PitchingStats, PlayerRecord, Position, Snapshot, Stat, StatGroups, Team,
    TeamBoxscore, TeamInfo, TeamLineScore, player_key,
};

pub const AWAY_ABBR: &str = "LAD";
pub const HOME_ABBR: &str = "SF";

/// Away lineup ids are 5001..=5009, away pitcher 5100.
pub const AWAY_PITCHER_ID: i64 = 5100;
/// Home lineup ids are 6001..=6009, home pitcher 6100.
pub const HOME_PITCHER_ID: i64 = 6100;

const AWAY_LINEUP: [(i64, &str, &str); 9] = [
    (5001, "Mookie Betts", "RF"),
    (5002, "Freddie Freeman", "1B"),
    (5003, "Will Smith", "C"),
    (5004, "Max Muncy", "3B"),
    (5005, "Teoscar Hernandez", "LF"),
    (5006, "Andy Pages", "CF"),
    (5007, "Gavin Lux", "2B"),
    (5008, "Miguel Rojas", "SS"),
    (5009, "Tommy Edman", "DH"),
];

const HOME_LINEUP: [(i64, &str, &str); 9] = [
    (6001, "Jung Hoo Lee", "CF"),
    (6002, "Matt Chapman", "3B"),
    (6003, "Heliot Ramos", "LF"),
    (6004, "Michael Conforto", "RF"),
    (6005, "Mike Yastrzemski", "DH"),
    (6006, "Patrick Bailey", "C"),
    (6007, "LaMonte Wade Jr.", "1B"),
    (6008, "Tyler Fitzgerald", "SS"),
    (6009, "Brett Wisely", "2B"),
];

fn batter(id: i64, name: &str, pos: &str, slot: u32, at_bats: i64, hits: i64, avg: &str) -> PlayerRecord {
    PlayerRecord {
        person: Person {
            id,
            full_name: name.to_string(),
        },
        position: Some(Position {
            abbreviation: pos.to_string(),
        }),
        batting_order: Some(format!("{}", slot * 100)),
        stats: StatGroups {
            batting: Some(BattingStats {
                at_bats: Some(Stat::from(at_bats)),
                hits: Some(Stat::from(hits)),
                rbi: Some(Stat::from(hits / 2)),
                runs: Some(Stat::from(hits / 2)),
                strike_outs: Some(Stat::from(1i64)),
                base_on_balls: Some(Stat::from(0i64)),
                ..Default::default()
            }),
            pitching: None,
        },
        season_stats: StatGroups {
            batting: Some(BattingStats {
                avg: Some(Stat::from(avg)),
                obp: Some(Stat::from(".352")),
                slg: Some(Stat::from(".501")),
                ops: Some(Stat::from(".853")),
                home_runs: Some(Stat::from(18i64)),
                rbi: Some(Stat::from(62i64)),
                stolen_bases: Some(Stat::from(9i64)),
                at_bats: Some(Stat::from(410i64)),
                ..Default::default()
            }),
            pitching: None,
        },
    }
}

fn pitcher(id: i64, name: &str, innings: &str, pitches: i64, era: &str) -> PlayerRecord {
    PlayerRecord {
        person: Person {
            id,
            full_name: name.to_string(),
        },
        position: Some(Position {
            abbreviation: "P".to_string(),
        }),
        batting_order: None,
        stats: StatGroups {
            batting: None,
            pitching: Some(PitchingStats {
                innings_pitched: Some(Stat::from(innings)),
                hits: Some(Stat::from(4i64)),
                earned_runs: Some(Stat::from(1i64)),
                strike_outs: Some(Stat::from(6i64)),
                base_on_balls: Some(Stat::from(2i64)),
                pitches_thrown: Some(Stat::from(pitches)),
                ..Default::default()
            }),
        },
        season_stats: StatGroups {
            batting: None,
            pitching: Some(PitchingStats {
                era: Some(Stat::from(era)),
                whip: Some(Stat::from("1.05")),
                strikeouts_per9_inn: Some(Stat::from("9.43")),
                wins: Some(Stat::from(11i64)),
                losses: Some(Stat::from(5i64)),
                ..Default::default()
            }),
        },
    }
}

fn team_boxscore(lineup: &[(i64, &str, &str); 9], pitcher_record: PlayerRecord) -> TeamBoxscore {
    let mut players = HashMap::new();
    let mut batting_order = Vec::with_capacity(lineup.len());
    for (idx, (id, name, pos)) in lineup.iter().enumerate() {
        let slot = idx as u32 + 1;
        let at_bats = 3;
        let hits = (id % 3 == 0) as i64 + (slot <= 3) as i64;
        let avg = format!(".{:03}", 240 + (id % 60));
        players.insert(
            player_key(*id),
            batter(*id, name, pos, slot, at_bats, hits, &avg),
        );
        batting_order.push(*id);
    }
    players.insert(player_key(pitcher_record.person.id), pitcher_record);
    TeamBoxscore {
        players,
        batting_order,
    }
}

fn teams() -> TeamInfo {
    TeamInfo {
        away: Team {
            abbreviation: AWAY_ABBR.to_string(),
        },
        home: Team {
            abbreviation: HOME_ABBR.to_string(),
        },
    }
}

fn boxscore() -> Boxscore {
    Boxscore {
        away: team_boxscore(
            &AWAY_LINEUP,
            pitcher(AWAY_PITCHER_ID, "Yoshinobu Yamamoto", "6.0", 88, "2.92"),
        ),
        home: team_boxscore(
            &HOME_LINEUP,
            pitcher(HOME_PITCHER_ID, "Logan Webb", "5.1", 78, "3.12"),
        ),
    }
}

fn linescore(away_runs: i64, home_runs: i64, inning: Option<u32>, top: bool) -> LineScore {
    LineScore {
        teams: LineScoreTeams {
            away: TeamLineScore { runs: away_runs },
            home: TeamLineScore { runs: home_runs },
        },
        current_inning: inning,
        is_top_inning: top,
    }
}

/// Live game, top of the 7th, LAD 2 - SF 1; Betts batting against Webb.
pub fn live_snapshot() -> Snapshot {
    Snapshot {
        status: Some(GameStatus {
            detailed_state: "In Progress".to_string(),
        }),
        linescore: Some(linescore(2, 1, Some(7), true)),
        teams: Some(teams()),
        current_play: Some(CurrentPlay {
            matchup: Some(Matchup {
                pitcher: Some(PersonRef {
                    id: HOME_PITCHER_ID,
                }),
                batter: Some(PersonRef { id: 5001 }),
            }),
        }),
        boxscore: Some(boxscore()),
    }
}

pub fn pregame_snapshot() -> Snapshot {
    Snapshot {
        status: Some(GameStatus {
            detailed_state: "Pre-Game".to_string(),
        }),
        linescore: Some(linescore(0, 0, None, true)),
        teams: Some(teams()),
        current_play: None,
        boxscore: Some(boxscore()),
    }
}

pub fn final_snapshot() -> Snapshot {
    Snapshot {
        status: Some(GameStatus {
            detailed_state: "Final".to_string(),
        }),
        linescore: Some(linescore(5, 3, Some(9), false)),
        teams: Some(teams()),
        current_play: None,
        boxscore: Some(boxscore()),
    }
}

/// Demo-mode script: pre-game, warmup, nine innings of two polls per half,
/// then final. Monotonic in `tick` so replays never move backward.
pub fn scripted_snapshot(tick: u32) -> Snapshot {
    match tick {
        0 => pregame_snapshot(),
        1 => Snapshot {
            status: Some(GameStatus {
                detailed_state: "Warmup".to_string(),
            }),
            ..pregame_snapshot()
        },
        t if t < 38 => {
            let half = (t - 2) / 2;
            let inning = (half / 2 + 1).min(9);
            let top = half % 2 == 0;
            let away_runs = ((t - 2) / 7) as i64;
            let home_runs = ((t - 2) / 11) as i64;

            let (pitcher_id, batter_pool) = if top {
                (HOME_PITCHER_ID, &AWAY_LINEUP)
            } else {
                (AWAY_PITCHER_ID, &HOME_LINEUP)
            };
            let batter_id = batter_pool[(t as usize) % batter_pool.len()].0;

            Snapshot {
                status: Some(GameStatus {
                    detailed_state: "In Progress".to_string(),
                }),
                linescore: Some(linescore(away_runs, home_runs, Some(inning), top)),
                teams: Some(teams()),
                current_play: Some(CurrentPlay {
                    matchup: Some(Matchup {
                        pitcher: Some(PersonRef { id: pitcher_id }),
                        batter: Some(PersonRef { id: batter_id }),
                    }),
                }),
                boxscore: Some(boxscore()),
            }
        }
        _ => final_snapshot(),
    }
}
