//! The cyclable matchup panel: a fixed registry of view renderers over the
//! current pitcher/batter pairing.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::feed::{PlayerRecord, Snapshot, Team};
use crate::formatting::format_stat;
use crate::tui::players::{batting_order, lookup_player};
use crate::tui::selectors;
use crate::tui::state::MatchupViewState;

use super::stat_blocks;

/// Registered matchup views, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchupView {
    Basic,
    AdvancedBatting,
    AdvancedPitching,
    GameStats,
}

impl MatchupView {
    pub const ALL: [MatchupView; 4] = [
        MatchupView::Basic,
        MatchupView::AdvancedBatting,
        MatchupView::AdvancedPitching,
        MatchupView::GameStats,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn name(self) -> &'static str {
        match self {
            MatchupView::Basic => "Basic",
            MatchupView::AdvancedBatting => "Advanced Batting",
            MatchupView::AdvancedPitching => "Advanced Pitching",
            MatchupView::GameStats => "Game Stats",
        }
    }
}

/// Indicator accompanying the active view, e.g. `Basic 1/4`.
pub fn view_indicator(state: MatchupViewState) -> String {
    format!(
        "{} {}/{}",
        state.current().name(),
        state.index() + 1,
        MatchupView::COUNT
    )
}

/// Fully resolved current matchup: both ids present and both records found.
struct ResolvedMatchup<'a> {
    pitch_team: &'a Team,
    pitcher: &'a PlayerRecord,
    bat_team: &'a Team,
    batter: &'a PlayerRecord,
}

fn resolve(snapshot: &Snapshot) -> Option<ResolvedMatchup<'_>> {
    let boxscore = selectors::boxscore(snapshot)?;
    let teams = selectors::teams(snapshot)?;
    let (pitcher_id, batter_id) = selectors::matchup_ids(snapshot);

    let pitch_side = lookup_player(boxscore, teams, pitcher_id?);
    let bat_side = lookup_player(boxscore, teams, batter_id?);

    Some(ResolvedMatchup {
        pitch_team: pitch_side.team,
        pitcher: pitch_side.player?,
        bat_team: bat_side.team,
        batter: bat_side.player?,
    })
}

fn no_data() -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        "No matchup data",
        Style::default().add_modifier(Modifier::DIM),
    ))]
}

/// Render the given view against the current snapshot. Any unresolved input
/// degrades to the no-data line; rendering never fails.
pub fn render(view: MatchupView, snapshot: &Snapshot) -> Vec<Line<'static>> {
    match view {
        MatchupView::Basic => basic_view(snapshot),
        MatchupView::AdvancedBatting => advanced_batting_view(snapshot),
        MatchupView::AdvancedPitching => advanced_pitching_view(snapshot),
        MatchupView::GameStats => game_stats_view(snapshot),
    }
}

/// Two-line summary: who is pitching, who is at bat.
fn basic_view(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let Some(resolved) = resolve(snapshot) else {
        return no_data();
    };
    let pitching = resolved.pitcher.stats.pitching.as_ref();
    let pitching_season = resolved.pitcher.season_stats.pitching.as_ref();
    let batting = resolved.batter.stats.batting.as_ref();
    let batting_season = resolved.batter.season_stats.batting.as_ref();

    let bold = Style::default().add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![
            Span::raw(format!("{} Pitching: ", resolved.pitch_team.abbreviation)),
            Span::styled(resolved.pitcher.person.full_name.clone(), bold),
            Span::raw(format!(
                " {} IP, {} P, {} ERA",
                format_stat(pitching.and_then(|p| p.innings_pitched.as_ref()), 1),
                format_stat(pitching.and_then(|p| p.pitches_thrown.as_ref()), 0),
                format_stat(pitching_season.and_then(|p| p.era.as_ref()), 2),
            )),
        ]),
        Line::from(vec![
            Span::raw(format!("{} At Bat:   ", resolved.bat_team.abbreviation)),
            Span::styled(resolved.batter.person.full_name.clone(), bold),
            Span::raw(format!(
                " {}-{}, {} AVG, {} HR",
                format_stat(batting.and_then(|b| b.hits.as_ref()), 0),
                format_stat(batting.and_then(|b| b.at_bats.as_ref()), 0),
                format_stat(batting_season.and_then(|b| b.avg.as_ref()), 3),
                format_stat(batting_season.and_then(|b| b.home_runs.as_ref()), 0),
            )),
        ]),
    ]
}

fn advanced_batting_view(snapshot: &Snapshot) -> Vec<Line<'static>> {
    match resolve(snapshot) {
        Some(resolved) => stat_blocks::batter_block(resolved.bat_team, resolved.batter),
        None => no_data(),
    }
}

fn advanced_pitching_view(snapshot: &Snapshot) -> Vec<Line<'static>> {
    match resolve(snapshot) {
        Some(resolved) => stat_blocks::pitcher_block(resolved.pitch_team, resolved.pitcher),
        None => no_data(),
    }
}

/// Per-team aggregate of today's lineup production plus the run totals.
fn game_stats_view(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let (Some(boxscore), Some(teams)) = (
        selectors::boxscore(snapshot),
        selectors::teams(snapshot),
    ) else {
        return no_data();
    };
    let linescore = selectors::linescore(snapshot);
    let away_runs = linescore.map(|l| l.teams.away.runs).unwrap_or(0);
    let home_runs = linescore.map(|l| l.teams.home.runs).unwrap_or(0);

    let team_line = |team: &Team, runs: i64, side: &crate::feed::TeamBoxscore| {
        let rows = batting_order(side);
        let hits: i64 = rows.iter().map(|r| r.hits).sum();
        let at_bats: i64 = rows.iter().map(|r| r.at_bats).sum();
        Line::from(vec![
            Span::styled(
                format!("{:<4}", team.abbreviation),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {} R, {}-{} today", runs, hits, at_bats)),
        ])
    };

    vec![
        team_line(&teams.away, away_runs, &boxscore.away),
        team_line(&teams.home, home_runs, &boxscore.home),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn rendered_text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_view_indicator_cycles_with_state() {
        let mut state = MatchupViewState::default();
        assert_eq!(view_indicator(state), "Basic 1/4");
        state = state.next();
        assert_eq!(view_indicator(state), "Advanced Batting 2/4");
        state = state.prev().prev();
        assert_eq!(view_indicator(state), "Game Stats 4/4");
    }

    #[test]
    fn test_basic_view_lines() {
        let lines = render(MatchupView::Basic, &fixtures::live_snapshot());
        assert_eq!(lines.len(), 2);
        assert_eq!(
            line_text(&lines[0]),
            "SF Pitching: Logan Webb 5.1 IP, 78 P, 3.12 ERA"
        );
        assert!(line_text(&lines[1]).starts_with("LAD At Bat:   Mookie Betts"));
        assert!(line_text(&lines[1]).contains("18 HR"));
    }

    #[test]
    fn test_advanced_views_delegate_to_stat_blocks() {
        let snapshot = fixtures::live_snapshot();
        let pitching = rendered_text(&render(MatchupView::AdvancedPitching, &snapshot));
        assert!(pitching.contains("PITCHER: Logan Webb (SF)"));
        let batting = rendered_text(&render(MatchupView::AdvancedBatting, &snapshot));
        assert!(batting.contains("BATTER: Mookie Betts (LAD)"));
    }

    #[test]
    fn test_game_stats_view_aggregates_lineups() {
        let lines = render(MatchupView::GameStats, &fixtures::live_snapshot());
        assert_eq!(lines.len(), 2);
        assert!(line_text(&lines[0]).starts_with("LAD"));
        assert!(line_text(&lines[0]).contains("2 R,"));
        assert!(line_text(&lines[1]).starts_with("SF"));
        assert!(line_text(&lines[1]).contains("1 R,"));
    }

    #[test]
    fn test_missing_batter_renders_no_data() {
        let mut snapshot = fixtures::live_snapshot();
        if let Some(play) = snapshot.current_play.as_mut() {
            if let Some(matchup) = play.matchup.as_mut() {
                matchup.batter = None;
            }
        }
        for view in [
            MatchupView::Basic,
            MatchupView::AdvancedBatting,
            MatchupView::AdvancedPitching,
        ] {
            let lines = render(view, &snapshot);
            assert_eq!(line_text(&lines[0]), "No matchup data");
        }
    }

    #[test]
    fn test_unrosterable_id_renders_no_data() {
        let mut snapshot = fixtures::live_snapshot();
        if let Some(play) = snapshot.current_play.as_mut() {
            if let Some(matchup) = play.matchup.as_mut() {
                matchup.batter = Some(crate::feed::PersonRef { id: 31337 });
            }
        }
        let lines = render(MatchupView::Basic, &snapshot);
        assert_eq!(line_text(&lines[0]), "No matchup data");
    }

    #[test]
    fn test_game_stats_survives_missing_linescore() {
        let mut snapshot = fixtures::live_snapshot();
        snapshot.linescore = None;
        let lines = render(MatchupView::GameStats, &snapshot);
        assert!(line_text(&lines[0]).contains("0 R,"));
    }
}
