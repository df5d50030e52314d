//! Season/today stat blocks for the current pitcher and batter.
//!
//! Shared between the advanced matchup views and the overlay panel. Every
//! cell goes through `format_stat`, so a missing leaf renders as `-` and
//! the block shape never changes.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::feed::{PlayerRecord, Team};
use crate::formatting::format_stat;

fn header(role: &str, player: &PlayerRecord, team: &Team) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}: {} ({})", role, player.person.full_name, team.abbreviation),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

pub fn pitcher_block(team: &Team, player: &PlayerRecord) -> Vec<Line<'static>> {
    let season = player.season_stats.pitching.as_ref();
    let today = player.stats.pitching.as_ref();

    let wl = format!(
        "{}-{}",
        format_stat(season.and_then(|p| p.wins.as_ref()), 0),
        format_stat(season.and_then(|p| p.losses.as_ref()), 0)
    );

    vec![
        header("PITCHER", player, team),
        Line::raw("Season:"),
        Line::raw(format!(
            "  | ERA  {:>5} | WHIP {:>5} | K/9  {:>5} | W-L  {:>5} |",
            format_stat(season.and_then(|p| p.era.as_ref()), 2),
            format_stat(season.and_then(|p| p.whip.as_ref()), 2),
            format_stat(season.and_then(|p| p.strikeouts_per9_inn.as_ref()), 1),
            wl,
        )),
        Line::raw("Today:"),
        Line::raw(format!(
            "  | IP   {:>5} | H    {:>5} | ER   {:>5} |",
            format_stat(today.and_then(|p| p.innings_pitched.as_ref()), 1),
            format_stat(today.and_then(|p| p.hits.as_ref()), 0),
            format_stat(today.and_then(|p| p.earned_runs.as_ref()), 0),
        )),
        Line::raw(format!(
            "  | K    {:>5} | BB   {:>5} | P    {:>5} |",
            format_stat(today.and_then(|p| p.strike_outs.as_ref()), 0),
            format_stat(today.and_then(|p| p.base_on_balls.as_ref()), 0),
            format_stat(today.and_then(|p| p.pitches_thrown.as_ref()), 0),
        )),
    ]
}

pub fn batter_block(team: &Team, player: &PlayerRecord) -> Vec<Line<'static>> {
    let season = player.season_stats.batting.as_ref();
    let today = player.stats.batting.as_ref();

    let h_ab = format!(
        "{}-{}",
        format_stat(today.and_then(|b| b.hits.as_ref()), 0),
        format_stat(today.and_then(|b| b.at_bats.as_ref()), 0)
    );

    vec![
        header("BATTER", player, team),
        Line::raw("Season:"),
        Line::raw(format!(
            "  | AVG  {:>5} | OBP  {:>5} | SLG  {:>5} | OPS  {:>5} |",
            format_stat(season.and_then(|b| b.avg.as_ref()), 3),
            format_stat(season.and_then(|b| b.obp.as_ref()), 3),
            format_stat(season.and_then(|b| b.slg.as_ref()), 3),
            format_stat(season.and_then(|b| b.ops.as_ref()), 3),
        )),
        Line::raw(format!(
            "  | HR   {:>5} | RBI  {:>5} | SB   {:>5} | AB   {:>5} |",
            format_stat(season.and_then(|b| b.home_runs.as_ref()), 0),
            format_stat(season.and_then(|b| b.rbi.as_ref()), 0),
            format_stat(season.and_then(|b| b.stolen_bases.as_ref()), 0),
            format_stat(season.and_then(|b| b.at_bats.as_ref()), 0),
        )),
        Line::raw("Today:"),
        Line::raw(format!(
            "  | H-AB {:>5} | RBI  {:>5} | R    {:>5} |",
            h_ab,
            format_stat(today.and_then(|b| b.rbi.as_ref()), 0),
            format_stat(today.and_then(|b| b.runs.as_ref()), 0),
        )),
        Line::raw(format!(
            "  | K    {:>5} | BB   {:>5} |",
            format_stat(today.and_then(|b| b.strike_outs.as_ref()), 0),
            format_stat(today.and_then(|b| b.base_on_balls.as_ref()), 0),
        )),
    ]
}
