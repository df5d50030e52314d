//! Compact dual-lineup rendering with the current batter highlighted.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::feed::Snapshot;
use crate::formatting::fit_name;
use crate::tui::players::{LineupRow, batting_order};
use crate::tui::selectors;

const NAME_WIDTH: usize = 20;

/// One team's lineup as compact rows. The current batter (only meaningful
/// for the side at bat) gets a `* ` marker and a green row.
pub fn compact_lineup(
    rows: &[LineupRow],
    is_batting: bool,
    current_batter: Option<i64>,
) -> Vec<Line<'static>> {
    rows.iter()
        .map(|row| {
            let is_current = is_batting && current_batter == Some(row.id);
            let prefix = if is_current { "* " } else { "  " };
            let text = format!(
                "{}{}. {} {}-{}",
                prefix,
                row.slot,
                fit_name(&row.name, NAME_WIDTH),
                row.hits,
                row.at_bats
            );
            if is_current {
                Line::from(Span::styled(text, Style::default().fg(Color::Green)))
            } else {
                Line::raw(text)
            }
        })
        .collect()
}

fn team_header(abbreviation: &str, is_batting: bool) -> Line<'static> {
    let marker = if is_batting { " *" } else { "" };
    Line::from(Span::styled(
        format!("{}{}", abbreviation, marker),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Away lineup over home lineup, each under a bold team header; the side
/// currently at bat carries a ` *` marker and its current batter is
/// highlighted. Teams or boxscore missing yields no lines at all.
pub fn dual_lineup(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let (Some(boxscore), Some(teams)) = (
        selectors::boxscore(snapshot),
        selectors::teams(snapshot),
    ) else {
        return Vec::new();
    };

    // None when the linescore is absent: neither side is marked at bat.
    let top_of_inning = selectors::linescore(snapshot).map(|l| l.is_top_inning);
    let away_batting = top_of_inning == Some(true);
    let home_batting = top_of_inning == Some(false);

    let (_, batter_id) = selectors::matchup_ids(snapshot);

    let mut lines = Vec::new();
    lines.push(team_header(&teams.away.abbreviation, away_batting));
    lines.extend(compact_lineup(
        &batting_order(&boxscore.away),
        away_batting,
        batter_id,
    ));
    lines.push(team_header(&teams.home.abbreviation, home_batting));
    lines.extend(compact_lineup(
        &batting_order(&boxscore.home),
        home_batting,
        batter_id,
    ));
    lines
}
