//! One-line score summary shown at the top of the dashboard.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::feed::Snapshot;
use crate::tui::selectors;
use crate::tui::title::inning_suffix;

pub fn scoreboard_line(snapshot: &Snapshot) -> Line<'static> {
    let (Some(teams), Some(linescore)) = (
        selectors::teams(snapshot),
        selectors::linescore(snapshot),
    ) else {
        return Line::from(Span::styled(
            "Waiting for game feed...",
            Style::default().add_modifier(Modifier::DIM),
        ));
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut spans = vec![
        Span::styled(teams.away.abbreviation.clone(), bold),
        Span::raw(format!(" {} - ", linescore.teams.away.runs)),
        Span::styled(teams.home.abbreviation.clone(), bold),
        Span::raw(format!(" {}", linescore.teams.home.runs)),
    ];

    if let Some(status) = selectors::game_status(snapshot) {
        let suffix = inning_suffix(status, linescore);
        if !suffix.is_empty() {
            spans.push(Span::raw(format!("  {}", suffix.trim_start())));
        }
        spans.push(Span::styled(
            format!("  ({})", status.detailed_state),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    Line::from(spans)
}
