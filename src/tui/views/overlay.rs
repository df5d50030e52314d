//! The advanced-stats overlay panel.
//!
//! Content is derived only when both matchup ids resolve to roster records;
//! otherwise the overlay contributes nothing even while toggled open.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::feed::Snapshot;
use crate::tui::players::lookup_player;
use crate::tui::selectors;

use super::lineup::dual_lineup;
use super::stat_blocks;

/// Two columns of the overlay: stat blocks on the left, lineups on the right.
#[derive(Debug, Clone)]
pub struct OverlayContent {
    pub stats: Vec<Line<'static>>,
    pub lineups: Vec<Line<'static>>,
}

pub fn overlay_content(snapshot: &Snapshot) -> Option<OverlayContent> {
    let boxscore = selectors::boxscore(snapshot)?;
    let teams = selectors::teams(snapshot)?;
    let (pitcher_id, batter_id) = selectors::matchup_ids(snapshot);

    let pitch_side = lookup_player(boxscore, teams, pitcher_id?);
    let bat_side = lookup_player(boxscore, teams, batter_id?);
    let pitcher = pitch_side.player?;
    let batter = bat_side.player?;

    let mut stats = vec![
        Line::from(vec![
            Span::styled(
                "Advanced Stats & Lineup",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  (Press 'a' to close)",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
        Line::raw(""),
    ];
    stats.extend(stat_blocks::pitcher_block(pitch_side.team, pitcher));
    stats.push(Line::raw(""));
    stats.extend(stat_blocks::batter_block(bat_side.team, batter));

    Some(OverlayContent {
        stats,
        lineups: dual_lineup(snapshot),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_overlay_content_for_live_matchup() {
        let content = overlay_content(&fixtures::live_snapshot()).unwrap();
        let stats = text(&content.stats);
        assert!(stats.starts_with("Advanced Stats & Lineup"));
        assert!(stats.contains("PITCHER: Logan Webb (SF)"));
        assert!(stats.contains("BATTER: Mookie Betts (LAD)"));

        let lineups = text(&content.lineups);
        assert!(lineups.contains("LAD *"));
        assert!(lineups.contains("* 1. Mookie Betts"));
    }

    #[test]
    fn test_overlay_empty_when_batter_missing() {
        let mut snapshot = fixtures::live_snapshot();
        if let Some(play) = snapshot.current_play.as_mut() {
            if let Some(matchup) = play.matchup.as_mut() {
                matchup.batter = None;
            }
        }
        assert!(overlay_content(&snapshot).is_none());
    }

    #[test]
    fn test_overlay_empty_when_pitcher_unrostered() {
        let mut snapshot = fixtures::live_snapshot();
        if let Some(play) = snapshot.current_play.as_mut() {
            if let Some(matchup) = play.matchup.as_mut() {
                matchup.pitcher = Some(crate::feed::PersonRef { id: 777_777 });
            }
        }
        assert!(overlay_content(&snapshot).is_none());
    }

    #[test]
    fn test_overlay_empty_without_current_play() {
        assert!(overlay_content(&fixtures::pregame_snapshot()).is_none());
    }
}
