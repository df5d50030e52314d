//! Bottom status bar: key help on the left, feed status on the right.

use chrono::{DateTime, Local};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::keys::key_bindings;
use crate::tui::state::AppState;

/// Separator line plus one content line, sized for `width` columns.
pub fn status_bar(state: &AppState, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;

    let help = key_bindings(state)
        .iter()
        .map(|b| format!("{} {}", b.key, b.label))
        .collect::<Vec<_>>()
        .join("  │  ");
    let left = format!(" {}", help);

    let (right, right_style) = match &state.system.error_message {
        Some(message) => (
            format!("ERROR: {} ", message),
            Style::default().fg(Color::Red),
        ),
        None => {
            let text = match state.system.last_refresh {
                Some(at) => {
                    let local: DateTime<Local> = at.into();
                    format!(
                        "Updated {} ",
                        local.format(&state.system.config.time_format)
                    )
                }
                None => "Waiting for feed... ".to_string(),
            };
            (text, Style::default().add_modifier(Modifier::DIM))
        }
    };

    let gap = width
        .saturating_sub(left.width())
        .saturating_sub(right.width());

    vec![
        Line::raw("─".repeat(width)),
        Line::from(vec![
            Span::styled(left, Style::default().add_modifier(Modifier::DIM)),
            Span::raw(" ".repeat(gap)),
            Span::styled(right, right_style),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_bar_shows_key_help() {
        let lines = status_bar(&AppState::default(), 80);
        assert_eq!(lines.len(), 2);
        let content = line_text(&lines[1]);
        assert!(content.contains("q Quit"));
        assert!(content.contains("a Advanced Stats"));
        assert!(content.contains("Waiting for feed..."));
    }

    #[test]
    fn test_status_bar_shows_error_over_refresh_time() {
        let mut state = AppState::default();
        state.system.last_refresh = Some(SystemTime::now());
        state.system.error_message = Some("feed parse failed".to_string());

        let content = line_text(&status_bar(&state, 100)[1]);
        assert!(content.contains("ERROR: feed parse failed"));
        assert!(!content.contains("Updated"));
    }

    #[test]
    fn test_status_bar_shows_refresh_time() {
        let mut state = AppState::default();
        state.system.last_refresh = Some(SystemTime::now());

        let content = line_text(&status_bar(&state, 100)[1]);
        assert!(content.contains("Updated "));
    }

    #[test]
    fn test_status_bar_separator_spans_width() {
        let lines = status_bar(&AppState::default(), 40);
        assert_eq!(line_text(&lines[0]).chars().count(), 40);
    }
}
