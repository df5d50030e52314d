//! Frame composition. Everything here is re-derived from `AppState` on each
//! draw; the widgets own no state of their own.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::feed::Snapshot;

use super::state::AppState;
use super::views::{lineup, matchup, overlay, scoreboard, status_bar};

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let empty = Snapshot::default();
    let snapshot = state.snapshot.as_deref().unwrap_or(&empty);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // scoreboard + separator
            Constraint::Min(0),    // matchup + lineups
            Constraint::Length(2), // status bar
        ])
        .split(area);

    draw_scoreboard(frame, snapshot, rows[0]);
    draw_content(frame, state, snapshot, rows[1]);
    draw_status_bar(frame, state, rows[2]);

    if state.overlay.is_open() {
        draw_overlay(frame, snapshot, area);
    }
}

fn draw_scoreboard(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines = vec![
        scoreboard::scoreboard_line(snapshot),
        Line::raw("─".repeat(area.width as usize)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_content(frame: &mut Frame, state: &AppState, snapshot: &Snapshot, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left: active matchup view under its cycle indicator.
    let mut lines = vec![
        Line::styled(
            matchup::view_indicator(state.matchup_view),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];
    lines.extend(matchup::render(state.matchup_view.current(), snapshot));
    frame.render_widget(Paragraph::new(lines), columns[0]);

    // Right: both lineups.
    frame.render_widget(Paragraph::new(lineup::dual_lineup(snapshot)), columns[1]);
}

fn draw_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let lines = status_bar::status_bar(state, area.width);
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_overlay(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    // Open with nothing resolvable renders nothing at all.
    let Some(content) = overlay::overlay_content(snapshot) else {
        return;
    };

    let popup = centered_rect(80, 60, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    frame.render_widget(Paragraph::new(content.stats), columns[0]);
    frame.render_widget(Paragraph::new(content.lineups), columns[1]);
}

/// Rect centered in `r` covering the given percentage of each dimension.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
