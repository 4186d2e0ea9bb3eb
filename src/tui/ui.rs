//! Snapshot rendering: status bar, board grid, restart control, key help.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::focus::FocusTarget;
use crate::game::{Cell, Mark, Position};
use crate::screen::ScreenSnapshot;

/// Renders one frame from a screen snapshot.
pub(super) fn render(f: &mut Frame, snapshot: &ScreenSnapshot) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_status(f, chunks[0], snapshot);
    render_board(f, chunks[1], snapshot);
    render_restart(f, chunks[2], snapshot);
    render_help(f, chunks[3]);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Yellow,
    }
}

fn render_status(f: &mut Frame, area: Rect, snapshot: &ScreenSnapshot) {
    let color = match snapshot.outcome().winner() {
        Some(mark) => mark_color(mark),
        None if snapshot.outcome().is_terminal() => Color::Green,
        None => mark_color(*snapshot.to_move()),
    };

    let status = Paragraph::new(snapshot.status_line())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_board(f: &mut Frame, area: Rect, snapshot: &ScreenSnapshot) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], snapshot, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], snapshot, 1);
    render_separator(f, rows[3]);
    render_row(f, rows[4], snapshot, 2);
}

fn render_row(f: &mut Frame, area: Rect, snapshot: &ScreenSnapshot, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        let pos = Position::from_row_col(row, col).expect("row and col are in range");
        render_square(f, chunk, snapshot, pos);
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, snapshot: &ScreenSnapshot, pos: Position) {
    let cell = snapshot.cells()[pos.to_index()];
    let focused = *snapshot.focus() == FocusTarget::Cell(pos);
    let winning = snapshot
        .outcome()
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let (text, mut style) = match cell {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(mark) => (
            match mark {
                Mark::X => "X",
                Mark::O => "O",
            },
            Style::default()
                .fg(mark_color(mark))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if winning {
        style = style.add_modifier(Modifier::REVERSED);
    }
    // Focus overlay is hidden once the game ends.
    if focused && snapshot.outcome().is_in_progress() {
        style = style.bg(mark_color(*snapshot.to_move()));
    }

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_restart(f: &mut Frame, area: Rect, snapshot: &ScreenSnapshot) {
    let button_area = center_rect(area, 20, 3);
    let style = if snapshot.focus().is_restart() {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Blue)
    };

    let button = Paragraph::new("Restart")
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, button_area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("←→↑↓: Move | Enter: Select | r: Restart | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
