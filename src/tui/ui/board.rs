//! Tic-tac-toe board rendering.

use crate::games::tictactoe::{Player, Position, Square, ViewModel};
use crate::tui::app::Focus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the board of the current step.
///
/// Winning squares are drawn on a green background; the cursor square is
/// reversed while the board has focus.
pub fn render_board(f: &mut Frame, area: Rect, view: &ViewModel, cursor: Position, focus: Focus) {
    let border_style = if focus == Focus::Board {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board_area = center_rect(inner, 23, 11);
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

    let cursor = (focus == Focus::Board).then_some(cursor);
    render_row(f, rows[0], view, 0, cursor);
    render_separator(f, rows[1]);
    render_row(f, rows[2], view, 1, cursor);
    render_separator(f, rows[3]);
    render_row(f, rows[4], view, 2, cursor);
}

fn render_row(f: &mut Frame, area: Rect, view: &ViewModel, row: usize, cursor: Option<Position>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (col, chunk) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            render_square(f, cols[chunk], view, pos, cursor == Some(pos));
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, view: &ViewModel, pos: Position, is_cursor: bool) {
    let (text, mut style) = match view.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if view.is_highlighted(pos) {
        style = style.bg(Color::Green);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad to the vertical middle of the three-line cell.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
