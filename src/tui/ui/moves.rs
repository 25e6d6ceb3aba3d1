//! Move list rendering.

use crate::games::tictactoe::ViewModel;
use crate::tui::app::Focus;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Renders the move list. The current step is bold; the selection
/// is highlighted while the list has focus.
pub fn render_moves(f: &mut Frame, area: Rect, view: &ViewModel, selected: usize, focus: Focus) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(format!("{}. {}", entry.step() + 1, entry.description())).style(style)
        })
        .collect();

    let border_style = if focus == Focus::Moves {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Moves")
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focus == Focus::Moves {
        state.select(Some(selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}
