use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::state::AppState;

pub mod board_view;
pub mod splash_view;
pub mod status_bar;

/// Render the entire application UI
///
/// The splash screen owns the whole frame while visible; afterwards the
/// layout is a one-line status bar, the board, and a one-line key hint.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    if state.splash.visible {
        splash_view::render(&state.splash, area, f);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    status_bar::render(state, chunks[0], f);
    board_view::render(state, chunks[1], f);
    status_bar::render_hints(state, chunks[2], f);
}
