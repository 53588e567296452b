//! Status bar (score and clock) and the key-hint footer.

use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let game = &state.game;

    let mut spans = vec![
        Span::from(" SCORE ").bold(),
        Span::from(game.score.to_string()).yellow().bold(),
        Span::from("   TIME ").bold(),
        clock_span(game.time_remaining),
    ];

    if let Some(best) = state.session.best {
        spans.push(Span::from("   BEST ").bold());
        spans.push(Span::from(best.to_string()).cyan());
    }

    if !game.started && !game.is_over() {
        spans.push(Span::from("   press enter to start").dim());
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_hints(state: &AppState, area: Rect, f: &mut Frame) {
    let hints = if state.game.is_over() {
        " enter play again · r reset · q quit"
    } else {
        " arrows move · enter start · r reset · q quit"
    };
    f.render_widget(Paragraph::new(Line::from(Span::from(hints).dim())), area);
}

/// The countdown as m:ss, turning red for the last ten seconds
fn clock_span(time_remaining: u32) -> Span<'static> {
    let clock = format!("{}:{:02}", time_remaining / 60, time_remaining % 60);
    if time_remaining <= 10 {
        Span::from(clock).red().bold()
    } else {
        Span::from(clock).white()
    }
}
