//! Splash screen - shown for a couple of seconds at startup

use crate::state::SplashState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Width of the swimming lane the splash shark crosses
const LANE_WIDTH: usize = 28;

const TITLE: [&str; 5] = [
    " _  _ _   _ _  _  ___ _____   __",
    "| || | | | | \\| |/ __| _ \\ \\ / /",
    "| __ | |_| | .` | (_ |   /\\ V / ",
    "|_||_|\\___/|_|\\_|\\___|_|_\\ |_|  ",
    "        S  H  A  R  K  !        ",
];

/// Render the splash screen with the swimming-shark animation
pub fn render(state: &SplashState, area: Rect, f: &mut Frame) {
    let background = Block::default().on_black();
    f.render_widget(background, area);

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(TITLE.len() as u16 + 4),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mut lines: Vec<Line> = TITLE
        .iter()
        .map(|row| Line::from(Span::from(*row).cyan().bold()))
        .collect();

    lines.push(Line::from(""));
    lines.push(swimming_shark_line(state.animation_frame));
    lines.push(Line::from(""));
    lines.push(Line::from("Eat as much as you can!".dim()).alignment(Alignment::Center));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, vertical_chunks[1]);
}

/// One line of water with the shark crossing it, a trail of bubbles behind
fn swimming_shark_line(frame: usize) -> Line<'static> {
    let shark_pos = frame % LANE_WIDTH;
    let mut spans = Vec::with_capacity(LANE_WIDTH);

    for cell in 0..LANE_WIDTH {
        if cell == shark_pos {
            spans.push(Span::from("►").cyan().bold());
        } else if cell < shark_pos && shark_pos - cell <= 3 {
            spans.push(Span::from("∘").blue());
        } else {
            spans.push(Span::from("~").blue().dim());
        }
    }

    Line::from(spans).alignment(Alignment::Center)
}
