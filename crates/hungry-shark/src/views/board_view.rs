//! The 10×10 game board.
//!
//! Every cell renders as a two-character column so the board reads roughly
//! square in a terminal. When the countdown runs out, a game-over box is
//! drawn over the water.

use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use shark_game::{state::GRID_SIZE, Facing, FoodKind, GameState};

/// Board width in terminal cells: two columns per grid cell plus borders
const BOARD_WIDTH: u16 = GRID_SIZE as u16 * 2 + 2;
/// Board height: one row per grid cell plus borders
const BOARD_HEIGHT: u16 = GRID_SIZE as u16 + 2;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let board_area = centered_rect(BOARD_WIDTH, BOARD_HEIGHT, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Hungry Shark! ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(board_area);
    f.render_widget(block, board_area);

    let paragraph = Paragraph::new(board_lines(&state.game));
    f.render_widget(paragraph, inner);

    if state.game.is_over() {
        render_game_over(state, area, f);
    }
}

/// Build the ten rows of the board, shark and food drawn over open water
fn board_lines(game: &GameState) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(GRID_SIZE as usize);

    for y in 0..GRID_SIZE {
        let mut spans = Vec::with_capacity(GRID_SIZE as usize);

        for x in 0..GRID_SIZE {
            let span = if (game.shark.x, game.shark.y) == (x, y) {
                shark_glyph(game.shark.facing)
            } else if let Some(item) = game.food.iter().find(|f| (f.x, f.y) == (x, y)) {
                food_glyph(item.kind)
            } else {
                Span::from("· ").blue().dim()
            };
            spans.push(span);
        }

        lines.push(Line::from(spans));
    }

    lines
}

fn shark_glyph(facing: Facing) -> Span<'static> {
    let glyph = match facing {
        Facing::Left => "◀ ",
        Facing::Right => "▶ ",
    };
    Span::from(glyph).cyan().bold()
}

fn food_glyph(kind: FoodKind) -> Span<'static> {
    match kind {
        FoodKind::Fish => Span::from("f ").yellow(),
        FoodKind::TropicalFish => Span::from("t ").magenta(),
        FoodKind::Crab => Span::from("c ").red(),
        FoodKind::Shrimp => Span::from("s ").light_red(),
        FoodKind::Octopus => Span::from("o ").light_magenta(),
        FoodKind::Blowfish => Span::from("b ").green(),
        FoodKind::Squid => Span::from("q ").white(),
    }
}

/// Game-over box drawn over the board once the clock is out
fn render_game_over(state: &AppState, area: Rect, f: &mut Frame) {
    let mut lines = vec![
        Line::from("GAME OVER".red().bold()).alignment(Alignment::Center),
        Line::from(format!("score {}", state.game.score)).alignment(Alignment::Center),
    ];

    match state.session.best {
        Some(best) if state.session.new_record => {
            lines.push(
                Line::from(format!("new record: {best}!").yellow().bold())
                    .alignment(Alignment::Center),
            );
        }
        Some(best) => {
            lines.push(Line::from(format!("best {best}")).alignment(Alignment::Center));
        }
        None => {}
    }

    lines.push(Line::from(""));
    lines.push(Line::from("press enter to play again".dim()).alignment(Alignment::Center));

    let popup_area = centered_rect(34, lines.len() as u16 + 2, area);
    let block = Block::default().borders(Borders::ALL);
    let paragraph = Paragraph::new(lines).block(block);

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

/// Fixed-size rectangle centered within `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(horizontal[1]);

    vertical[1]
}
