//! Game state shapes: the board, the shark, and the food that drifts across.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::spawn;

/// Highest valid row/column index; the board is `GRID_SIZE` × `GRID_SIZE`.
pub const GRID_MAX: u8 = 9;
/// Number of rows (and columns) on the board.
pub const GRID_SIZE: u8 = 10;
/// Maximum number of food items alive at once.
pub const FOOD_CAP: usize = 6;
/// Seconds on the countdown clock when a game begins.
pub const GAME_DURATION_SECS: u32 = 60;

/// Direction the shark sprite faces, set by the last horizontal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Left,
    Right,
}

/// The player's shark. There is always exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shark {
    pub x: u8,
    pub y: u8,
    pub facing: Facing,
}

/// The seven sea-creature kinds a food item can spawn as.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FoodKind {
    Fish,
    TropicalFish,
    Crab,
    Shrimp,
    Octopus,
    Blowfish,
    Squid,
}

impl FoodKind {
    /// Bottom dwellers only ever occupy the bottom row of the board.
    pub fn is_bottom_dweller(self) -> bool {
        matches!(self, FoodKind::Crab | FoodKind::Octopus | FoodKind::Shrimp)
    }
}

/// A food item drifting leftwards across the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Unique within the currently alive set (`"<kind>-<seq>"`).
    pub id: String,
    pub x: u8,
    pub y: u8,
    pub kind: FoodKind,
}

/// The single authoritative game state for one play session.
///
/// Invariants upheld by [`crate::reduce`]:
/// - `food` never exceeds [`FOOD_CAP`] items, and no two items share a cell.
/// - `score` only grows; `time_remaining` only shrinks, one unit per tick,
///   and never below zero.
/// - `started` doubles as "not over yet": it is recomputed as
///   `time_remaining != 0` after every gameplay transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub shark: Shark,
    pub food: Vec<Food>,
    pub score: u32,
    pub time_remaining: u32,
    pub started: bool,
    /// Monotonic counter backing food ids.
    pub food_seq: u64,
}

impl GameState {
    /// The fixed initial state: shark at (1, 5) facing right, one food item
    /// already on the board, full clock, game not yet started.
    pub fn initial(rng: &mut dyn RngCore) -> Self {
        let mut food = Vec::new();
        let mut food_seq = 0;

        let all_rows: Vec<u8> = (0..=GRID_MAX).collect();
        if let Some(item) = spawn::spawn_food(&all_rows, food_seq, rng) {
            food.push(item);
            food_seq += 1;
        }

        Self {
            shark: Shark {
                x: 1,
                y: 5,
                facing: Facing::Right,
            },
            food,
            score: 0,
            time_remaining: GAME_DURATION_SECS,
            started: false,
            food_seq,
        }
    }

    /// Whether the countdown has run out and the board is frozen.
    pub fn is_over(&self) -> bool {
        self.time_remaining == 0
    }
}
