//! Pure game core for Hungry Shark.
//!
//! A shark moves on a fixed 10×10 grid, eats food items drifting in from the
//! right edge, and races a 60-second countdown. The whole game is a single
//! state value advanced by [`reduce`], a pure transition function over a
//! closed action set. Randomness (food kind and spawn row) is the only
//! non-determinism and enters exclusively through an injected
//! [`rand::RngCore`], so every transition is reproducible under a seeded rng.
//!
//! This crate does no I/O and knows nothing about rendering or timers; front
//! ends own the clock and feed [`GameAction::Tick`] once per second while the
//! game is live.

pub mod action;
pub mod reducer;
pub mod spawn;
pub mod state;

pub use action::{Direction, GameAction};
pub use reducer::reduce;
pub use state::{Facing, Food, FoodKind, GameState, Shark};
