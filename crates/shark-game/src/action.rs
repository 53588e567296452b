//! The closed action set the transition engine understands.

/// The four directional move gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Actions driving the transition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Discard everything and return to the fixed initial state.
    Reset,
    /// Mark the game as started; nothing else changes.
    Start,
    /// One second of game time: food drifts left, the clock counts down.
    Tick,
    /// Move the shark one cell, clamped at the board edges.
    Move(Direction),
}
