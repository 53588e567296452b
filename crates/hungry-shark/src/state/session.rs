//! Per-session bookkeeping around the persistent high score.

/// Outcome of the high-score comparison once a game ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionState {
    /// Best score on record, loaded when the countdown reaches zero
    pub best: Option<u32>,
    /// Whether the last finished game set a new record
    pub new_record: bool,
    /// Guards the end-of-game handling so it fires once per game
    pub result_recorded: bool,
}
