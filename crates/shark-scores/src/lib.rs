//! High-score persistence for Hungry Shark.
//!
//! The high score is the only value that outlives a play session. It lives in
//! a small TOML file under the platform config directory and is treated as a
//! best-effort external store: loading tolerates missing or corrupt files by
//! falling back to zero, and save failures are for the caller to log. Nothing
//! in here can touch game state.

pub mod high_score;
pub mod paths;

pub use high_score::HighScore;
