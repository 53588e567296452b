//! Configuration and data directory paths.
//!
//! Uses XDG directories via the `dirs` crate:
//! - Linux: `~/.config/hungry-shark/`, `~/.cache/hungry-shark/`
//! - macOS: `~/Library/Application Support/hungry-shark/`, `~/Library/Caches/hungry-shark/`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "hungry-shark";

/// Get the application config directory, creating it if needed.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory (log files), creating it if needed.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the path to the high-score file.
pub fn high_score_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("high-score.toml"))
}
