//! High-score file handling.
//!
//! The file lives at `~/.config/hungry-shark/high-score.toml` and holds a
//! single best score plus metadata. A missing or corrupt file is treated as a
//! best of zero.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

const HIGH_SCORE_VERSION: u32 = 1;

/// File metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// The actual persisted value
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScoreData {
    pub best: u32,
}

/// Complete high-score record with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScore {
    pub meta: HighScoreMeta,
    #[serde(default)]
    pub high_score: HighScoreData,
}

impl Default for HighScore {
    fn default() -> Self {
        Self {
            meta: HighScoreMeta {
                last_modified: Utc::now(),
                version: HIGH_SCORE_VERSION,
            },
            high_score: HighScoreData::default(),
        }
    }
}

impl HighScore {
    /// Load the stored high score, defaulting to zero on any failure.
    ///
    /// Storage problems are logged and swallowed here so they can never leak
    /// into gameplay.
    pub fn load() -> Self {
        let path = match paths::high_score_path() {
            Ok(path) => path,
            Err(err) => {
                log::warn!("No high-score location available: {err:#}");
                return Self::default();
            }
        };

        if !path.exists() {
            log::info!("No existing high score found, starting from zero");
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(high_score) => {
                log::info!("Loaded high score {} from {:?}", high_score.best(), path);
                high_score
            }
            Err(err) => {
                log::warn!("Ignoring unreadable high-score file {:?}: {err:#}", path);
                Self::default()
            }
        }
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read high-score file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse high-score file: {:?}", path))
    }

    /// Save the high score to its configured location.
    pub fn save(&mut self) -> Result<()> {
        self.meta.last_modified = Utc::now();

        let path = paths::high_score_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize high score")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write high-score file: {:?}", path))?;

        log::info!("Saved high score {} to {:?}", self.best(), path);
        Ok(())
    }

    /// The best score on record.
    pub fn best(&self) -> u32 {
        self.high_score.best
    }

    /// Compare a final score against the record; returns `true` and updates
    /// the record when the score is strictly higher.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.high_score.best {
            self.high_score.best = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let high_score = HighScore::default();
        assert_eq!(high_score.best(), 0);
        assert_eq!(high_score.meta.version, HIGH_SCORE_VERSION);
    }

    #[test]
    fn test_record_keeps_the_maximum() {
        let mut high_score = HighScore::default();

        assert!(high_score.record(10));
        assert_eq!(high_score.best(), 10);

        // Equal or lower scores are not records
        assert!(!high_score.record(10));
        assert!(!high_score.record(3));
        assert_eq!(high_score.best(), 10);

        assert!(high_score.record(11));
        assert_eq!(high_score.best(), 11);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut high_score = HighScore::default();
        high_score.record(42);

        let toml_str = toml::to_string_pretty(&high_score).unwrap();
        assert!(toml_str.contains("[meta]"));
        assert!(toml_str.contains("[high_score]"));
        assert!(toml_str.contains("best = 42"));

        let parsed: HighScore = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.best(), 42);
    }

    #[test]
    fn test_corrupt_content_fails_to_parse() {
        assert!(toml::from_str::<HighScore>("not a high score").is_err());
        // Missing the high_score table falls back to the default of zero
        let partial: HighScore =
            toml::from_str("[meta]\nlast_modified = \"2026-01-01T00:00:00Z\"\nversion = 1\n")
                .unwrap();
        assert_eq!(partial.best(), 0);
    }
}
