//! Splash Screen State

use std::time::Instant;

/// Minimum time the splash screen stays visible (in seconds)
pub const MIN_SPLASH_DURATION_SECS: f64 = 2.0;

/// Splash screen state
#[derive(Debug, Clone)]
pub struct SplashState {
    pub visible: bool,
    /// Current frame of the swimming-shark animation
    pub animation_frame: usize,
    /// When the splash screen appeared (for minimum display time)
    pub shown_at: Instant,
}

impl Default for SplashState {
    fn default() -> Self {
        Self {
            visible: true,
            animation_frame: 0,
            shown_at: Instant::now(),
        }
    }
}

impl SplashState {
    /// Check if the splash has been on screen long enough to dismiss
    pub fn min_duration_elapsed(&self) -> bool {
        self.shown_at.elapsed().as_secs_f64() >= MIN_SPLASH_DURATION_SECS
    }
}
