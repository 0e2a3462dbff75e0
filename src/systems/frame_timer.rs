//! Frame timing
//!
//! Tracks the delta time between frames and how long each frame took to
//! build and submit, for display in the window title.

use std::time::{Duration, Instant};

/// Longest step the animation clock is allowed to take in one frame
const MAX_FRAME_DT: f32 = 0.25;

/// Measures time between frames
pub struct FrameTimer {
    last_frame: Instant,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a new timer starting now
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Seconds since the previous tick
    ///
    /// Capped so a stall (window drag, breakpoint) does not make the figure
    /// jump ahead.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        raw_dt.min(MAX_FRAME_DT)
    }
}

/// How long one frame took to build and submit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Frame duration in milliseconds
    pub ms: f64,
}

impl FrameStats {
    pub fn new(ms: f64) -> Self {
        Self { ms }
    }

    pub fn from_duration(duration: Duration) -> Self {
        Self::new(duration.as_secs_f64() * 1000.0)
    }

    /// Frames per second this duration allows, to one decimal (rounded down)
    ///
    /// `None` for a zero or invalid duration.
    pub fn fps(&self) -> Option<f64> {
        if self.ms > 0.0 && self.ms.is_finite() {
            Some((10000.0 / self.ms).floor() / 10.0)
        } else {
            None
        }
    }
}

impl std::fmt::Display for FrameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ms = if self.ms.is_finite() { self.ms.max(0.0).floor() } else { 0.0 };
        match self.fps() {
            Some(fps) => write!(f, "ms: {} fps {}", ms, fps),
            None => write!(f, "ms: {} fps --", ms),
        }
    }
}
