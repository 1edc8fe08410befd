use std::time::Duration;

use crate::constants::{PRESS_DURATION, PRESS_SCALE};

/// Brief shrink of a button or tag right after it is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct PressPulse {
    remaining: Option<Duration>,
    duration: Duration,
}

impl Default for PressPulse {
    fn default() -> Self {
        Self::new(PRESS_DURATION)
    }
}

impl PressPulse {
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining: None,
            duration,
        }
    }

    /// Restarts the pulse, also when one is still running.
    pub fn press(&mut self) {
        self.remaining = Some(self.duration);
    }

    pub fn is_pressed(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn scale(&self) -> f32 {
        if self.is_pressed() { PRESS_SCALE } else { 1.0 }
    }

    pub fn update(&mut self, dt: Duration) {
        self.remaining = self
            .remaining
            .and_then(|remaining| remaining.checked_sub(dt))
            .filter(|remaining| !remaining.is_zero());
    }
}
