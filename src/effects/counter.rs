use std::time::Duration;

use crate::constants::{COUNTER_DURATION, COUNTER_TRIGGER_RATIO};

/// Hero stat that counts up from zero once it first scrolls into view.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: u32,
    duration: Duration,
    elapsed: Option<Duration>,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self::with_duration(target, COUNTER_DURATION)
    }

    pub fn with_duration(target: u32, duration: Duration) -> Self {
        Self {
            target,
            duration,
            elapsed: None,
        }
    }

    pub fn is_started(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Starts the animation the first time the stat is at least half visible.
    pub fn observe(&mut self, intersection_ratio: f32) -> bool {
        if self.is_started() || intersection_ratio < COUNTER_TRIGGER_RATIO {
            return false;
        }
        self.elapsed = Some(Duration::ZERO);
        true
    }

    pub fn update(&mut self, dt: Duration) {
        if let Some(elapsed) = self.elapsed.as_mut() {
            *elapsed = (*elapsed + dt).min(self.duration);
        }
    }

    pub fn value_at(&self, elapsed: Duration) -> u32 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        (progress * f64::from(self.target)).floor() as u32
    }

    pub fn value(&self) -> u32 {
        self.elapsed.map_or(0, |elapsed| self.value_at(elapsed))
    }

    pub fn label(&self) -> String {
        format!("{}+", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_linearly_and_stops_at_target() {
        let counter = Counter::new(8);

        assert_eq!(counter.value_at(Duration::ZERO), 0);
        assert_eq!(counter.value_at(Duration::from_millis(1000)), 4);
        assert_eq!(counter.value_at(Duration::from_millis(1999)), 7);
        assert_eq!(counter.value_at(Duration::from_millis(5000)), 8);
    }

    #[test]
    fn waits_for_half_visibility() {
        let mut counter = Counter::new(5);

        assert!(!counter.observe(0.4));
        counter.update(Duration::from_secs(3));
        assert_eq!(counter.label(), "0+");

        assert!(counter.observe(0.5));
        counter.update(Duration::from_secs(3));
        assert_eq!(counter.label(), "5+");
    }

    #[test]
    fn animates_only_once() {
        let mut counter = Counter::new(3);
        counter.observe(1.0);
        counter.update(Duration::from_millis(1000));

        assert!(!counter.observe(1.0));
        assert_eq!(counter.value(), 1);
    }
}
