use std::time::Duration;

use crate::constants::{REVEAL_STAGGER, REVEAL_THRESHOLD};

/// Staggered fade-in of a group of cards as they scroll into view.
///
/// Items start hidden; each one becomes visible the first time enough of it
/// intersects the viewport and then stays visible.
#[derive(Debug, Clone)]
pub struct Reveal {
    visible: Vec<bool>,
    stagger: Duration,
    threshold: f32,
}

impl Reveal {
    pub fn new(count: usize, stagger: Duration) -> Self {
        Self {
            visible: vec![false; count],
            stagger,
            threshold: REVEAL_THRESHOLD,
        }
    }

    pub fn cards(count: usize) -> Self {
        Self::new(count, REVEAL_STAGGER)
    }

    pub fn sections(count: usize) -> Self {
        Self::new(count, REVEAL_STAGGER * 2)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Transition delay for the item at `index`.
    pub fn delay(&self, index: usize) -> Duration {
        self.stagger * u32::try_from(index).unwrap_or(u32::MAX)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Records an intersection report; returns `true` when this report revealed the item.
    pub fn observe(&mut self, index: usize, intersection_ratio: f32) -> bool {
        let Some(visible) = self.visible.get_mut(index) else {
            return false;
        };
        if *visible || intersection_ratio < self.threshold {
            return false;
        }
        *visible = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_are_staggered_by_position() {
        let cards = Reveal::cards(3);
        let sections = Reveal::sections(3);

        assert_eq!(cards.delay(0), Duration::ZERO);
        assert_eq!(cards.delay(2), Duration::from_millis(200));
        assert_eq!(sections.delay(2), Duration::from_millis(400));
    }

    #[test]
    fn reveals_once_threshold_is_reached() {
        let mut reveal = Reveal::cards(2);

        assert!(!reveal.observe(0, 0.05));
        assert!(!reveal.is_visible(0));
        assert!(reveal.observe(0, 0.1));
        assert!(reveal.is_visible(0));
        assert!(!reveal.is_visible(1));
    }

    #[test]
    fn reveal_is_permanent() {
        let mut reveal = Reveal::cards(1);
        reveal.observe(0, 1.0);

        assert!(!reveal.observe(0, 1.0));
        assert!(!reveal.observe(0, 0.0));
        assert!(reveal.is_visible(0));
    }

    #[test]
    fn unknown_items_are_ignored() {
        let mut reveal = Reveal::cards(1);

        assert!(!reveal.observe(5, 1.0));
        assert!(!reveal.is_visible(5));
    }
}
