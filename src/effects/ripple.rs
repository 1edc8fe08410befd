use std::time::Duration;

use crate::constants::{RIPPLE_ALPHA, RIPPLE_LIFETIME, RIPPLE_MAX_SCALE};

/// Screen-space box of the element that was clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Circle spreading out from a click, in coordinates relative to the clicked element.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    /// Left edge of the unscaled circle's box.
    pub x: f32,
    pub y: f32,
    /// Unscaled diameter: the larger side of the element.
    pub size: f32,
    age: Duration,
    lifetime: Duration,
}

impl Ripple {
    /// Centers a circle as large as the element's larger side on the click.
    pub fn at(bounds: Bounds, click_x: f32, click_y: f32, lifetime: Duration) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            x: click_x - bounds.left - size / 2.0,
            y: click_y - bounds.top - size / 2.0,
            size,
            age: Duration::ZERO,
            lifetime,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.lifetime.is_zero() {
            return 1.0;
        }
        (self.age.as_secs_f32() / self.lifetime.as_secs_f32()).min(1.0)
    }

    /// Grows linearly from nothing to four times its size.
    pub fn scale(&self) -> f32 {
        self.progress() * RIPPLE_MAX_SCALE
    }

    pub fn opacity(&self) -> f32 {
        RIPPLE_ALPHA * (1.0 - self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.age >= self.lifetime
    }
}

/// Ripples currently playing; finished ones are dropped on update.
#[derive(Debug, Clone)]
pub struct Ripples {
    active: Vec<Ripple>,
    lifetime: Duration,
}

impl Default for Ripples {
    fn default() -> Self {
        Self::new(RIPPLE_LIFETIME)
    }
}

impl Ripples {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            active: Vec::new(),
            lifetime,
        }
    }

    pub fn spawn(&mut self, bounds: Bounds, click_x: f32, click_y: f32) {
        self.active
            .push(Ripple::at(bounds, click_x, click_y, self.lifetime));
    }

    pub fn update(&mut self, dt: Duration) {
        for ripple in self.active.iter_mut() {
            ripple.age = ripple.age.saturating_add(dt);
        }
        self.active.retain(|ripple| !ripple.is_finished());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 120.0,
        height: 40.0,
    };

    #[test]
    fn circle_is_centered_on_the_click() {
        let ripple = Ripple::at(LINK, 130.0, 70.0, RIPPLE_LIFETIME);

        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.x, -30.0);
        assert_eq!(ripple.y, -40.0);
    }

    #[test]
    fn tall_elements_use_their_height() {
        let bounds = Bounds { left: 0.0, top: 0.0, width: 20.0, height: 80.0 };

        assert_eq!(Ripple::at(bounds, 10.0, 40.0, RIPPLE_LIFETIME).size, 80.0);
    }

    #[test]
    fn grows_and_fades_over_its_lifetime() {
        let mut ripples = Ripples::default();
        ripples.spawn(LINK, 130.0, 70.0);

        let fresh = ripples.iter().next().unwrap();
        assert_eq!(fresh.scale(), 0.0);
        assert!((fresh.opacity() - 0.3).abs() < 1e-6);

        ripples.update(Duration::from_millis(300));
        let halfway = ripples.iter().next().unwrap();
        assert!((halfway.scale() - 2.0).abs() < 1e-4);
        assert!((halfway.opacity() - 0.15).abs() < 1e-4);
    }

    #[test]
    fn removed_after_six_hundred_millis() {
        let mut ripples = Ripples::default();
        ripples.spawn(LINK, 110.0, 60.0);
        ripples.update(Duration::from_millis(400));
        ripples.spawn(LINK, 200.0, 80.0);

        ripples.update(Duration::from_millis(200));
        assert_eq!(ripples.len(), 1);

        ripples.update(Duration::from_millis(400));
        assert!(ripples.is_empty());
    }
}
