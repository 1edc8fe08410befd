use crate::constants::{PARALLAX_FACTOR, SCROLL_TO_TOP_OFFSET};

/// Scroll-driven cosmetics tuned by configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEffects {
    pub scroll_to_top_offset: f32,
    pub parallax_factor: f32,
}

impl Default for ScrollEffects {
    fn default() -> Self {
        Self {
            scroll_to_top_offset: SCROLL_TO_TOP_OFFSET,
            parallax_factor: PARALLAX_FACTOR,
        }
    }
}

impl ScrollEffects {
    pub fn scroll_to_top_visible(&self, offset: f32) -> bool {
        offset > self.scroll_to_top_offset
    }

    pub fn parallax(&self, scrolled: f32, viewport_height: f32) -> Option<f32> {
        parallax_offset(scrolled, viewport_height, self.parallax_factor)
    }
}

/// How far down the document is scrolled, in percent.
pub fn scroll_progress(scroll_y: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Hero translation while the hero is still on screen; `None` once it has
/// scrolled away, leaving the last transform in place.
pub fn parallax_offset(scrolled: f32, viewport_height: f32, factor: f32) -> Option<f32> {
    (scrolled < viewport_height).then(|| scrolled * factor)
}

/// One percent of the viewport height, the value behind the `--vh` unit.
pub fn viewport_unit(viewport_height: f32) -> f32 {
    viewport_height * 0.01
}
