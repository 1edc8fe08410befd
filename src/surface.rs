/// Rendering target of a carousel: owns the slide visuals and one indicator per slide.
///
/// The controller only ever flips active flags; what "active" looks like is
/// up to the implementation.
pub trait CarouselSurface {
    /// Replaces any existing indicators with `count` fresh ones.
    fn create_indicators(&mut self, count: usize);
    fn set_slide_active(&mut self, index: usize, active: bool);
    fn set_indicator_active(&mut self, index: usize, active: bool);
}

impl<S: CarouselSurface + ?Sized> CarouselSurface for &mut S {
    fn create_indicators(&mut self, count: usize) {
        (**self).create_indicators(count);
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        (**self).set_slide_active(index, active);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        (**self).set_indicator_active(index, active);
    }
}

/// In-memory surface keeping plain flags. Used headless and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSurface {
    pub slides: Vec<bool>,
    pub indicators: Vec<bool>,
}

impl FlagSurface {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slides: vec![false; slide_count],
            indicators: Vec::new(),
        }
    }

    /// Indices of slides currently marked active.
    pub fn active_slides(&self) -> Vec<usize> {
        active_positions(&self.slides)
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        active_positions(&self.indicators)
    }
}

fn active_positions(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, active)| active.then_some(i))
        .collect()
}

impl CarouselSurface for FlagSurface {
    fn create_indicators(&mut self, count: usize) {
        self.indicators = vec![false; count];
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.slides.get_mut(index) {
            *flag = active;
        }
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.indicators.get_mut(index) {
            *flag = active;
        }
    }
}
