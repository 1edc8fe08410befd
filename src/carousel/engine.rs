use std::time::Duration;

use log::{debug, info};

use crate::carousel::state::CarouselState;
use crate::carousel::swipe::{SwipeDirection, SwipeOutcome, SwipeTracker};
use crate::constants::{AUTO_ADVANCE_INTERVAL, SWIPE_THRESHOLD};
use crate::input::{CarouselInput, Key};
use crate::surface::CarouselSurface;
use crate::timer::RepeatingTask;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    pub interval: Duration,
    pub swipe_threshold: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            interval: AUTO_ADVANCE_INTERVAL,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

/// Certificate carousel: slide position, one auto-advance task and input routing.
///
/// Every manual move (buttons, keys, swipes, indicator jumps) restarts the
/// auto-advance countdown so the newly shown slide gets a full interval.
/// At most one auto-advance task is alive at any time.
pub struct CarouselController<S: CarouselSurface> {
    state: CarouselState,
    surface: S,
    swipe: SwipeTracker,
    interval: Duration,
    auto_advance: Option<RepeatingTask>,
}

impl<S: CarouselSurface> CarouselController<S> {
    /// Builds the indicators, shows the first slide and starts auto-advance.
    pub fn new(slide_count: usize, mut surface: S, options: CarouselOptions) -> Self {
        surface.create_indicators(slide_count);

        let mut controller = Self {
            state: CarouselState::new(slide_count),
            surface,
            swipe: SwipeTracker::new(options.swipe_threshold),
            interval: options.interval,
            auto_advance: None,
        };
        controller.render();
        controller.start_auto_advance();

        info!(
            "Carousel ready: {} slides, advancing every {:?}",
            slide_count, options.interval
        );
        controller
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn slide_count(&self) -> usize {
        self.state.slide_count()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_some()
    }

    /// Time until the pending auto-advance fires, if one is scheduled.
    pub fn time_until_advance(&self) -> Option<Duration> {
        self.auto_advance.as_ref().map(RepeatingTask::remaining)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn next(&mut self) {
        if self.state.advance() {
            debug!("Carousel -> slide {}", self.state.current_index());
            self.render();
        }
    }

    pub fn previous(&mut self) {
        if self.state.retreat() {
            debug!("Carousel <- slide {}", self.state.current_index());
            self.render();
        }
    }

    /// Jumps to `index` and restarts the auto-advance countdown.
    /// Positions outside the slide range are ignored.
    pub fn go_to(&mut self, index: usize) {
        if !self.state.select(index) {
            debug!(
                "Ignoring jump to slide {} ({} slides)",
                index,
                self.state.slide_count()
            );
            return;
        }
        self.render();
        self.reset_auto_advance();
    }

    /// Marks the current slide and indicator active and every other one inactive.
    pub fn render(&mut self) {
        for index in 0..self.state.slide_count() {
            let active = self.state.is_active(index);
            self.surface.set_slide_active(index, active);
            self.surface.set_indicator_active(index, active);
        }
    }

    /// Schedules a fresh auto-advance task, replacing any pending one.
    pub fn start_auto_advance(&mut self) {
        if self.auto_advance.replace(RepeatingTask::new(self.interval)).is_some() {
            debug!("Auto-advance rescheduled");
        } else {
            debug!("Auto-advance started");
        }
    }

    pub fn pause_auto_advance(&mut self) {
        if self.auto_advance.take().is_some() {
            debug!("Auto-advance paused");
        }
    }

    pub fn reset_auto_advance(&mut self) {
        self.pause_auto_advance();
        self.start_auto_advance();
    }

    /// Cancels auto-advance for good; only an explicit start schedules it again.
    pub fn shutdown(&mut self) {
        self.pause_auto_advance();
        self.swipe.cancel();
        info!("Carousel shut down at slide {}", self.state.current_index());
    }

    /// Feeds elapsed host time to the auto-advance task.
    /// Returns how many automatic advances happened.
    pub fn update(&mut self, dt: Duration) -> u32 {
        let fired = match self.auto_advance.as_mut() {
            Some(task) => task.tick(dt),
            None => 0,
        };
        // whole laps land on the same slide
        let slide_count = self.state.slide_count();
        if slide_count > 0 {
            for _ in 0..(fired as usize % slide_count) {
                self.next();
            }
        }
        fired
    }

    pub fn handle(&mut self, input: CarouselInput) {
        match input {
            CarouselInput::PreviousButton => {
                self.previous();
                self.reset_auto_advance();
            }
            CarouselInput::NextButton => {
                self.next();
                self.reset_auto_advance();
            }
            CarouselInput::IndicatorClicked(index) => self.go_to(index),
            CarouselInput::Key(key) => self.handle_key(key),
            CarouselInput::PointerDown { x } => self.swipe.pointer_down(x),
            CarouselInput::PointerUp { x } => self.handle_pointer_up(x),
            CarouselInput::PointerEnter => self.pause_auto_advance(),
            CarouselInput::PointerLeave => self.start_auto_advance(),
        }
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Escape | Key::Other => return,
        }
        self.reset_auto_advance();
    }

    fn handle_pointer_up(&mut self, x: f32) {
        match self.swipe.pointer_up(x) {
            SwipeOutcome::NoGesture => return,
            SwipeOutcome::BelowThreshold => {}
            SwipeOutcome::Swipe(SwipeDirection::Left) => self.next(),
            SwipeOutcome::Swipe(SwipeDirection::Right) => self.previous(),
        }
        self.reset_auto_advance();
    }
}
