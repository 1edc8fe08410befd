/// Horizontal direction a pointer was dragged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged toward the left edge; shows the next slide.
    Left,
    /// Dragged toward the right edge; shows the previous slide.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Pointer-up without a matching pointer-down.
    NoGesture,
    /// A gesture ended but moved no further than the threshold.
    BelowThreshold,
    Swipe(SwipeDirection),
}

/// Classifies a horizontal displacement (`end - start`, in pixels).
///
/// Only a displacement strictly larger than `threshold` counts.
pub fn classify(displacement: f32, threshold: f32) -> Option<SwipeDirection> {
    if displacement.abs() <= threshold {
        return None;
    }
    if displacement < 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn pointer_down(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn pointer_up(&mut self, x: f32) -> SwipeOutcome {
        let Some(start_x) = self.start_x.take() else {
            return SwipeOutcome::NoGesture;
        };

        match classify(x - start_x, self.threshold) {
            Some(direction) => SwipeOutcome::Swipe(direction),
            None => SwipeOutcome::BelowThreshold,
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}
