/// Keys the page behaviors react to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

/// Host events routed to a [`CarouselController`](crate::carousel::CarouselController).
///
/// Pointer coordinates are horizontal positions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    PreviousButton,
    NextButton,
    IndicatorClicked(usize),
    Key(Key),
    PointerDown { x: f32 },
    PointerUp { x: f32 },
    PointerEnter,
    PointerLeave,
}
