pub mod counter;
pub mod pulse;
pub mod reveal;
pub mod ripple;
pub mod scroll;

pub use counter::Counter;
pub use pulse::PressPulse;
pub use reveal::Reveal;
pub use ripple::{Bounds, Ripple, Ripples};
pub use scroll::{ScrollEffects, parallax_offset, scroll_progress, viewport_unit};
