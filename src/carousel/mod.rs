pub mod engine;
pub mod state;
pub mod swipe;

pub use engine::{CarouselController, CarouselOptions};
pub use state::CarouselState;
pub use swipe::{SwipeDirection, SwipeOutcome, SwipeTracker};
