//! Certificate carousel and the small interactive behaviors of a portfolio showcase.
//!
//! The [`carousel`] controller is the centerpiece: it owns the slide position
//! and a single auto-advance task, and renders through any [`CarouselSurface`].
//! The remaining modules cover the page chrome around it (theme, navigation,
//! contact form, scroll effects). The raylib viewer lives behind the `gui` feature.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod contact;
pub mod effects;
pub mod error;
pub mod input;
pub mod nav;
pub mod surface;
pub mod texture_loader;
pub mod theme;
pub mod timer;
#[cfg(feature = "gui")]
pub mod viewer;

pub use carousel::{CarouselController, CarouselOptions, CarouselState};
pub use config::ShowcaseConfig;
pub use error::{Result, ShowcaseError};
pub use input::{CarouselInput, Key};
pub use surface::{CarouselSurface, FlagSurface};
pub use theme::{PreferenceStore, Theme, ThemeToggle};
