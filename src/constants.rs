use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;           // Width of the viewer window
pub const RENDER_HEIGHT: i32 = 800;           // Height of the viewer window
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000); // Time each certificate stays up
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal drag (px) that counts as a swipe
pub const FADE_DURATION: f32 = 0.4;           // Slide cross-fade (seconds)

pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);       // Simulated contact round trip
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(5000);
pub const SUCCESS_FLASH: Duration = Duration::from_millis(500);

pub const SCROLL_TO_TOP_OFFSET: f32 = 300.0;  // Scroll offset (px) that reveals the scroll-to-top button
pub const NAV_BREAKPOINT: f32 = 768.0;        // Widths above this use the desktop menu
pub const PARALLAX_FACTOR: f32 = 0.5;
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
pub const COUNTER_TRIGGER_RATIO: f32 = 0.5;
pub const REVEAL_THRESHOLD: f32 = 0.1;
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

pub const PREFERENCES_FILE: &str = "preferences.json";

pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);
pub const RIPPLE_MAX_SCALE: f32 = 4.0;        // Ripple grows to this multiple of its base size
pub const RIPPLE_ALPHA: f32 = 0.3;            // Starting opacity of the ripple
pub const PRESS_SCALE: f32 = 0.95;            // Pressed buttons shrink to this
pub const PRESS_DURATION: Duration = Duration::from_millis(150);

pub const MISSING_IMAGE_TEXT: &str = "Certificate image not found";
