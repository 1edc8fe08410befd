//! Showcase settings.
//!
//! Read from a TOML file (JSON is accepted too); every field has a default,
//! so an empty file yields the stock behavior. Command-line flags override
//! individual values after loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::CarouselOptions;
use crate::constants::*;
use crate::contact::{ContactPage, Notifications};
use crate::effects::{Counter, Reveal, ScrollEffects};
use crate::error::{Result, ShowcaseError};
use crate::nav::NavMenu;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSection {
    /// Milliseconds each slide stays up before auto-advancing.
    pub interval_ms: u64,
    /// Horizontal drag distance (px) a swipe must exceed.
    pub swipe_threshold: f32,
}

impl Default for CarouselSection {
    fn default() -> Self {
        Self {
            interval_ms: AUTO_ADVANCE_INTERVAL.as_millis() as u64,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactSection {
    pub submit_delay_ms: u64,
    pub notification_ms: u64,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            submit_delay_ms: SUBMIT_DELAY.as_millis() as u64,
            notification_ms: NOTIFICATION_LIFETIME.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PageSection {
    pub scroll_to_top_offset: f32,
    pub nav_breakpoint: f32,
    pub parallax_factor: f32,
    pub counter_duration_ms: u64,
    pub reveal_stagger_ms: u64,
}

impl Default for PageSection {
    fn default() -> Self {
        Self {
            scroll_to_top_offset: SCROLL_TO_TOP_OFFSET,
            nav_breakpoint: NAV_BREAKPOINT,
            parallax_factor: PARALLAX_FACTOR,
            counter_duration_ms: COUNTER_DURATION.as_millis() as u64,
            reveal_stagger_ms: REVEAL_STAGGER.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub carousel: CarouselSection,
    pub contact: ContactSection,
    pub page: PageSection,
    /// Where the theme preference is kept.
    pub preferences_path: PathBuf,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselSection::default(),
            contact: ContactSection::default(),
            page: PageSection::default(),
            preferences_path: PathBuf::from(PREFERENCES_FILE),
        }
    }
}

impl ShowcaseConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ShowcaseError::io(path, e))?;
        let config_error = |message: String| ShowcaseError::Config {
            path: path.to_path_buf(),
            message,
        };

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(&contents).map_err(|e| config_error(e.to_string()))?
            }
            _ => toml::from_str(&contents).map_err(|e| config_error(e.to_string()))?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.carousel.interval_ms == 0 {
            return Err(ShowcaseError::InvalidConfig(
                "carousel.interval_ms must be greater than zero".into(),
            ));
        }
        let threshold = self.carousel.swipe_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ShowcaseError::InvalidConfig(format!(
                "carousel.swipe_threshold must be a positive number, got {threshold}"
            )));
        }
        Ok(())
    }

    pub fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions {
            interval: Duration::from_millis(self.carousel.interval_ms),
            swipe_threshold: self.carousel.swipe_threshold,
        }
    }

    pub fn scroll_effects(&self) -> ScrollEffects {
        ScrollEffects {
            scroll_to_top_offset: self.page.scroll_to_top_offset,
            parallax_factor: self.page.parallax_factor,
        }
    }

    pub fn nav_menu(&self) -> NavMenu {
        NavMenu::new(self.page.nav_breakpoint)
    }

    pub fn counter(&self, target: u32) -> Counter {
        Counter::with_duration(target, Duration::from_millis(self.page.counter_duration_ms))
    }

    pub fn reveal(&self, count: usize) -> Reveal {
        Reveal::new(count, Duration::from_millis(self.page.reveal_stagger_ms))
    }

    pub fn contact_page(&self) -> ContactPage {
        ContactPage::new(
            self.submit_delay(),
            Notifications::new(self.notification_lifetime()),
        )
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.contact.submit_delay_ms)
    }

    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_millis(self.contact.notification_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "showcase.toml", "");

        let config = ShowcaseConfig::load_from_file(&path).unwrap();

        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.carousel_options(), CarouselOptions::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_fields() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "showcase.toml",
            "preferences_path = \"state/prefs.json\"\n\n[carousel]\ninterval_ms = 8000\n",
        );

        let config = ShowcaseConfig::load_from_file(&path).unwrap();

        assert_eq!(config.carousel.interval_ms, 8000);
        assert_eq!(config.carousel.swipe_threshold, SWIPE_THRESHOLD);
        assert_eq!(config.preferences_path, PathBuf::from("state/prefs.json"));
        assert_eq!(config.submit_delay(), SUBMIT_DELAY);
    }

    #[test]
    fn json_files_are_accepted() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "showcase.json", r#"{"contact": {"notification_ms": 1000}}"#);

        let config = ShowcaseConfig::load_from_file(&path).unwrap();

        assert_eq!(config.notification_lifetime(), Duration::from_secs(1));
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "showcase.toml", "[carousel\n");

        let err = ShowcaseConfig::load_from_file(&path).unwrap_err();

        assert!(matches!(err, ShowcaseError::Config { .. }));
        assert!(err.to_string().contains("showcase.toml"));
    }

    #[test]
    fn rejects_degenerate_carousel_settings() {
        let mut config = ShowcaseConfig::default();
        config.carousel.interval_ms = 0;
        assert!(matches!(config.validate(), Err(ShowcaseError::InvalidConfig(_))));

        let mut config = ShowcaseConfig::default();
        config.carousel.swipe_threshold = -1.0;
        assert!(config.validate().is_err());

        config.carousel.swipe_threshold = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn page_section_reaches_the_behaviors() {
        let mut config = ShowcaseConfig::default();
        config.page.nav_breakpoint = 1000.0;
        config.page.reveal_stagger_ms = 50;
        config.page.counter_duration_ms = 1000;

        let mut menu = config.nav_menu();
        menu.toggle();
        menu.resized(900.0);
        assert!(menu.is_open());

        assert_eq!(config.reveal(3).delay(2), Duration::from_millis(100));
        assert_eq!(config.counter(10).value_at(Duration::from_millis(500)), 5);
        assert!(config.contact_page().is_submit_enabled());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();

        let err = ShowcaseConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();

        assert!(matches!(err, ShowcaseError::Io { .. }));
        assert_eq!(ShowcaseConfig::load(None).unwrap(), ShowcaseConfig::default());
    }
}
