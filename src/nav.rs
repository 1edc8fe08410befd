use log::debug;

use crate::constants::NAV_BREAKPOINT;
use crate::input::Key;

/// Mobile navigation menu behind the hamburger button.
///
/// While the menu is open the page body must not scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct NavMenu {
    open: bool,
    breakpoint: f32,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(NAV_BREAKPOINT)
    }
}

impl NavMenu {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            open: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!("Navigation menu {}", if self.open { "opened" } else { "closed" });
        self.open
    }

    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            debug!("Navigation menu closed");
        }
    }

    pub fn link_clicked(&mut self) {
        self.close();
    }

    pub fn clicked_outside(&mut self) {
        self.close();
    }

    /// Widening past the breakpoint switches to the desktop menu.
    pub fn resized(&mut self, width: f32) {
        if width > self.breakpoint {
            self.close();
        }
    }

    pub fn key_pressed(&mut self, key: Key) {
        if key == Key::Escape {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> NavMenu {
        let mut menu = NavMenu::default();
        menu.toggle();
        menu
    }

    #[test]
    fn toggle_locks_scrolling_while_open() {
        let mut menu = NavMenu::default();

        assert!(menu.toggle());
        assert!(menu.scroll_locked());
        assert!(!menu.toggle());
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn every_dismiss_trigger_closes() {
        let mut menu = opened();
        menu.link_clicked();
        assert!(!menu.is_open());

        let mut menu = opened();
        menu.clicked_outside();
        assert!(!menu.is_open());

        let mut menu = opened();
        menu.key_pressed(Key::Escape);
        assert!(!menu.is_open());
    }

    #[test]
    fn other_keys_leave_menu_open() {
        let mut menu = opened();

        menu.key_pressed(Key::ArrowLeft);

        assert!(menu.is_open());
    }

    #[test]
    fn resize_closes_only_above_breakpoint() {
        let mut menu = opened();

        menu.resized(768.0);
        assert!(menu.is_open());

        menu.resized(1024.0);
        assert!(!menu.is_open());
    }

    #[test]
    fn closing_a_closed_menu_is_harmless() {
        let mut menu = NavMenu::default();

        menu.clicked_outside();
        menu.resized(2000.0);

        assert!(!menu.is_open());
    }
}
