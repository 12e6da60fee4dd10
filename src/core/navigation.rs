//! Screen navigation state machine
//!
//! Transitions are caller-directed: every navigation is an explicit "go to
//! screen X". There is no back-stack; a single previous-screen slot is
//! recorded when the menu is entered so that leaving the menu flow returns
//! to whichever list screen the user came from.

use crate::core::types::Screen;
use tracing::debug;

/// Holds the current screen and the single remembered previous screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
    previous: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Creates a navigator at the first-launch screen
    pub fn new() -> Self {
        Self {
            current: Screen::InitialWelcome,
            previous: Screen::Home,
        }
    }

    /// The screen currently shown; sole source of truth for rendering
    pub fn current(&self) -> Screen {
        self.current
    }

    /// The remembered previous screen
    pub fn previous(&self) -> Screen {
        self.previous
    }

    /// Direct transition to a screen; records nothing
    pub fn go(&mut self, screen: Screen) {
        debug!(from = self.current.as_str(), to = screen.as_str(), "navigate");
        self.current = screen;
    }

    /// Enters a restaurant menu, remembering where the user came from
    ///
    /// The remembered screen is what [`Navigator::back_to_previous`] returns
    /// to once the user leaves the menu flow.
    pub fn open_menu(&mut self) {
        self.previous = self.current;
        self.go(Screen::Menu);
    }

    /// Returns to the remembered previous screen
    pub fn back_to_previous(&mut self) {
        self.go(self.previous);
    }

    /// Whether the bottom navigation bar is shown on the current screen
    pub fn shows_bottom_nav(&self) -> bool {
        self.current.shows_bottom_nav()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::InitialWelcome);
        assert!(!nav.shows_bottom_nav());
    }

    #[test]
    fn test_menu_back_returns_to_entry_screen() {
        let mut nav = Navigator::new();
        nav.go(Screen::Restaurants);
        nav.open_menu();
        nav.go(Screen::Cart);

        // Back returns to what was remembered when the menu was entered,
        // not unconditionally to home.
        nav.back_to_previous();
        assert_eq!(nav.current(), Screen::Restaurants);
    }

    #[test]
    fn test_menu_back_from_home() {
        let mut nav = Navigator::new();
        nav.go(Screen::Home);
        nav.open_menu();
        nav.back_to_previous();
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_plain_go_does_not_touch_previous() {
        let mut nav = Navigator::new();
        nav.go(Screen::Home);
        nav.open_menu();
        nav.go(Screen::Checkout);
        nav.go(Screen::Success);

        assert_eq!(nav.previous(), Screen::Home);
    }
}
