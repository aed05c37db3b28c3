//! Mobile navigation toggle.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::{HIDDEN_CLASS, OPEN_CLASS};

/// Icon class on the menu button while the panel is open.
pub const ICON_CLOSE: &str = "fas fa-times text-xl text-gray-600";

/// Icon class on the menu button while the panel is closed.
pub const ICON_OPEN: &str = "fas fa-bars text-xl text-gray-600";

/// Classes and icon the host should apply after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    /// `(class, present)` pairs for the panel.
    pub panel_classes: [(&'static str, bool); 2],
    /// Full class attribute for the button icon.
    pub icon_class: &'static str,
}

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Start from the panel's current markup.
    #[must_use]
    pub fn from_markup(has_open_class: bool) -> Self {
        Self { open: has_open_class }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel and return what the page should now show.
    pub fn toggle(&mut self) -> MenuView {
        self.open = !self.open;
        self.view()
    }

    #[must_use]
    pub fn view(&self) -> MenuView {
        MenuView {
            panel_classes: [(HIDDEN_CLASS, !self.open), (OPEN_CLASS, self.open)],
            icon_class: if self.open { ICON_CLOSE } else { ICON_OPEN },
        }
    }
}
