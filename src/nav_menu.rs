//! Mobile navigation menu.
//!
//! One `open` flag. The host mirrors it onto the `active` class of the
//! hamburger and the menu, and locks page scroll while the menu is open.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

use crate::site::Action;

/// Where a document-level click landed, relative to the menu widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Hamburger,
    Menu,
    Outside,
}

#[derive(Debug, Default)]
pub struct MobileMenu {
    enabled: bool,
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the menu only when both the hamburger and the menu exist.
    pub fn start(&mut self, has_hamburger: bool, has_menu: bool) -> bool {
        self.enabled = has_hamburger && has_menu;
        self.enabled
    }

    pub fn toggle(&mut self) -> Option<Action> {
        if !self.enabled {
            return None;
        }
        self.open = !self.open;
        Some(Action::SetMenuOpen(self.open))
    }

    /// Close the menu. Emits nothing if it is already closed.
    pub fn close(&mut self) -> Option<Action> {
        if !self.enabled || !self.open {
            return None;
        }
        self.open = false;
        Some(Action::SetMenuOpen(false))
    }

    pub fn on_document_click(&mut self, target: ClickTarget) -> Option<Action> {
        match target {
            ClickTarget::Outside => self.close(),
            ClickTarget::Hamburger | ClickTarget::Menu => None,
        }
    }

    pub fn on_key_down(&mut self, key: &str) -> Option<Action> {
        if key == "Escape" { self.close() } else { None }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Value for `body.style.overflow` while the menu is in the given state.
#[must_use]
pub fn body_overflow(open: bool) -> &'static str {
    if open { "hidden" } else { "" }
}
