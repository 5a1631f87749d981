//! Smooth in-page scrolling and the navbar scroll effect.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{NAVBAR_BG_RESTING, NAVBAR_BG_SCROLLED, NAVBAR_SHADOW_RESTING, NAVBAR_SHADOW_SCROLLED};
use crate::site::Action;

/// Section id referenced by an in-page anchor, e.g. `"#services"` -> `"services"`.
///
/// A bare `#` (or anything not starting with `#`) has no target.
#[must_use]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?.trim();
    if id.is_empty() { None } else { Some(id) }
}

/// Window scroll position that puts `section_top` just below the fixed navbar.
#[must_use]
pub fn scroll_target(section_top: f64, navbar_height: f64, margin: f64) -> f64 {
    (section_top - navbar_height - margin).max(0.0)
}

/// Navbar appearance, switched by scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarTheme {
    #[default]
    Resting,
    Scrolled,
}

impl NavbarTheme {
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Resting => NAVBAR_BG_RESTING,
            Self::Scrolled => NAVBAR_BG_SCROLLED,
        }
    }

    #[must_use]
    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Resting => NAVBAR_SHADOW_RESTING,
            Self::Scrolled => NAVBAR_SHADOW_SCROLLED,
        }
    }
}

#[derive(Debug)]
pub struct NavbarEffect {
    threshold_px: f64,
    theme: Option<NavbarTheme>,
}

impl NavbarEffect {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px, theme: None }
    }

    /// Pick the theme for `scroll_y`, emitting only when it changes.
    ///
    /// The first call always emits so the page starts from a known style.
    pub fn update(&mut self, scroll_y: f64) -> Option<Action> {
        let theme = if scroll_y > self.threshold_px { NavbarTheme::Scrolled } else { NavbarTheme::Resting };
        if self.theme == Some(theme) {
            return None;
        }
        self.theme = Some(theme);
        Some(Action::SetNavbar(theme))
    }

    #[must_use]
    pub fn theme(&self) -> Option<NavbarTheme> {
        self.theme
    }
}

/// Coalesces bursts of scroll events into one update per animation frame.
#[derive(Debug, Default)]
pub struct ScrollThrottle {
    ticking: bool,
}

impl ScrollThrottle {
    /// Returns `true` if the caller should request an animation frame.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Called from the animation frame; re-opens the throttle.
    pub fn frame(&mut self) {
        self.ticking = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}
