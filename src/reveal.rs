//! Scroll-reveal animations.
//!
//! Elements carrying an `animate-*` class start paused; the first time each
//! one scrolls into view its animation is started. Later intersections are
//! ignored so the animation never restarts.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

use crate::site::Action;

/// Whether a class attribute marks the element for reveal (`[class*="animate-"]`).
#[must_use]
pub fn is_animated(class_attr: &str) -> bool {
    class_attr.contains("animate-")
}

#[derive(Debug, Default)]
pub struct ScrollReveal {
    observed: usize,
    revealed: HashSet<usize>,
}

impl ScrollReveal {
    /// Track `count` elements, indexed in document order.
    pub fn start(&mut self, count: usize) {
        self.observed = count;
        self.revealed.clear();
    }

    /// Handle one intersection report for element `index`.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> Option<Action> {
        if !is_intersecting || index >= self.observed || !self.revealed.insert(index) {
            return None;
        }
        Some(Action::Reveal { index })
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// True once every observed element has been revealed; the observer can disconnect.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed.len() == self.observed
    }
}
