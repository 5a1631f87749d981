//! Horizontally scrolling gallery.
//!
//! The track is advanced by whole items. `index` is always kept within
//! `[0, max_index]`, where `max_index` is how far the track can move before
//! the last item is flush with the right edge of the viewport.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::config::SiteConfig;
use crate::site::{Action, Task};
use crate::timer::{TimerId, TimerQueue};

#[derive(Debug)]
pub struct Gallery {
    item_width: f64,
    auto_advance_ms: f64,
    item_count: usize,
    index: usize,
    max_index: usize,
    timer: Option<TimerId>,
}

impl Gallery {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            item_width: config.gallery_item_width_px,
            auto_advance_ms: config.gallery_auto_advance_ms,
            item_count: 0,
            index: 0,
            max_index: 0,
            timer: None,
        }
    }

    /// Measure the track and arm auto-advance.
    pub fn start(&mut self, timers: &mut TimerQueue<Task>, item_count: usize, viewport_width: f64) {
        if self.timer.is_some() {
            return;
        }
        self.item_count = item_count;
        self.index = 0;
        self.max_index = max_index(item_count, viewport_width, self.item_width);
        log::debug!("gallery: {item_count} items, max index {}", self.max_index);
        self.timer = Some(timers.schedule_every(self.auto_advance_ms, Task::GalleryAdvance));
    }

    pub fn prev(&mut self) -> Option<Action> {
        if !self.is_running() {
            return None;
        }
        self.index = self.index.saturating_sub(1);
        Some(self.scroll_action())
    }

    pub fn next(&mut self) -> Option<Action> {
        if !self.is_running() {
            return None;
        }
        self.index = (self.index + 1).min(self.max_index);
        Some(self.scroll_action())
    }

    /// Auto-advance step: move forward, wrapping to the start at the end.
    pub fn advance(&mut self) -> Option<Action> {
        if !self.is_running() {
            return None;
        }
        self.index = if self.index < self.max_index { self.index + 1 } else { 0 };
        Some(self.scroll_action())
    }

    /// Re-measure after a viewport change, pulling the index back if it is now out of range.
    pub fn resize(&mut self, viewport_width: f64) -> Option<Action> {
        if !self.is_running() {
            return None;
        }
        self.max_index = max_index(self.item_count, viewport_width, self.item_width);
        if self.index > self.max_index {
            self.index = self.max_index;
            return Some(self.scroll_action());
        }
        None
    }

    pub fn stop(&mut self, timers: &mut TimerQueue<Task>) {
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.max_index
    }

    /// Current scroll offset of the track in px.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset_px(&self) -> f64 {
        self.index as f64 * self.item_width
    }

    fn scroll_action(&self) -> Action {
        Action::ScrollGallery { left_px: self.offset_px() }
    }
}

/// Furthest index the track can scroll to: items beyond what fits in the viewport.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn max_index(item_count: usize, viewport_width: f64, item_width: f64) -> usize {
    if item_width <= 0.0 || !viewport_width.is_finite() {
        return 0;
    }
    let visible = (viewport_width.max(0.0) / item_width).floor() as usize;
    item_count.saturating_sub(visible)
}
