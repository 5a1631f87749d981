//! Falling rose petals.
//!
//! A bounded spawner: one petal shortly after start, then one per interval
//! while fewer than `max_petals` are on screen. Each petal removes itself
//! after a fixed lifetime.

#[cfg(test)]
#[path = "petals_test.rs"]
mod petals_test;

use rand::Rng;

use crate::config::SiteConfig;
use crate::site::{Action, Task};
use crate::timer::{TimerId, TimerQueue};

/// Identifies one live petal element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PetalId(pub u64);

#[derive(Debug)]
pub struct PetalSpawner {
    max_petals: usize,
    first_delay_ms: f64,
    interval_ms: f64,
    lifetime_ms: f64,
    live: Vec<(PetalId, TimerId)>,
    next_id: u64,
    timers: Vec<TimerId>,
}

impl PetalSpawner {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            max_petals: config.max_petals,
            first_delay_ms: config.first_petal_delay_ms,
            interval_ms: config.petal_interval_ms,
            lifetime_ms: config.petal_lifetime_ms,
            live: Vec::new(),
            next_id: 0,
            timers: Vec::new(),
        }
    }

    /// Arm the first-petal timeout and the spawn interval.
    ///
    /// Does nothing if the page has no petal container or the spawner is
    /// already running.
    pub fn start(&mut self, timers: &mut TimerQueue<Task>, has_container: bool) -> bool {
        if !has_container {
            log::info!("petal container not found, petals disabled");
            return false;
        }
        if self.is_running() {
            return true;
        }
        log::debug!("starting petals: max {}", self.max_petals);
        self.timers.push(timers.schedule_once(self.first_delay_ms, Task::FirstPetal));
        self.timers.push(timers.schedule_every(self.interval_ms, Task::PetalTick));
        true
    }

    /// Spawn a petal at a random horizontal offset, unless the cap is reached.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        timers: &mut TimerQueue<Task>,
        rng: &mut R,
        viewport_width: f64,
    ) -> Option<Action> {
        if !self.is_running() || self.live.len() >= self.max_petals {
            return None;
        }
        let id = PetalId(self.next_id);
        self.next_id += 1;
        let left_px = rng.random::<f64>() * viewport_width.max(0.0);
        let expiry = timers.schedule_once(self.lifetime_ms, Task::PetalExpire(id));
        self.live.push((id, expiry));
        log::debug!("petal {} spawned at {left_px:.0}px", id.0);
        Some(Action::AppendPetal { id, left_px })
    }

    /// Remove an expired petal if it is still on screen.
    pub fn expire(&mut self, id: PetalId) -> Option<Action> {
        let pos = self.live.iter().position(|(p, _)| *p == id)?;
        self.live.remove(pos);
        Some(Action::RemovePetal { id })
    }

    /// Cancel spawning and every pending expiry, and remove every live petal.
    pub fn stop(&mut self, timers: &mut TimerQueue<Task>) -> Vec<Action> {
        for id in self.timers.drain(..) {
            timers.cancel(id);
        }
        self.live
            .drain(..)
            .map(|(id, expiry)| {
                timers.cancel(expiry);
                Action::RemovePetal { id }
            })
            .collect()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.timers.is_empty()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn max_petals(&self) -> usize {
        self.max_petals
    }
}

/// Inline style for a freshly spawned petal.
#[must_use]
pub fn petal_style(left_px: f64) -> String {
    format!("left: {left_px}px; animation-delay: 0s; transform: scale(1); z-index: 9999;")
}
