//! Virtual-time timer queue.
//!
//! Widgets never touch real timers. They schedule tasks on a `TimerQueue`
//! owned by [`crate::site::SiteCore`], and whoever owns the queue decides what
//! "now" is: the browser host feeds it `performance`-style timestamps, tests
//! feed it whatever they like. Times are milliseconds as `f64`.
//!
//! Ordering: due tasks fire by deadline, ties by scheduling order. Intervals
//! re-arm at `deadline + period`, so a late `advance_to` catches up on every
//! missed tick instead of drifting.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Handle for a scheduled timer. Never reused within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    deadline: f64,
    period: Option<f64>,
    task: T,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now: f64,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self { now: 0.0, next_id: 0, entries: Vec::new() }
    }
}

impl<T: Clone> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest time passed to [`Self::advance_to`].
    #[must_use]
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Run `task` once, `delay_ms` after the current time.
    pub fn schedule_once(&mut self, delay_ms: f64, task: T) -> TimerId {
        self.push(delay_ms.max(0.0), None, task)
    }

    /// Run `task` every `period_ms`, first at `now + period_ms`.
    ///
    /// Non-positive periods are clamped to 1ms so a bad value cannot spin.
    pub fn schedule_every(&mut self, period_ms: f64, task: T) -> TimerId {
        let period = if period_ms > 0.0 { period_ms } else { 1.0 };
        self.push(period, Some(period), task)
    }

    /// Cancel a pending timer. Returns `false` if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.deadline).min_by(f64::total_cmp)
    }

    /// Move time forward to `now`, returning every task that came due in order.
    ///
    /// Going backwards is ignored.
    pub fn advance_to(&mut self, now: f64) -> Vec<T> {
        let mut fired = Vec::new();
        while let Some(task) = self.pop_due(now) {
            fired.push(task);
        }
        self.settle(now);
        fired
    }

    /// Fire the single earliest task due at or before `now`.
    ///
    /// The queue clock moves to that task's deadline, so anything scheduled
    /// while handling it is timed from when it was due, not from `now`.
    pub fn pop_due(&mut self, now: f64) -> Option<T> {
        if now < self.now {
            return None;
        }
        let pos = self.earliest_due(now)?;
        let entry = &self.entries[pos];
        self.now = entry.deadline;
        let task = entry.task.clone();
        let period = entry.period;
        match period {
            Some(period) => self.entries[pos].deadline += period,
            None => {
                self.entries.remove(pos);
            }
        }
        Some(task)
    }

    /// Move the clock to `now` without firing anything. Going backwards is ignored.
    pub fn settle(&mut self, now: f64) {
        if now > self.now {
            self.now = now;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, delay: f64, period: Option<f64>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, deadline: self.now + delay, period, task });
        id
    }

    fn earliest_due(&self, now: f64) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by(|(_, a), (_, b)| a.deadline.total_cmp(&b.deadline).then(a.id.cmp(&b.id)))
            .map(|(pos, _)| pos)
    }
}

/// Whole milliseconds from `now` until `deadline`, for a host wake-up timer.
///
/// Past deadlines give 0. Far-future ones saturate at [`MAX_WAKE_DELAY_MS`],
/// the largest delay `setTimeout` honours; anything above it fires at once.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn delay_until(deadline: f64, now: f64) -> u32 {
    let delay = deadline - now;
    if delay.is_nan() {
        return 0;
    }
    delay.ceil().clamp(0.0, f64::from(MAX_WAKE_DELAY_MS)) as u32
}

/// `i32::MAX` milliseconds, about 24.8 days.
pub const MAX_WAKE_DELAY_MS: u32 = 0x7FFF_FFFF;
