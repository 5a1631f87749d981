//! Floating hero particles.
//!
//! Every interval a particle with randomized size, opacity, position and
//! timing is appended to the hero section; it is removed once its (delayed)
//! animation has run for one full cycle.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::Rng;

use crate::config::SiteConfig;
use crate::consts::PARTICLE_STYLES_ID;
use crate::site::{Action, Task};
use crate::timer::{TimerId, TimerQueue};

/// Keyframes shared by every particle; injected once per page.
pub const PARTICLE_KEYFRAMES: &str = "
@keyframes particleFloat {
    0% { transform: translateY(0px) translateX(0px) scale(0); opacity: 0; }
    10% { opacity: 1; transform: translateY(-20px) translateX(10px) scale(1); }
    90% { opacity: 1; transform: translateY(-100px) translateX(-10px) scale(1); }
    100% { transform: translateY(-120px) translateX(20px) scale(0); opacity: 0; }
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleId(pub u64);

/// Randomized visual parameters of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Diameter in px, `[5, 15)`.
    pub size_px: f64,
    /// Horizontal offset in percent of the hero width, `[0, 100)`.
    pub left_pct: f64,
    /// Seconds, `[10, 20)`.
    pub duration_s: f64,
    /// Seconds, `[0, 10)`.
    pub delay_s: f64,
    /// `[0.1, 0.4)`.
    pub opacity: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.random::<f64>() * 10.0 + 5.0,
            left_pct: rng.random::<f64>() * 100.0,
            duration_s: rng.random::<f64>() * 10.0 + 10.0,
            delay_s: rng.random::<f64>() * 10.0,
            opacity: rng.random::<f64>() * 0.3 + 0.1,
        }
    }

    /// Time until the particle should be removed: its delay plus one animation cycle.
    #[must_use]
    pub fn lifetime_ms(&self) -> f64 {
        (self.duration_s + self.delay_s) * 1000.0
    }

    #[must_use]
    pub fn style(&self) -> String {
        let Self { size_px, left_pct, duration_s, delay_s, opacity } = *self;
        format!(
            "position: absolute; width: {size_px}px; height: {size_px}px; \
             background: rgba(255, 105, 180, {opacity}); border-radius: 50%; \
             left: {left_pct}%; top: 100%; pointer-events: none; \
             animation: particleFloat {duration_s}s ease-in-out {delay_s}s infinite;"
        )
    }
}

#[derive(Debug)]
pub struct ParticleSpawner {
    interval_ms: f64,
    live: Vec<(ParticleId, TimerId)>,
    next_id: u64,
    timer: Option<TimerId>,
}

impl ParticleSpawner {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self { interval_ms: config.particle_interval_ms, live: Vec::new(), next_id: 0, timer: None }
    }

    /// Arm the spawn interval and request the keyframe stylesheet.
    pub fn start(&mut self, timers: &mut TimerQueue<Task>, has_hero: bool) -> Vec<Action> {
        if !has_hero || self.timer.is_some() {
            return Vec::new();
        }
        log::debug!("starting hero particles every {}ms", self.interval_ms);
        self.timer = Some(timers.schedule_every(self.interval_ms, Task::ParticleTick));
        vec![Action::InjectStyles { id: PARTICLE_STYLES_ID, css: PARTICLE_KEYFRAMES }]
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, timers: &mut TimerQueue<Task>, rng: &mut R) -> Option<Action> {
        self.timer?;
        let particle = Particle::random(rng);
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        let expiry = timers.schedule_once(particle.lifetime_ms(), Task::ParticleExpire(id));
        self.live.push((id, expiry));
        Some(Action::AppendParticle { id, style: particle.style() })
    }

    pub fn expire(&mut self, id: ParticleId) -> Option<Action> {
        let pos = self.live.iter().position(|(p, _)| *p == id)?;
        self.live.remove(pos);
        Some(Action::RemoveParticle { id })
    }

    /// Cancel the spawn interval and pending expiries, and remove every live particle.
    pub fn stop(&mut self, timers: &mut TimerQueue<Task>) -> Vec<Action> {
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
        }
        self.live
            .drain(..)
            .map(|(id, expiry)| {
                timers.cancel(expiry);
                Action::RemoveParticle { id }
            })
            .collect()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
