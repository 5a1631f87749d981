//! Site core: every widget plus the shared timer queue.
//!
//! `SiteCore` holds all logic that doesn't depend on the DOM. The browser
//! host measures the page, forwards events here, and applies the returned
//! [`Action`]s. Widgets are independent; the core only routes events and
//! fired timer tasks to the widget that owns them.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use rand::Rng;

use crate::config::SiteConfig;
use crate::contact::{self, ContactKind};
use crate::effects::HeroIntroPhase;
use crate::gallery::Gallery;
use crate::nav_menu::{ClickTarget, MobileMenu};
use crate::particles::{ParticleId, ParticleSpawner};
use crate::petals::{PetalId, PetalSpawner};
use crate::reveal::ScrollReveal;
use crate::scroll::{self, NavbarEffect, NavbarTheme, ScrollThrottle};
use crate::timer::{TimerId, TimerQueue};

/// DOM mutations returned from the core for the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AppendPetal { id: PetalId, left_px: f64 },
    RemovePetal { id: PetalId },
    AppendParticle { id: ParticleId, style: String },
    RemoveParticle { id: ParticleId },
    /// Add a `<style>` element with this id to `<head>`, unless one exists.
    InjectStyles { id: &'static str, css: &'static str },
    ScrollGallery { left_px: f64 },
    SetMenuOpen(bool),
    ScrollWindowTo { top: f64 },
    SetNavbar(NavbarTheme),
    Reveal { index: usize },
    /// Ask the user with `prompt`; navigate to `href` only if they accept.
    ConfirmCall { prompt: String, href: String },
    OpenTab { url: String },
    HeroIntro(HeroIntroPhase),
}

/// Timer payloads, routed back to the widget that scheduled them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    FirstPetal,
    PetalTick,
    PetalExpire(PetalId),
    ParticleTick,
    ParticleExpire(ParticleId),
    GalleryAdvance,
    HeroIntroFinish,
}

/// What the host found on the page at start-up.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub has_petal_container: bool,
    pub has_hero: bool,
    pub has_hamburger: bool,
    pub has_nav_menu: bool,
    /// Track plus both navigation buttons are present.
    pub has_gallery: bool,
    pub gallery_item_count: usize,
    /// Width of the track's parent element.
    pub gallery_viewport_width: f64,
    pub window_width: f64,
    pub animated_count: usize,
    pub scroll_y: f64,
}

#[derive(Debug)]
pub struct SiteCore {
    config: SiteConfig,
    timers: TimerQueue<Task>,
    petals: PetalSpawner,
    particles: ParticleSpawner,
    gallery: Gallery,
    menu: MobileMenu,
    navbar: NavbarEffect,
    throttle: ScrollThrottle,
    reveal: ScrollReveal,
    window_width: f64,
    has_hero: bool,
    hero_timer: Option<TimerId>,
    started: bool,
}

impl SiteCore {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            timers: TimerQueue::new(),
            petals: PetalSpawner::new(&config),
            particles: ParticleSpawner::new(&config),
            gallery: Gallery::new(&config),
            menu: MobileMenu::new(),
            navbar: NavbarEffect::new(config.navbar_scroll_threshold_px),
            throttle: ScrollThrottle::default(),
            reveal: ScrollReveal::default(),
            window_width: 0.0,
            has_hero: false,
            hero_timer: None,
            started: false,
            config,
        }
    }

    // --- Lifecycle ---

    /// Start every widget whose elements exist. Calling it twice is a no-op.
    pub fn start(&mut self, now: f64, layout: &PageLayout) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.started {
            return actions;
        }
        self.started = true;
        self.timers.settle(now);
        self.window_width = layout.window_width;
        self.has_hero = layout.has_hero;

        self.petals.start(&mut self.timers, layout.has_petal_container);
        actions.extend(self.particles.start(&mut self.timers, layout.has_hero));
        if layout.has_gallery {
            self.gallery.start(&mut self.timers, layout.gallery_item_count, layout.gallery_viewport_width);
        }
        self.menu.start(layout.has_hamburger, layout.has_nav_menu);
        self.reveal.start(layout.animated_count);
        actions.extend(self.navbar.update(layout.scroll_y));
        log::debug!("site started with {} timers", self.timers.len());
        actions
    }

    /// Tear everything down: cancel all timers, remove live decorations and
    /// release the scroll lock if the menu was open.
    pub fn stop(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if !self.started {
            return actions;
        }
        actions.extend(self.petals.stop(&mut self.timers));
        actions.extend(self.particles.stop(&mut self.timers));
        self.gallery.stop(&mut self.timers);
        actions.extend(self.menu.close());
        self.hero_timer = None;
        self.timers.clear();
        self.started = false;
        log::debug!("site stopped");
        actions
    }

    // --- Time ---

    /// Fire every timer due at or before `now`.
    pub fn advance_to<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Some(task) = self.timers.pop_due(now) {
            actions.extend(self.run_task(task, rng));
        }
        self.timers.settle(now);
        actions
    }

    /// Earliest pending timer deadline, for the host to schedule a wake-up.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    fn run_task<R: Rng + ?Sized>(&mut self, task: Task, rng: &mut R) -> Option<Action> {
        match task {
            Task::FirstPetal | Task::PetalTick => self.petals.spawn(&mut self.timers, rng, self.window_width),
            Task::PetalExpire(id) => self.petals.expire(id),
            Task::ParticleTick => self.particles.spawn(&mut self.timers, rng),
            Task::ParticleExpire(id) => self.particles.expire(id),
            Task::GalleryAdvance => self.gallery.advance(),
            Task::HeroIntroFinish => {
                self.hero_timer = None;
                Some(Action::HeroIntro(HeroIntroPhase::Finish))
            }
        }
    }

    // --- Window events ---

    /// Window `load`: kick off the hero intro.
    pub fn on_load(&mut self) -> Vec<Action> {
        if !self.started || !self.has_hero || self.hero_timer.is_some() {
            return Vec::new();
        }
        self.hero_timer = Some(self.timers.schedule_once(self.config.hero_intro_delay_ms, Task::HeroIntroFinish));
        vec![Action::HeroIntro(HeroIntroPhase::Start)]
    }

    pub fn on_resize(&mut self, window_width: f64, gallery_viewport_width: f64) -> Vec<Action> {
        self.window_width = window_width;
        self.gallery.resize(gallery_viewport_width).into_iter().collect()
    }

    /// A scroll event arrived. Returns `true` if the host should request an
    /// animation frame and then call [`Self::on_animation_frame`].
    pub fn on_scroll(&mut self) -> bool {
        self.started && self.throttle.request()
    }

    pub fn on_animation_frame(&mut self, scroll_y: f64) -> Vec<Action> {
        self.throttle.frame();
        self.navbar.update(scroll_y).into_iter().collect()
    }

    pub fn on_key_down(&mut self, key: &str) -> Vec<Action> {
        self.menu.on_key_down(key).into_iter().collect()
    }

    pub fn on_document_click(&mut self, target: ClickTarget) -> Vec<Action> {
        self.menu.on_document_click(target).into_iter().collect()
    }

    // --- Widgets ---

    pub fn on_gallery_prev(&mut self) -> Vec<Action> {
        self.gallery.prev().into_iter().collect()
    }

    pub fn on_gallery_next(&mut self) -> Vec<Action> {
        self.gallery.next().into_iter().collect()
    }

    pub fn on_menu_toggle(&mut self) -> Vec<Action> {
        self.menu.toggle().into_iter().collect()
    }

    pub fn on_nav_link_click(&mut self) -> Vec<Action> {
        self.menu.close().into_iter().collect()
    }

    /// An in-page anchor was clicked. `section_top` is `None` when the
    /// referenced section does not exist.
    pub fn on_anchor_click(&mut self, section_top: Option<f64>, navbar_height: f64) -> Vec<Action> {
        self.scroll_to_section(section_top, navbar_height)
    }

    pub fn scroll_to_section(&mut self, section_top: Option<f64>, navbar_height: f64) -> Vec<Action> {
        section_top
            .map(|top| Action::ScrollWindowTo {
                top: scroll::scroll_target(top, navbar_height, self.config.scroll_margin_px),
            })
            .into_iter()
            .collect()
    }

    pub fn on_contact_click(&mut self, icon_classes: &str, text: &str) -> Vec<Action> {
        let kind = ContactKind::from_icon_classes(icon_classes);
        contact::on_click(kind, text, &self.config.instagram_base_url).into_iter().collect()
    }

    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> Vec<Action> {
        self.reveal.on_intersection(index, is_intersecting).into_iter().collect()
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn petals(&self) -> &PetalSpawner {
        &self.petals
    }

    #[must_use]
    pub fn particles(&self) -> &ParticleSpawner {
        &self.particles
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    #[must_use]
    pub fn reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
