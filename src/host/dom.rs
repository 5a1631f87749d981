//! Page handles, measurements, and [`Action`] application.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::consts::{
    ACTIVE_CLASS, ANIMATED_SELECTOR, GALLERY_ITEM_SELECTOR, GALLERY_NEXT_SELECTOR, GALLERY_PREV_SELECTOR,
    GALLERY_TRACK_SELECTOR, HAMBURGER_ID, HERO_SELECTOR, NAV_MENU_ID, NAVBAR_SELECTOR, PARTICLE_CLASS,
    PETAL_CLASS, PETAL_CONTAINER_ID, REVEALED_CLASS,
};
use crate::error::HostError;
use crate::nav_menu::{ClickTarget, body_overflow};
use crate::particles::ParticleId;
use crate::petals::{PetalId, petal_style};
use crate::site::{Action, PageLayout};

pub struct Dom {
    pub window: Window,
    pub document: Document,
    pub petal_container: Option<Element>,
    pub hero: Option<HtmlElement>,
    pub hamburger: Option<Element>,
    pub nav_menu: Option<Element>,
    pub gallery_track: Option<Element>,
    pub gallery_prev: Option<Element>,
    pub gallery_next: Option<Element>,
    pub gallery_item_count: usize,
    pub animated: Vec<Element>,
    petals: HashMap<PetalId, Element>,
    particles: HashMap<ParticleId, Element>,
}

impl Dom {
    pub fn new(window: Window) -> Result<Self, HostError> {
        let document = window.document().ok_or(HostError::NoDocument)?;
        let hero = document.query_selector(HERO_SELECTOR)?.and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        let gallery_item_count = query_all(&document, GALLERY_ITEM_SELECTOR)?.len();
        Ok(Self {
            petal_container: document.get_element_by_id(PETAL_CONTAINER_ID),
            hero,
            hamburger: document.get_element_by_id(HAMBURGER_ID),
            nav_menu: document.get_element_by_id(NAV_MENU_ID),
            gallery_track: document.query_selector(GALLERY_TRACK_SELECTOR)?,
            gallery_prev: document.query_selector(GALLERY_PREV_SELECTOR)?,
            gallery_next: document.query_selector(GALLERY_NEXT_SELECTOR)?,
            gallery_item_count,
            animated: query_all(&document, ANIMATED_SELECTOR)?,
            petals: HashMap::new(),
            particles: HashMap::new(),
            window,
            document,
        })
    }

    pub fn layout(&self) -> PageLayout {
        PageLayout {
            has_petal_container: self.petal_container.is_some(),
            has_hero: self.hero.is_some(),
            has_hamburger: self.hamburger.is_some(),
            has_nav_menu: self.nav_menu.is_some(),
            has_gallery: self.gallery_track.is_some() && self.gallery_prev.is_some() && self.gallery_next.is_some(),
            gallery_item_count: self.gallery_item_count,
            gallery_viewport_width: self.gallery_viewport_width(),
            window_width: self.window_width(),
            animated_count: self.animated.len(),
            scroll_y: self.scroll_y(),
        }
    }

    // --- Measurements ---

    pub fn window_width(&self) -> f64 {
        match self.window.inner_width() {
            Ok(width) => width.as_f64().unwrap_or(0.0),
            Err(err) => {
                log::warn!("inner_width failed: {err:?}");
                0.0
            }
        }
    }

    pub fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::warn!("scroll_y failed: {err:?}");
                0.0
            }
        }
    }

    /// Width of the element the gallery track scrolls inside.
    pub fn gallery_viewport_width(&self) -> f64 {
        self.gallery_track
            .as_ref()
            .and_then(|track| track.parent_element())
            .and_then(|parent| parent.dyn_ref::<HtmlElement>().map(HtmlElement::offset_width))
            .map_or(0.0, f64::from)
    }

    pub fn navbar_height(&self) -> f64 {
        match self.document.query_selector(NAVBAR_SELECTOR) {
            Ok(Some(navbar)) => navbar
                .dyn_ref::<HtmlElement>()
                .map_or(0.0, |navbar| f64::from(navbar.offset_height())),
            Ok(None) => 0.0,
            Err(err) => {
                log::warn!("navbar lookup failed: {err:?}");
                0.0
            }
        }
    }

    /// Top offset of the section with this id, if it exists.
    pub fn section_top(&self, id: &str) -> Option<f64> {
        let section = self.document.get_element_by_id(id)?;
        Some(section.dyn_ref::<HtmlElement>().map_or(0.0, |s| f64::from(s.offset_top())))
    }

    pub fn classify_click(&self, target: Option<&web_sys::Node>) -> ClickTarget {
        let inside = |el: &Option<Element>| el.as_ref().is_some_and(|el| el.contains(target));
        if inside(&self.hamburger) {
            ClickTarget::Hamburger
        } else if inside(&self.nav_menu) {
            ClickTarget::Menu
        } else {
            ClickTarget::Outside
        }
    }

    pub fn animated_index(&self, target: &Element) -> Option<usize> {
        self.animated.iter().position(|el| el == target)
    }

    // --- Mutations ---

    pub fn apply(&mut self, action: Action) -> Result<(), HostError> {
        match action {
            Action::AppendPetal { id, left_px } => {
                let Some(container) = &self.petal_container else {
                    return Ok(());
                };
                let petal = self.document.create_element("div")?;
                petal.set_class_name(PETAL_CLASS);
                petal.set_attribute("style", &petal_style(left_px))?;
                container.append_child(&petal)?;
                self.petals.insert(id, petal);
            }
            Action::RemovePetal { id } => {
                if let Some(petal) = self.petals.remove(&id) {
                    petal.remove();
                }
            }
            Action::AppendParticle { id, style } => {
                let Some(hero) = &self.hero else {
                    return Ok(());
                };
                let particle = self.document.create_element("div")?;
                particle.set_class_name(PARTICLE_CLASS);
                particle.set_attribute("style", &style)?;
                hero.append_child(&particle)?;
                self.particles.insert(id, particle);
            }
            Action::RemoveParticle { id } => {
                if let Some(particle) = self.particles.remove(&id) {
                    particle.remove();
                }
            }
            Action::InjectStyles { id, css } => {
                if self.document.get_element_by_id(id).is_some() {
                    return Ok(());
                }
                let Some(head) = self.document.head() else {
                    return Ok(());
                };
                let style = self.document.create_element("style")?;
                style.set_id(id);
                style.set_text_content(Some(css));
                head.append_child(&style)?;
            }
            Action::ScrollGallery { left_px } => {
                if let Some(track) = &self.gallery_track {
                    let opts = ScrollToOptions::new();
                    opts.set_left(left_px);
                    track.scroll_to_with_scroll_to_options(&opts);
                }
            }
            Action::SetMenuOpen(open) => {
                for el in [&self.hamburger, &self.nav_menu].into_iter().flatten() {
                    if open {
                        el.class_list().add_1(ACTIVE_CLASS)?;
                    } else {
                        el.class_list().remove_1(ACTIVE_CLASS)?;
                    }
                }
                if let Some(body) = self.document.body() {
                    body.style().set_property("overflow", body_overflow(open))?;
                }
            }
            Action::ScrollWindowTo { top } => {
                let opts = ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&opts);
            }
            Action::SetNavbar(theme) => {
                if let Some(navbar) = self.document.query_selector(NAVBAR_SELECTOR)? {
                    if let Some(navbar) = navbar.dyn_ref::<HtmlElement>() {
                        navbar.style().set_property("background", theme.background())?;
                        navbar.style().set_property("box-shadow", theme.box_shadow())?;
                    }
                }
            }
            Action::Reveal { index } => {
                if let Some(el) = self.animated.get(index) {
                    if let Some(html) = el.dyn_ref::<HtmlElement>() {
                        html.style().set_property("animation-play-state", "running")?;
                    }
                    el.class_list().add_1(REVEALED_CLASS)?;
                }
            }
            Action::ConfirmCall { prompt, href } => {
                if self.window.confirm_with_message(&prompt)? {
                    self.window.location().set_href(&href)?;
                }
            }
            Action::OpenTab { url } => {
                if self.window.open_with_url_and_target(&url, "_blank")?.is_none() {
                    log::warn!("popup blocked for {url}");
                }
            }
            Action::HeroIntro(phase) => {
                if let Some(hero) = &self.hero {
                    for (property, value) in phase.styles() {
                        hero.style().set_property(property, value)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, HostError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}
