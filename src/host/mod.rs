//! Browser host: wires the page to [`SiteCore`].
//!
//! The host owns the DOM handles, every event listener, and a single
//! `gloo-timers` wake-up armed for the core's earliest timer deadline. Each
//! browser callback borrows the shared state, hands the event to the core,
//! applies the returned actions, and re-arms the wake-up.
//!
//! Callbacks hold only a `Weak` reference to the state, so tearing the site
//! down (or dropping it) releases every listener and timer.

mod dom;
mod listener;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use js_sys::Date;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, DocumentReadyState, Element, Event, HtmlElement, HtmlImageElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, Node,
};

use crate::config::SiteConfig;
use crate::consts::{
    ANCHOR_SELECTOR, CONFIG_SCRIPT_ID, CONTACT_ICON_SELECTOR, CONTACT_ITEM_SELECTOR, CONTACT_TEXT_SELECTOR,
    NAV_LINK_SELECTOR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SERVICE_CARD_SELECTOR,
};
use crate::contact::ContactKind;
use crate::effects::card_shadow;
use crate::error::HostError;
use crate::scroll::anchor_target_id;
use crate::site::{Action, SiteCore};
use crate::timer::delay_until;

use dom::{Dom, query_all};
use listener::Listener;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct HostState {
    core: SiteCore,
    dom: Dom,
    rng: SmallRng,
    wake: Option<Timeout>,
    listeners: Vec<Listener>,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
    frame_callback: Option<Closure<dyn FnMut(f64)>>,
}

type Shared = Rc<RefCell<HostState>>;

impl HostState {
    fn apply_all(&mut self, actions: Vec<Action>) {
        for action in actions {
            if let Err(err) = self.dom.apply(action) {
                log::warn!("failed to apply action: {err}");
            }
        }
    }

    /// Arm one wake-up for the earliest pending core timer.
    fn reschedule(&mut self, weak: &Weak<RefCell<HostState>>) {
        let Some(deadline) = self.core.next_deadline() else {
            self.wake = None;
            return;
        };
        let weak = weak.clone();
        let wake = Timeout::new(delay_until(deadline, Date::now()), move || {
            dispatch(&weak, |state| state.core.advance_to(Date::now(), &mut state.rng));
        });
        self.wake = Some(wake);
    }

    /// Ask for an animation frame to process throttled scroll updates.
    fn request_frame(&mut self) -> Vec<Action> {
        let Some(callback) = &self.frame_callback else {
            return Vec::new();
        };
        match self.dom.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(_) => Vec::new(),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {err:?}");
                let scroll_y = self.dom.scroll_y();
                self.core.on_animation_frame(scroll_y)
            }
        }
    }
}

/// Run `f` against the live state, apply what it returns, and re-arm timers.
fn dispatch(weak: &Weak<RefCell<HostState>>, f: impl FnOnce(&mut HostState) -> Vec<Action>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let Ok(mut guard) = state.try_borrow_mut() else {
        log::warn!("site busy, dropping re-entrant event");
        return;
    };
    let actions = f(&mut *guard);
    guard.apply_all(actions);
    guard.reschedule(weak);
}

/// A running site bound to the current document.
pub struct Site {
    state: Shared,
}

impl Site {
    /// Measure the page, start every widget that has its elements, and wire listeners.
    pub fn boot(config: SiteConfig) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let dom = Dom::new(window)?;
        let preload = config.preload_images.clone();
        let seed = Date::now().to_bits() ^ js_sys::Math::random().to_bits();
        let state = Rc::new(RefCell::new(HostState {
            core: SiteCore::new(config),
            dom,
            rng: SmallRng::seed_from_u64(seed),
            wake: None,
            listeners: Vec::new(),
            observer: None,
            frame_callback: None,
        }));
        let weak = Rc::downgrade(&state);

        {
            let mut guard = state.borrow_mut();
            let layout = guard.dom.layout();
            let actions = guard.core.start(Date::now(), &layout);
            guard.apply_all(actions);
            preload_images(&preload);
            guard.reschedule(&weak);
        }

        let listeners = wire_listeners(&state, &weak)?;
        let frame_weak = weak.clone();
        let frame_callback = Closure::wrap(Box::new(move |_ts: f64| {
            dispatch(&frame_weak, |state| {
                let scroll_y = state.dom.scroll_y();
                state.core.on_animation_frame(scroll_y)
            });
        }) as Box<dyn FnMut(f64)>);
        {
            let mut guard = state.borrow_mut();
            guard.listeners = listeners;
            guard.frame_callback = Some(frame_callback);
        }
        observe_animated(&state, &weak)?;

        let loaded = state.borrow().dom.document.ready_state() == DocumentReadyState::Complete;
        if loaded {
            dispatch(&weak, |state| state.core.on_load());
        }
        log::info!("site ready");
        Ok(Self { state })
    }

    pub fn scroll_to_section(&self, section_id: &str) {
        dispatch(&Rc::downgrade(&self.state), |state| {
            let top = state.dom.section_top(section_id);
            let navbar_height = state.dom.navbar_height();
            state.core.scroll_to_section(top, navbar_height)
        });
    }

    /// Stop every widget, remove live decorations, and detach all listeners.
    pub fn teardown(self) {
        let Ok(mut guard) = self.state.try_borrow_mut() else {
            log::warn!("site busy, teardown skipped");
            return;
        };
        let actions = guard.core.stop();
        guard.apply_all(actions);
        guard.wake = None;
        guard.listeners.clear();
        if let Some((observer, _callback)) = guard.observer.take() {
            observer.disconnect();
        }
        guard.frame_callback = None;
        log::info!("site torn down");
    }
}

fn wire_listeners(state: &Shared, weak: &Weak<RefCell<HostState>>) -> Result<Vec<Listener>, HostError> {
    let guard = state.borrow();
    let dom = &guard.dom;
    let mut listeners = Vec::new();

    // Mobile menu.
    if let Some(hamburger) = &dom.hamburger {
        let weak = weak.clone();
        listeners.push(Listener::new(hamburger, "click", move |_event| {
            dispatch(&weak, |state| state.core.on_menu_toggle());
        })?);
    }
    for link in query_all(&dom.document, NAV_LINK_SELECTOR)? {
        let weak = weak.clone();
        listeners.push(Listener::new(&link, "click", move |_event| {
            dispatch(&weak, |state| state.core.on_nav_link_click());
        })?);
    }
    {
        let weak = weak.clone();
        listeners.push(Listener::new(&dom.document, "click", move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_ref::<Node>().cloned());
            dispatch(&weak, |state| {
                let target = state.dom.classify_click(target.as_ref());
                state.core.on_document_click(target)
            });
        })?);
    }
    {
        let weak = weak.clone();
        listeners.push(Listener::new(&dom.document, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            dispatch(&weak, |state| state.core.on_key_down(&key));
        })?);
    }

    // Gallery.
    if let (Some(prev), Some(next)) = (&dom.gallery_prev, &dom.gallery_next) {
        let prev_weak = weak.clone();
        listeners.push(Listener::new(prev, "click", move |_event| {
            dispatch(&prev_weak, |state| state.core.on_gallery_prev());
        })?);
        let next_weak = weak.clone();
        listeners.push(Listener::new(next, "click", move |_event| {
            dispatch(&next_weak, |state| state.core.on_gallery_next());
        })?);
    }

    // Window.
    {
        let weak = weak.clone();
        listeners.push(Listener::new(&dom.window, "resize", move |_event| {
            dispatch(&weak, |state| {
                let window_width = state.dom.window_width();
                let gallery_width = state.dom.gallery_viewport_width();
                state.core.on_resize(window_width, gallery_width)
            });
        })?);
    }
    {
        let weak = weak.clone();
        listeners.push(Listener::new(&dom.window, "scroll", move |_event| {
            dispatch(&weak, |state| if state.core.on_scroll() { state.request_frame() } else { Vec::new() });
        })?);
    }
    {
        let weak = weak.clone();
        listeners.push(Listener::new(&dom.window, "load", move |_event| {
            dispatch(&weak, |state| state.core.on_load());
        })?);
    }

    // Smooth scrolling for in-page anchors.
    for anchor in query_all(&dom.document, ANCHOR_SELECTOR)? {
        let weak = weak.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        listeners.push(Listener::new(&anchor, "click", move |event: Event| {
            event.prevent_default();
            dispatch(&weak, |state| {
                let top = anchor_target_id(&href).and_then(|id| state.dom.section_top(id));
                let navbar_height = state.dom.navbar_height();
                state.core.on_anchor_click(top, navbar_height)
            });
        })?);
    }

    // Contact items.
    for item in query_all(&dom.document, CONTACT_ITEM_SELECTOR)? {
        let (classes, _) = contact_parts(&item);
        if ContactKind::from_icon_classes(&classes).is_clickable() {
            if let Some(item) = item.dyn_ref::<HtmlElement>() {
                item.style().set_property("cursor", "pointer")?;
            }
        }
        let weak = weak.clone();
        let target = item.clone();
        listeners.push(Listener::new(&item, "click", move |_event| {
            let (classes, text) = contact_parts(&target);
            dispatch(&weak, |state| state.core.on_contact_click(&classes, &text));
        })?);
    }

    // Service card hover shadows.
    for card in query_all(&dom.document, SERVICE_CARD_SELECTOR)? {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = card.clone();
            listeners.push(Listener::new(&card, event, move |_event| {
                if let Some(card) = target.dyn_ref::<HtmlElement>() {
                    if let Err(err) = card.style().set_property("box-shadow", card_shadow(hovered)) {
                        log::warn!("card shadow update failed: {err:?}");
                    }
                }
            })?);
        }
    }

    log::debug!("wired {} listeners", listeners.len());
    Ok(listeners)
}

fn observe_animated(state: &Shared, weak: &Weak<RefCell<HostState>>) -> Result<(), HostError> {
    let targets = state.borrow().dom.animated.clone();
    if targets.is_empty() {
        return Ok(());
    }
    let weak = weak.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        dispatch(&weak, |state| {
            let mut actions = Vec::new();
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = state.dom.animated_index(&target) else {
                    continue;
                };
                let revealed = state.core.on_intersection(index, entry.is_intersecting());
                if !revealed.is_empty() {
                    observer.unobserve(&target);
                }
                actions.extend(revealed);
            }
            if state.core.reveal().is_complete() {
                observer.disconnect();
            }
            actions
        });
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in &targets {
        observer.observe(target);
    }
    state.borrow_mut().observer = Some((observer, callback));
    Ok(())
}

/// Icon classes and trimmed text of a contact item; empty when absent.
fn contact_parts(item: &Element) -> (String, String) {
    let classes = match item.query_selector(CONTACT_ICON_SELECTOR) {
        Ok(icon) => icon.map(|icon| icon.class_name()).unwrap_or_default(),
        Err(err) => {
            log::warn!("contact icon lookup failed: {err:?}");
            String::new()
        }
    };
    let text = match item.query_selector(CONTACT_TEXT_SELECTOR) {
        Ok(p) => p.and_then(|p| p.text_content()).unwrap_or_default(),
        Err(err) => {
            log::warn!("contact text lookup failed: {err:?}");
            String::new()
        }
    };
    (classes, text.trim().to_owned())
}

fn preload_images(sources: &[String]) {
    for src in sources {
        match HtmlImageElement::new() {
            Ok(img) => img.set_src(src),
            Err(err) => log::warn!("image preload failed for {src}: {err:?}"),
        }
    }
    if !sources.is_empty() {
        log::debug!("preloading {} images", sources.len());
    }
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) else {
        return SiteConfig::default();
    };
    let raw = script.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {err}");
            SiteConfig::default()
        }
    }
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

fn boot_global() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document, site not started");
        return;
    };
    match Site::boot(load_config(&document)) {
        Ok(site) => SITE.with(|slot| {
            if let Some(previous) = slot.borrow_mut().replace(site) {
                previous.teardown();
            }
        }),
        Err(err) => log::error!("site failed to start: {err}"),
    }
}

fn init_logging() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("logger already installed: {err}");
    }
}

/// WASM entry point: boot on DOM-ready, or immediately if the DOM is already parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    if document.ready_state() == DocumentReadyState::Loading {
        let callback = Closure::once_into_js(boot_global);
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                callback.unchecked_ref(),
                &options,
            )
            .map_err(HostError::from)?;
    } else {
        boot_global();
    }
    Ok(())
}

/// Scroll so the section with `section_id` sits just below the navbar.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    SITE.with(|slot| {
        if let Some(site) = slot.borrow().as_ref() {
            site.scroll_to_section(section_id);
        }
    });
}

/// Stop all timers and detach every listener, e.g. when a router unmounts the page.
#[wasm_bindgen]
pub fn teardown() {
    let site = SITE.with(|slot| slot.borrow_mut().take());
    if let Some(site) = site {
        site.teardown();
    }
}
