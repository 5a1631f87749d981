//! Decorative interactivity for the parlour's static landing page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The widget
//! logic lives in a DOM-free core ([`site::SiteCore`]) driven by a virtual
//! timer queue, so every behaviour is testable natively. With the `hydrate`
//! feature the `host` module binds that core to the real page through
//! `web-sys` and `gloo-timers`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | `SiteCore`, the `Action`s it emits and the timer `Task`s it routes |
//! | [`timer`] | Deterministic virtual-time timer queue |
//! | [`petals`] | Bounded falling-petal spawner |
//! | [`particles`] | Floating hero particles |
//! | [`gallery`] | Auto-advancing gallery track |
//! | [`nav_menu`] | Mobile navigation toggle |
//! | [`scroll`] | Smooth anchor scrolling, navbar scroll effect, scroll throttle |
//! | [`contact`] | Click-to-call and Instagram contact items |
//! | [`reveal`] | Scroll-reveal animations |
//! | [`effects`] | Hero intro and service-card hover shadows |
//! | [`config`] | `SiteConfig`, loaded from inline JSON |
//! | [`error`] | Config and host error types |
//! | [`consts`] | DOM selectors, timings and style strings |
//! | `host` | Browser bindings (`hydrate` feature only) |

pub mod config;
pub mod consts;
pub mod contact;
pub mod effects;
pub mod error;
pub mod gallery;
pub mod nav_menu;
pub mod particles;
pub mod petals;
pub mod reveal;
pub mod scroll;
pub mod site;
pub mod timer;

#[cfg(feature = "hydrate")]
pub mod host;
