//! Shared constants for the parlour crate.

// ── DOM contract ────────────────────────────────────────────────

pub const PETAL_CONTAINER_ID: &str = "falling-petals";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const CONFIG_SCRIPT_ID: &str = "parlour-config";
pub const PARTICLE_STYLES_ID: &str = "particle-styles";

pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const HERO_SELECTOR: &str = ".hero";
pub const GALLERY_TRACK_SELECTOR: &str = ".gallery-track";
pub const GALLERY_PREV_SELECTOR: &str = ".gallery-btn-prev";
pub const GALLERY_NEXT_SELECTOR: &str = ".gallery-btn-next";
pub const GALLERY_ITEM_SELECTOR: &str = ".gallery-item";
pub const SERVICE_CARD_SELECTOR: &str = ".service-card";
pub const CONTACT_ITEM_SELECTOR: &str = ".contact-item";
pub const CONTACT_ICON_SELECTOR: &str = ".contact-icon i";
pub const CONTACT_TEXT_SELECTOR: &str = "p";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const ANIMATED_SELECTOR: &str = "[class*=\"animate-\"]";

pub const ACTIVE_CLASS: &str = "active";
pub const REVEALED_CLASS: &str = "animate";
pub const PETAL_CLASS: &str = "rose-petal";
pub const PARTICLE_CLASS: &str = "particle";
pub const PHONE_ICON_CLASS: &str = "fa-phone";
pub const INSTAGRAM_ICON_CLASS: &str = "fa-instagram";

// ── Timing (milliseconds) ───────────────────────────────────────

pub const FIRST_PETAL_DELAY_MS: f64 = 1_000.0;
pub const PETAL_INTERVAL_MS: f64 = 2_000.0;
pub const PETAL_LIFETIME_MS: f64 = 3_000.0;
pub const PARTICLE_INTERVAL_MS: f64 = 2_000.0;
pub const GALLERY_AUTO_ADVANCE_MS: f64 = 4_000.0;
pub const HERO_INTRO_DELAY_MS: f64 = 100.0;

// ── Geometry ────────────────────────────────────────────────────

pub const MAX_PETALS: usize = 5;

/// Rendered gallery item width (300px) plus the track gap (20px).
pub const GALLERY_ITEM_WIDTH_PX: f64 = 320.0;

/// Extra space kept between the navbar and a scrolled-to section.
pub const SCROLL_MARGIN_PX: f64 = 20.0;

pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 100.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Inline styles ───────────────────────────────────────────────

pub const NAVBAR_BG_RESTING: &str = "rgba(255, 255, 255, 0.95)";
pub const NAVBAR_BG_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
pub const NAVBAR_SHADOW_RESTING: &str = "0 2px 10px rgba(255, 105, 180, 0.05)";
pub const NAVBAR_SHADOW_SCROLLED: &str = "0 4px 20px rgba(255, 105, 180, 0.1)";

pub const CARD_SHADOW_RESTING: &str = "0 8px 30px rgba(255, 105, 180, 0.1)";
pub const CARD_SHADOW_HOVERED: &str = "0 15px 40px rgba(255, 105, 180, 0.3)";

pub const DEFAULT_INSTAGRAM_BASE_URL: &str = "https://instagram.com";
