//! Site configuration.
//!
//! Every field has a default matching the stock page, so an empty JSON object
//! (or no config at all) yields the standard behaviour. The browser host reads
//! the JSON from an inline `<script type="application/json" id="parlour-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_INSTAGRAM_BASE_URL, FIRST_PETAL_DELAY_MS, GALLERY_AUTO_ADVANCE_MS, GALLERY_ITEM_WIDTH_PX,
    HERO_INTRO_DELAY_MS, MAX_PETALS, NAVBAR_SCROLL_THRESHOLD_PX, PARTICLE_INTERVAL_MS, PETAL_INTERVAL_MS,
    PETAL_LIFETIME_MS, SCROLL_MARGIN_PX,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub max_petals: usize,
    pub first_petal_delay_ms: f64,
    pub petal_interval_ms: f64,
    pub petal_lifetime_ms: f64,
    pub particle_interval_ms: f64,
    pub gallery_item_width_px: f64,
    pub gallery_auto_advance_ms: f64,
    pub navbar_scroll_threshold_px: f64,
    pub scroll_margin_px: f64,
    pub hero_intro_delay_ms: f64,
    pub instagram_base_url: String,
    pub preload_images: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            max_petals: MAX_PETALS,
            first_petal_delay_ms: FIRST_PETAL_DELAY_MS,
            petal_interval_ms: PETAL_INTERVAL_MS,
            petal_lifetime_ms: PETAL_LIFETIME_MS,
            particle_interval_ms: PARTICLE_INTERVAL_MS,
            gallery_item_width_px: GALLERY_ITEM_WIDTH_PX,
            gallery_auto_advance_ms: GALLERY_AUTO_ADVANCE_MS,
            navbar_scroll_threshold_px: NAVBAR_SCROLL_THRESHOLD_PX,
            scroll_margin_px: SCROLL_MARGIN_PX,
            hero_intro_delay_ms: HERO_INTRO_DELAY_MS,
            instagram_base_url: DEFAULT_INSTAGRAM_BASE_URL.to_owned(),
            preload_images: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config document.
    ///
    /// Missing fields take their defaults. A trailing `/` on
    /// `instagram_base_url` is dropped.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.instagram_base_url = config.instagram_base_url.trim_end_matches('/').to_owned();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_petals == 0 {
            return Err(invalid("max_petals", "must be at least 1"));
        }
        let periods = [
            ("petal_interval_ms", self.petal_interval_ms),
            ("petal_lifetime_ms", self.petal_lifetime_ms),
            ("particle_interval_ms", self.particle_interval_ms),
            ("gallery_auto_advance_ms", self.gallery_auto_advance_ms),
        ];
        for (field, value) in periods {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, "must be a positive number of milliseconds"));
            }
        }
        let delays = [
            ("first_petal_delay_ms", self.first_petal_delay_ms),
            ("hero_intro_delay_ms", self.hero_intro_delay_ms),
        ];
        for (field, value) in delays {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, "must not be negative"));
            }
        }
        if !(self.gallery_item_width_px.is_finite() && self.gallery_item_width_px > 0.0) {
            return Err(invalid("gallery_item_width_px", "must be positive"));
        }
        if !(self.navbar_scroll_threshold_px.is_finite() && self.navbar_scroll_threshold_px >= 0.0) {
            return Err(invalid("navbar_scroll_threshold_px", "must not be negative"));
        }
        if !(self.scroll_margin_px.is_finite() && self.scroll_margin_px >= 0.0) {
            return Err(invalid("scroll_margin_px", "must not be negative"));
        }
        if self.instagram_base_url.is_empty() {
            return Err(invalid("instagram_base_url", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
