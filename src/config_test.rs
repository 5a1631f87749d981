#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.max_petals, 5);
    assert_eq!(config.gallery_item_width_px, 320.0);
    assert_eq!(config.scroll_margin_px, 20.0);
}

#[test]
fn overrides_are_applied() {
    let config = SiteConfig::from_json(
        r#"{ "max_petals": 8, "gallery_auto_advance_ms": 6000, "preload_images": ["/img/a.jpg"] }"#,
    )
    .unwrap();
    assert_eq!(config.max_petals, 8);
    assert_eq!(config.gallery_auto_advance_ms, 6000.0);
    assert_eq!(config.preload_images, vec!["/img/a.jpg".to_owned()]);
    assert_eq!(config.petal_interval_ms, PETAL_INTERVAL_MS);
}

#[test]
fn instagram_base_url_trailing_slash_is_trimmed() {
    let config = SiteConfig::from_json(r#"{ "instagram_base_url": "https://example.test/" }"#).unwrap();
    assert_eq!(config.instagram_base_url, "https://example.test");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SiteConfig::from_json("{ max_petals: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_max_petals_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "max_petals": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "max_petals", .. }));
}

#[test]
fn zero_interval_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "petal_interval_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "petal_interval_ms", .. }));
}

#[test]
fn negative_margin_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "scroll_margin_px": -1 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "scroll_margin_px", .. }));
    assert_eq!(err.to_string(), "invalid config: scroll_margin_px must not be negative");
}

#[test]
fn zero_delay_is_allowed() {
    let config = SiteConfig::from_json(r#"{ "first_petal_delay_ms": 0 }"#).unwrap();
    assert_eq!(config.first_petal_delay_ms, 0.0);
}
