#![allow(clippy::float_cmp)]

use super::*;
use crate::error::PageError;
use crate::theme::Theme;

#[test]
fn absent_attr_yields_defaults() {
    let cfg = PageConfig::from_attr(None).unwrap();
    assert_eq!(cfg, PageConfig::default());
    assert_eq!(cfg.scroll_threshold_px, 100.0);
    assert_eq!(cfg.anchor_offset_px, 20.0);
    assert_eq!(cfg.cycle_interval_ms, 10_000);
    assert_eq!(cfg.transition_ms, 800);
    assert_eq!(cfg.default_theme, Theme::DarkPurple);
    assert!(cfg.auto_cycle);
    assert_eq!(cfg.storage_key, "portfolio-theme");
}

#[test]
fn blank_attr_yields_defaults() {
    assert_eq!(PageConfig::from_attr(Some("  ")).unwrap(), PageConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = PageConfig::from_attr(Some(r#"{"cycle_interval_ms": 5000, "auto_cycle": false}"#)).unwrap();
    assert_eq!(cfg.cycle_interval_ms, 5000);
    assert!(!cfg.auto_cycle);
    assert_eq!(cfg.transition_ms, 800);
    assert_eq!(cfg.storage_key, "portfolio-theme");
}

#[test]
fn default_theme_parses_identifier() {
    let cfg = PageConfig::from_attr(Some(r#"{"default_theme": "ocean"}"#)).unwrap();
    assert_eq!(cfg.default_theme, Theme::Ocean);
}

#[test]
fn unknown_default_theme_is_config_error() {
    let err = PageConfig::from_attr(Some(r#"{"default_theme": "neon"}"#)).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn malformed_json_is_config_error() {
    let err = PageConfig::from_attr(Some("{not json")).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
    assert!(err.to_string().starts_with("invalid page config"));
}

#[test]
fn transition_css_uses_seconds() {
    assert_eq!(PageConfig::default().transition_css(), "all 0.8s ease-in-out");
    let cfg = PageConfig { transition_ms: 1500, ..PageConfig::default() };
    assert_eq!(cfg.transition_css(), "all 1.5s ease-in-out");
}
