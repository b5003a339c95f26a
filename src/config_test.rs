#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_is_vh_one_percent() {
    let cfg = PublisherConfig::default();
    assert_eq!(cfg.property, "--vh");
    assert_eq!(cfg.fraction, 0.01);
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_json_empty_object_uses_defaults() {
    let cfg = PublisherConfig::from_json("{}").unwrap();
    assert_eq!(cfg, PublisherConfig::default());
}

#[test]
fn from_json_overrides_property_only() {
    let cfg = PublisherConfig::from_json(r#"{"property": "--app-vh"}"#).unwrap();
    assert_eq!(cfg.property, "--app-vh");
    assert_eq!(cfg.fraction, 0.01);
}

#[test]
fn from_json_overrides_both_fields() {
    let cfg = PublisherConfig::from_json(r#"{"property": "--half", "fraction": 0.5}"#).unwrap();
    assert_eq!(cfg, PublisherConfig { property: "--half".into(), fraction: 0.5 });
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = PublisherConfig::from_json(r#"{"propery": "--vh"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = PublisherConfig::from_json("{").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_validates_after_parsing() {
    let err = PublisherConfig::from_json(r#"{"property": "vh"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidProperty(p) if p == "vh"));
}

#[test]
fn validate_rejects_bare_prefix() {
    let cfg = PublisherConfig { property: "--".into(), ..PublisherConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::InvalidProperty(_))));
}

#[test]
fn validate_rejects_whitespace_in_name() {
    let cfg = PublisherConfig { property: "--my vh".into(), ..PublisherConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::InvalidProperty(_))));
}

#[test]
fn validate_rejects_zero_and_negative_fraction() {
    for fraction in [0.0, -0.01] {
        let cfg = PublisherConfig { fraction, ..PublisherConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidFraction(_))), "fraction {fraction}");
    }
}

#[test]
fn validate_rejects_non_finite_fraction() {
    let cfg = PublisherConfig { fraction: f64::NAN, ..PublisherConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::InvalidFraction(_))));
}

#[test]
fn config_error_messages_name_the_problem() {
    let err = ConfigError::InvalidProperty("vh".into());
    assert_eq!(err.to_string(), "invalid custom property name: \"vh\"");
    let err = ConfigError::InvalidFraction(-1.0);
    assert_eq!(err.to_string(), "fraction must be a positive finite number, got -1");
}
