//! Integration tests for fraudviz-config crate.

use fraudviz_common::test_utils::init_test_logging;
use fraudviz_config::{Config, ConfigValidator};
use proptest::prelude::*;
use std::path::PathBuf;

#[test]
fn test_default_config_validation() {
    init_test_logging();

    let mut config = Config::default();
    assert!(ConfigValidator::validate(&config).is_ok());

    config.output.dir = PathBuf::new();
    let err = config.validate().unwrap_err();
    assert_eq!(err.field(), Some("output.dir"));
}

#[test]
fn test_data_validation() {
    let mut config = Config::default();
    config.data.sample_size = 0;
    assert_eq!(config.validate().unwrap_err().field(), Some("data.sample_size"));

    let mut config = Config::default();
    config.data.histogram_bins = 0;
    assert_eq!(config.validate().unwrap_err().field(), Some("data.histogram_bins"));
}

#[test]
fn test_font_validation() {
    let mut config = Config::default();
    config.style.font_scale = f64::NAN;
    assert_eq!(config.validate().unwrap_err().field(), Some("style.font_scale"));

    let mut config = Config::default();
    config.style.tick_font_size = 0;
    assert_eq!(config.validate().unwrap_err().field(), Some("style.tick_font_size"));

    let mut config = Config::default();
    config.style.font_family = "  ".to_string();
    assert_eq!(config.validate().unwrap_err().field(), Some("style.font_family"));
}

#[test]
fn test_config_serializes_to_json() {
    let config = Config::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("dashboards/screenshots"));

    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

proptest! {
    #[test]
    fn figure_pixels_scale_with_dpi(dpi in 1u32..400, width in 1u32..20, height in 1u32..20) {
        let mut config = Config::default();
        config.style.dpi = dpi;
        let (w, h) = config.style.figure_pixels((f64::from(width), f64::from(height)));
        prop_assert_eq!(w, width * dpi);
        prop_assert_eq!(h, height * dpi);
    }
}
