//! Runtime validation of configuration values.

use crate::schema::{Config, DataConfig, StyleConfig};
use fraudviz_common::{FraudVizError, Result};
use tracing::debug;

/// Smallest sample set a density estimate can be drawn from.
pub const MIN_SAMPLE_SIZE: usize = 2;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if config.output.dir.as_os_str().is_empty() {
            return Err(FraudVizError::validation_field(
                "output directory must not be empty",
                "output.dir",
            ));
        }
        Self::validate_data(&config.data)?;
        Self::validate_style(&config.style)?;
        debug!(dir = %config.output.dir.display(), "configuration validated");
        Ok(())
    }

    fn validate_data(data: &DataConfig) -> Result<()> {
        if data.sample_size < MIN_SAMPLE_SIZE {
            return Err(FraudVizError::validation_field(
                format!("sample size must be at least {MIN_SAMPLE_SIZE}"),
                "data.sample_size",
            ));
        }
        if data.histogram_bins == 0 {
            return Err(FraudVizError::validation_field(
                "histogram needs at least one bin",
                "data.histogram_bins",
            ));
        }
        Ok(())
    }

    fn validate_style(style: &StyleConfig) -> Result<()> {
        if style.dpi == 0 {
            return Err(FraudVizError::validation_field("DPI must be positive", "style.dpi"));
        }
        if !(style.font_scale.is_finite() && style.font_scale > 0.0) {
            return Err(FraudVizError::validation_field(
                "font scale must be a positive number",
                "style.font_scale",
            ));
        }
        for (field, size) in [
            ("style.title_font_size", style.title_font_size),
            ("style.label_font_size", style.label_font_size),
            ("style.tick_font_size", style.tick_font_size),
        ] {
            if size == 0 {
                return Err(FraudVizError::validation_field("font size must be positive", field));
            }
        }
        if style.font_family.trim().is_empty() {
            return Err(FraudVizError::validation_field(
                "font family must not be empty",
                "style.font_family",
            ));
        }
        for (field, color) in [
            ("style.background_color", &style.background_color),
            ("style.grid_color", &style.grid_color),
            ("style.legit_color", &style.legit_color),
            ("style.fraud_color", &style.fraud_color),
        ] {
            if !is_hex_color(color) {
                return Err(FraudVizError::validation_field(
                    format!("`{color}` is not a #rrggbb colour"),
                    field,
                ));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Validates this configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}

/// Returns true for `#rrggbb` hex colour strings.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
