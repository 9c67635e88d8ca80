//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for a generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where rendered charts are written.
    pub output: OutputConfig,
    /// Synthetic data parameters.
    pub data: DataConfig,
    /// Shared chart styling.
    pub style: StyleConfig,
}

/// Output location configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the PNG files, created if missing.
    pub dir: PathBuf,
}

/// Synthetic data configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Seed shared by the sampled charts.
    pub seed: u64,
    /// Number of points drawn per synthetic sample set.
    pub sample_size: usize,
    /// Bin count for the risk score histogram.
    pub histogram_bins: usize,
}

/// Styling applied to every chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Pixels per inch of figure size.
    pub dpi: u32,
    /// Font family for all text.
    pub font_family: String,
    /// Multiplier applied to the base font sizes.
    pub font_scale: f64,
    /// Base title font size in pixels, before scaling.
    pub title_font_size: u32,
    /// Base axis description font size in pixels, before scaling.
    pub label_font_size: u32,
    /// Base tick and annotation font size in pixels, before scaling.
    pub tick_font_size: u32,
    /// Canvas background.
    pub background_color: String,
    /// Grid line colour.
    pub grid_color: String,
    /// Whether grid lines are drawn.
    pub show_grid: bool,
    /// Colour for the non-fraud / legitimate class.
    pub legit_color: String,
    /// Colour for the fraud class.
    pub fraud_color: String,
}

impl StyleConfig {
    /// Converts a figure size in inches to canvas pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn figure_pixels(&self, (width_in, height_in): (f64, f64)) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        ((width_in * dpi).round() as u32, (height_in * dpi).round() as u32)
    }

    /// Scaled title font size.
    #[must_use]
    pub fn title_size(&self) -> u32 {
        self.scaled(self.title_font_size)
    }

    /// Scaled axis description font size.
    #[must_use]
    pub fn label_size(&self) -> u32 {
        self.scaled(self.label_font_size)
    }

    /// Scaled tick and annotation font size.
    #[must_use]
    pub fn tick_size(&self) -> u32 {
        self.scaled(self.tick_font_size)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn scaled(&self, base: u32) -> u32 {
        (f64::from(base) * self.font_scale).round().max(1.0) as u32
    }
}
