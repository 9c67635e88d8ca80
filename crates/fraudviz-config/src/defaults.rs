//! Literal default values for a generator run.

use crate::schema::*;
use std::path::PathBuf;

/// Directory the charts are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "dashboards/screenshots";

/// Seed used by the amount and risk score generators.
pub const DEFAULT_SEED: u64 = 42;

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            data: DataConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl Config {
    /// Default configuration writing into `dir` instead of the default directory.
    #[must_use]
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output: OutputConfig { dir: dir.into() },
            ..Self::default()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            sample_size: 1000,
            histogram_bins: 30,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            dpi: 100,
            font_family: "sans-serif".to_string(),
            font_scale: 1.2,
            title_font_size: 20,
            label_font_size: 15,
            tick_font_size: 12,
            background_color: "#ffffff".to_string(),
            grid_color: "#dddddd".to_string(),
            show_grid: true,
            legit_color: "#2ecc71".to_string(),
            fraud_color: "#e74c3c".to_string(),
        }
    }
}
