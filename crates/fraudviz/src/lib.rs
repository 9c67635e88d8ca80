//! # fraudviz
//!
//! Generates the illustrative fraud detection dashboard screenshots.
//!
//! This is the binary crate's library half: it validates the run
//! configuration and drives the [`ChartManager`] over it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;

pub use error::*;

use fraudviz_charts::ChartManager;
use fraudviz_config::Config;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Validates `config` and generates every chart, writing progress lines to
/// `console`. Returns the paths written, in generation order.
pub fn run<W: Write>(config: Config, console: &mut W) -> AppResult<Vec<PathBuf>> {
    config.validate()?;
    debug!(config = %serde_json::to_string(&config)?, "resolved configuration");

    let manager = ChartManager::new(config);
    let paths = manager.generate_all(console)?;
    console.flush()?;
    Ok(paths)
}
