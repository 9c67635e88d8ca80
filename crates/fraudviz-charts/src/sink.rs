//! Output directory handling and chart persistence.

use crate::style::ChartPalette;
use crate::traits::ChartRenderer;
use fraudviz_common::{FraudVizError, Result};
use fraudviz_config::StyleConfig;
use plotters::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes finished charts into a single output directory.
#[derive(Debug, Clone)]
pub struct OutputSink {
    dir: PathBuf,
}

impl OutputSink {
    /// Creates a sink rooted at `dir`. Nothing touches the filesystem yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a file with `file_name` is written to.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Creates the output directory and its parents; succeeds if it already exists.
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        debug!(dir = %self.dir.display(), "output directory ready");
        Ok(())
    }

    /// Renders `chart` to `<dir>/<file_name>`, finalizes the image, and
    /// reports completion on `console`.
    pub fn save<W>(
        &self,
        chart: &dyn ChartRenderer,
        style: &StyleConfig,
        console: &mut W,
    ) -> Result<PathBuf>
    where
        W: Write + ?Sized,
    {
        let file_name = chart.file_name();
        let path = self.path_for(&file_name);
        let (width, height) = style.figure_pixels(chart.figure_size());
        if width == 0 || height == 0 {
            return Err(FraudVizError::chart(format!(
                "{} has an empty figure ({width}x{height})",
                chart.name()
            )));
        }

        {
            let root = BitMapBackend::new(&path, (width, height)).into_drawing_area();
            root.fill(&ChartPalette::from_style(style).background)?;
            chart.render(&root, style)?;
            root.present()?;
        }

        info!(chart = chart.name(), path = %path.display(), width, height, "chart saved");
        writeln!(console, "✅ {file_name} generated")?;
        Ok(path)
    }
}
