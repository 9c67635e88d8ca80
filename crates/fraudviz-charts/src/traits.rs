//! Chart renderer trait shared by every dashboard chart.

use fraudviz_common::Result;
use fraudviz_config::StyleConfig;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Bitmap drawing area a chart renders onto.
pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// A chart that knows its output name and how to draw itself.
pub trait ChartRenderer {
    /// Stable name, also the output file stem.
    fn name(&self) -> &'static str;

    /// Human readable description.
    fn description(&self) -> &'static str;

    /// Output file name inside the output directory.
    fn file_name(&self) -> String {
        format!("{}.png", self.name())
    }

    /// Figure size in inches, converted to pixels with the configured DPI.
    fn figure_size(&self) -> (f64, f64) {
        (10.0, 6.0)
    }

    /// Draws the chart onto an already cleared canvas.
    fn render(&self, root: &Canvas<'_>, style: &StyleConfig) -> Result<()>;
}
