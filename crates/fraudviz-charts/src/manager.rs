//! Chart manager for generating every dashboard screenshot in one run.

use crate::sink::OutputSink;
use crate::traits::ChartRenderer;
use crate::{
    AmountDistributionChart, ClassDistributionChart, ConfusionMatrixChart, FraudByHourChart,
    RiskScoreChart,
};
use fraudviz_common::Result;
use fraudviz_config::{Config, DataConfig};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Printed before the first chart is rendered.
pub const START_BANNER: &str = "🎨 Generating visualizations...";

/// Printed once every chart has been saved.
pub const COMPLETION_BANNER: &str = "✨ All visualizations generated successfully!";

/// The dashboard charts in generation order.
pub fn default_charts(data: &DataConfig) -> Vec<Box<dyn ChartRenderer>> {
    vec![
        Box::new(ClassDistributionChart::default()),
        Box::new(AmountDistributionChart::from_config(data)),
        Box::new(FraudByHourChart::default()),
        Box::new(RiskScoreChart::from_config(data)),
        Box::new(ConfusionMatrixChart::default()),
    ]
}

/// Runs a fixed list of charts against one output sink.
pub struct ChartManager {
    config: Config,
    sink: OutputSink,
    charts: Vec<Box<dyn ChartRenderer>>,
}

impl ChartManager {
    /// Creates a manager with the default chart set.
    pub fn new(config: Config) -> Self {
        let charts = default_charts(&config.data);
        Self::with_charts(config, charts)
    }

    /// Creates a manager over an explicit chart list.
    pub fn with_charts(config: Config, charts: Vec<Box<dyn ChartRenderer>>) -> Self {
        let sink = OutputSink::new(config.output.dir.clone());
        Self {
            config,
            sink,
            charts,
        }
    }

    /// Charts in the order they are generated.
    pub fn charts(&self) -> &[Box<dyn ChartRenderer>] {
        &self.charts
    }

    /// Sink the charts are written through.
    pub const fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Generates every chart, stopping at the first failure.
    ///
    /// Files written before a failure are left in place.
    pub fn generate_all<W: Write>(&self, console: &mut W) -> Result<Vec<PathBuf>> {
        writeln!(console, "{START_BANNER}")?;
        self.sink.ensure_output_dir()?;
        info!(
            dir = %self.sink.dir().display(),
            charts = self.charts.len(),
            "generating charts"
        );

        let mut written = Vec::with_capacity(self.charts.len());
        for chart in &self.charts {
            debug!(chart = chart.name(), "{}", chart.description());
            let path = self.sink.save(chart.as_ref(), &self.config.style, console)?;
            written.push(path);
        }

        writeln!(console, "{COMPLETION_BANNER}")?;
        info!(count = written.len(), "all charts generated");
        Ok(written)
    }
}
