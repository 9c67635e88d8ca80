//! Stacked histogram of model risk scores split by true label.

use crate::stats::{histogram, HistogramBins};
use crate::style::{draw_title, font, style_mesh, ChartPalette};
use crate::synthetic::{risk_score_samples, RiskScoreSamples};
use crate::traits::{Canvas, ChartRenderer};
use fraudviz_common::Result;
use fraudviz_config::{DataConfig, StyleConfig};
use plotters::prelude::*;

/// Stacked histogram of legitimate and fraudulent risk scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskScoreChart {
    /// RNG seed for the samples.
    pub seed: u64,
    /// Samples drawn per label.
    pub sample_size: usize,
    /// Histogram bin count.
    pub bins: usize,
}

impl RiskScoreChart {
    /// Creates a chart from explicit parameters.
    pub const fn new(seed: u64, sample_size: usize, bins: usize) -> Self {
        Self {
            seed,
            sample_size,
            bins,
        }
    }

    /// Creates a chart from the data section of the run configuration.
    pub const fn from_config(data: &DataConfig) -> Self {
        Self::new(data.seed, data.sample_size, data.histogram_bins)
    }

    /// The synthetic scores this chart plots.
    pub fn samples(&self) -> Result<RiskScoreSamples> {
        risk_score_samples(self.seed, self.sample_size)
    }

    /// Bin edges and per-label counts; legitimate first.
    pub fn binned(&self) -> Result<HistogramBins> {
        let samples = self.samples()?;
        histogram(
            &[samples.legitimate.as_slice(), samples.fraudulent.as_slice()],
            self.bins,
        )
    }
}

impl ChartRenderer for RiskScoreChart {
    fn name(&self) -> &'static str {
        "risk_score_distribution"
    }

    fn description(&self) -> &'static str {
        "Risk score model distribution"
    }

    fn render(&self, root: &Canvas<'_>, style: &StyleConfig) -> Result<()> {
        let bins = self.binned()?;
        let palette = ChartPalette::from_style(style);
        let totals = bins.stacked_totals();
        let y_max = f64::from(totals.iter().copied().max().unwrap_or(0).max(1)) * 1.05;
        let x_range = bins.edges[0]..bins.edges[bins.bin_count()];

        let body = draw_title(root, style, "Risk Score Model Distribution")?;
        let mut chart = ChartBuilder::on(&body)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, 0f64..y_max)?;

        let x_formatter = |x: &f64| format!("{x:.0}");
        let y_formatter = |y: &f64| format!("{y:.0}");
        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Risk Score (0-100)")
            .y_desc("Count")
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter);
        style_mesh(&mut mesh, style);
        mesh.draw()?;

        // Legend heading, no marker
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
            .label("True Label");

        let mut baseline = vec![0u32; bins.bin_count()];
        for (label, counts, color) in [
            ("Legitimate", &bins.counts[0], palette.legit),
            ("Fraudulent", &bins.counts[1], palette.fraud),
        ] {
            let fill = color.filled();
            let bars: Vec<Rectangle<(f64, f64)>> = counts
                .iter()
                .enumerate()
                .filter(|&(_, &count)| count > 0)
                .map(|(bin, &count)| {
                    let bottom = f64::from(baseline[bin]);
                    Rectangle::new(
                        [
                            (bins.edges[bin], bottom),
                            (bins.edges[bin + 1], bottom + f64::from(count)),
                        ],
                        fill,
                    )
                })
                .collect();
            chart
                .draw_series(bars)?
                .label(label)
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 20, y + 6)], fill));

            for (total, count) in baseline.iter_mut().zip(counts) {
                *total += count;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperMiddle)
            .label_font(font(style, style.tick_size()))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }
}
