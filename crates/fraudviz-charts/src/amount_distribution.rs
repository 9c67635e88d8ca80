//! Overlapping transaction amount densities per class.

use crate::stats::{gaussian_kde, DensityCurve, KDE_CUT, KDE_GRID_SIZE};
use crate::style::{draw_title, font, style_mesh, ChartPalette};
use crate::synthetic::{amount_samples, AmountSamples};
use crate::traits::{Canvas, ChartRenderer};
use fraudviz_common::Result;
use fraudviz_config::{DataConfig, StyleConfig};
use plotters::prelude::*;
use tracing::debug;

/// Filled KDE curves of synthetic non-fraud and fraud amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountDistributionChart {
    /// RNG seed for the samples.
    pub seed: u64,
    /// Samples drawn per class.
    pub sample_size: usize,
}

impl AmountDistributionChart {
    /// Creates a chart drawing `sample_size` amounts per class from `seed`.
    pub const fn new(seed: u64, sample_size: usize) -> Self {
        Self { seed, sample_size }
    }

    /// Creates a chart from the data section of the run configuration.
    pub const fn from_config(data: &DataConfig) -> Self {
        Self::new(data.seed, data.sample_size)
    }

    /// The synthetic amounts this chart plots.
    pub fn samples(&self) -> Result<AmountSamples> {
        amount_samples(self.seed, self.sample_size)
    }

    /// Density curves for non-fraud and fraud amounts.
    pub fn densities(&self) -> Result<(DensityCurve, DensityCurve)> {
        let samples = self.samples()?;
        let non_fraud = gaussian_kde(&samples.non_fraud, KDE_GRID_SIZE, KDE_CUT)?;
        let fraud = gaussian_kde(&samples.fraud, KDE_GRID_SIZE, KDE_CUT)?;
        debug!(
            non_fraud_bandwidth = non_fraud.bandwidth,
            fraud_bandwidth = fraud.bandwidth,
            "estimated amount densities"
        );
        Ok((non_fraud, fraud))
    }
}

impl ChartRenderer for AmountDistributionChart {
    fn name(&self) -> &'static str {
        "amount_distribution"
    }

    fn description(&self) -> &'static str {
        "Transaction amount distribution by class"
    }

    fn render(&self, root: &Canvas<'_>, style: &StyleConfig) -> Result<()> {
        let (non_fraud, fraud) = self.densities()?;
        let palette = ChartPalette::from_style(style);

        let (nf_lo, nf_hi) = non_fraud.x_range();
        let (f_lo, f_hi) = fraud.x_range();
        let x_range = nf_lo.min(f_lo)..nf_hi.max(f_hi);
        let y_max = non_fraud.peak().max(fraud.peak()) * 1.05;

        let body = draw_title(root, style, "Transaction Amount Distribution by Class")?;
        let mut chart = ChartBuilder::on(&body)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(x_range, 0f64..y_max)?;

        let y_formatter = |y: &f64| format!("{y:.4}");
        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Transaction Amount ($)")
            .y_desc("Density")
            .y_label_formatter(&y_formatter);
        style_mesh(&mut mesh, style);
        mesh.draw()?;

        for (label, curve, color) in [
            ("Non-Fraud", &non_fraud, palette.legit),
            ("Fraud", &fraud, palette.fraud),
        ] {
            let fill = color.mix(0.3).filled();
            chart
                .draw_series(
                    AreaSeries::new(curve.points.iter().copied(), 0.0, fill)
                        .border_style(color.stroke_width(2)),
                )?
                .label(label)
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 20, y + 6)], fill));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(font(style, style.tick_size()))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudviz_common::test_utils::assert_approx_eq;

    #[test]
    fn test_from_config() {
        let chart = AmountDistributionChart::from_config(&DataConfig::default());
        assert_eq!(chart, AmountDistributionChart::new(42, 1000));
        assert_eq!(chart.file_name(), "amount_distribution.png");
        assert_eq!(chart.figure_size(), (10.0, 6.0));
    }

    #[test]
    fn test_samples_are_reproducible() {
        let chart = AmountDistributionChart::new(42, 1000);
        assert_eq!(chart.samples().unwrap(), chart.samples().unwrap());
    }

    #[test]
    fn test_densities_are_normalized() {
        let (non_fraud, fraud) = AmountDistributionChart::new(42, 1000).densities().unwrap();
        assert_approx_eq(non_fraud.area(), 1.0, 0.02);
        assert_approx_eq(fraud.area(), 1.0, 0.02);

        // Fraud mass sits far to the right of the non-fraud mass
        assert!(fraud.x_range().1 > non_fraud.x_range().1);
        assert!(non_fraud.peak() > fraud.peak());
    }
}
