//! Relative fraud volume by hour of day with the night-time peak shaded.

use crate::style::{draw_title, font, style_mesh, ChartPalette};
use crate::traits::{Canvas, ChartRenderer};
use fraudviz_common::{FraudVizError, Result};
use fraudviz_config::StyleConfig;
use plotters::prelude::*;

/// Relative fraud weight per hour (0-23). Peaks at night, troughs mid-day.
pub const HOURLY_FRAUD_WEIGHTS: [f64; 24] = [
    0.8, 0.85, 0.8, 0.7, 0.5, 0.2, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, //
    0.15, 0.2, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.75, 0.8, 0.85, 0.8,
];

/// Weights are plotted as volume on a 0-100 scale.
pub const VOLUME_SCALE: f64 = 100.0;

/// Minimum weight an hour inside a shaded band must have.
pub const PEAK_WEIGHT_THRESHOLD: f64 = 0.7;

/// Shaded peak ranges; must stay in sync with [`HOURLY_FRAUD_WEIGHTS`].
pub const PEAK_BANDS: [PeakBand; 2] = [
    PeakBand::new(22.0, 23.9),
    PeakBand::new(0.0, 3.0),
];

/// Hour axis extent. Leaves room for the band ending at 23.9.
pub const HOUR_AXIS: std::ops::Range<f64> = -0.5..24.0;

/// Tick budget that puts one tick on every whole hour of [`HOUR_AXIS`].
pub const HOUR_TICKS: usize = 25;

/// Tick label on the hour axis: whole hours `0`-`23`, blank elsewhere.
pub fn hour_tick_label(x: f64) -> String {
    let hour = x.round();
    if (x - hour).abs() > 1e-6 || !(0.0..24.0).contains(&hour) {
        return String::new();
    }
    format!("{}", hour as u8)
}

/// A closed range of the hour axis drawn as a shaded band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakBand {
    /// Band start on the hour axis.
    pub start: f64,
    /// Band end on the hour axis.
    pub end: f64,
}

impl PeakBand {
    /// Creates a band over `[start, end]`.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Whole hours covered by the band.
    pub fn hours(&self) -> impl Iterator<Item = usize> + '_ {
        (0..24).filter(move |&hour| {
            let h = hour as f64;
            h >= self.start && h <= self.end
        })
    }
}

/// Line chart of hourly fraud volume.
#[derive(Debug, Clone, PartialEq)]
pub struct FraudByHourChart {
    /// Weight per hour, 0-23.
    pub weights: [f64; 24],
    /// Shaded peak bands. The first one carries the legend entry.
    pub bands: Vec<PeakBand>,
}

impl FraudByHourChart {
    /// Creates a chart over custom weights and bands.
    pub fn new(weights: [f64; 24], bands: Vec<PeakBand>) -> Self {
        Self { weights, bands }
    }

    /// `(hour, volume)` points.
    pub fn volume(&self) -> Vec<(f64, f64)> {
        self.weights
            .iter()
            .enumerate()
            .map(|(hour, weight)| (hour as f64, weight * VOLUME_SCALE))
            .collect()
    }

    /// Hours whose weight meets `threshold`.
    pub fn peak_hours(&self, threshold: f64) -> Vec<u8> {
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight >= threshold)
            .map(|(hour, _)| hour as u8)
            .collect()
    }

    /// Whether every hour inside every band meets `threshold`.
    pub fn bands_cover_only_peaks(&self, threshold: f64) -> bool {
        self.bands.iter().all(|band| {
            band.start >= 0.0
                && band.end < 24.0
                && band.start <= band.end
                && band.hours().all(|hour| self.weights[hour] >= threshold)
        })
    }

    fn y_max(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max) * VOLUME_SCALE * 1.1
    }
}

impl Default for FraudByHourChart {
    fn default() -> Self {
        Self::new(HOURLY_FRAUD_WEIGHTS, PEAK_BANDS.to_vec())
    }
}

impl ChartRenderer for FraudByHourChart {
    fn name(&self) -> &'static str {
        "fraud_by_time"
    }

    fn description(&self) -> &'static str {
        "Fraud transaction frequency by hour of day"
    }

    fn figure_size(&self) -> (f64, f64) {
        (12.0, 6.0)
    }

    fn render(&self, root: &Canvas<'_>, style: &StyleConfig) -> Result<()> {
        let y_max = self.y_max();
        if y_max <= 0.0 || !y_max.is_finite() {
            return Err(FraudVizError::chart("hourly weights have no positive value"));
        }
        let palette = ChartPalette::from_style(style);

        let body = draw_title(root, style, "Fraud Transaction Frequency by Hour of Day")?;
        let mut chart = ChartBuilder::on(&body)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                HOUR_AXIS,
                0f64..y_max,
            )?;

        let x_formatter = |x: &f64| hour_tick_label(*x);
        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Hour (24h format)")
            .y_desc("Relative Fraud Volume")
            .x_labels(HOUR_TICKS)
            .x_label_formatter(&x_formatter);
        style_mesh(&mut mesh, style);
        mesh.draw()?;

        let band_fill = palette.fraud.mix(0.1).filled();
        for (i, band) in self.bands.iter().enumerate() {
            let anno = chart.draw_series(std::iter::once(Rectangle::new(
                [(band.start, 0.0), (band.end, y_max)],
                band_fill,
            )))?;
            if i == 0 {
                anno.label("Peak Fraud Hours").legend(move |(x, y)| {
                    Rectangle::new([(x, y - 6), (x + 20, y + 6)], band_fill)
                });
            }
        }

        let points = self.volume();
        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            palette.fraud.stroke_width(3),
        ))?;
        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, 5, palette.fraud.filled())),
        )?;

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

#[cfg(test)]
mod tests {
    use super::*;
    use fraudviz_common::test_utils::assert_approx_eq;
    use plotters::coord::types::RangedCoordf64;

    #[test]
    fn test_weight_table() {
        assert_eq!(HOURLY_FRAUD_WEIGHTS.len(), 24);
        assert!(HOURLY_FRAUD_WEIGHTS
            .iter()
            .all(|w| (0.0..=1.0).contains(w)));
    }

    #[test]
    fn test_peak_bands_match_weights() {
        let chart = FraudByHourChart::default();
        assert!(chart.bands_cover_only_peaks(PEAK_WEIGHT_THRESHOLD));
    }

    #[test]
    fn test_band_hours() {
        assert_eq!(PEAK_BANDS[0].hours().collect::<Vec<_>>(), vec![22, 23]);
        assert_eq!(PEAK_BANDS[1].hours().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_misplaced_band_detected() {
        let chart = FraudByHourChart::new(HOURLY_FRAUD_WEIGHTS, vec![PeakBand::new(10.0, 12.0)]);
        assert!(!chart.bands_cover_only_peaks(PEAK_WEIGHT_THRESHOLD));

        let chart = FraudByHourChart::new(HOURLY_FRAUD_WEIGHTS, vec![PeakBand::new(22.0, 24.5)]);
        assert!(!chart.bands_cover_only_peaks(PEAK_WEIGHT_THRESHOLD));
    }

    #[test]
    fn test_peak_hours() {
        let chart = FraudByHourChart::default();
        assert_eq!(chart.peak_hours(0.8), vec![0, 1, 2, 21, 22, 23]);
        assert_eq!(chart.peak_hours(0.7), vec![0, 1, 2, 3, 19, 20, 21, 22, 23]);
    }

    #[test]
    fn test_hour_axis_labels_every_hour() {
        let axis: RangedCoordf64 = HOUR_AXIS.into();
        let labels: Vec<String> = axis
            .key_points(HOUR_TICKS)
            .into_iter()
            .map(hour_tick_label)
            .filter(|label| !label.is_empty())
            .collect();
        let expected: Vec<String> = (0..24).map(|hour| hour.to_string()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_hour_tick_label() {
        assert_eq!(hour_tick_label(0.0), "0");
        assert_eq!(hour_tick_label(23.0), "23");
        assert_eq!(hour_tick_label(24.0), "");
        assert_eq!(hour_tick_label(-0.5), "");
        assert_eq!(hour_tick_label(3.5), "");
    }

    #[test]
    fn test_volume_scaling() {
        let volume = FraudByHourChart::default().volume();
        assert_eq!(volume.len(), 24);
        assert_eq!(volume[1].0, 1.0);
        assert_approx_eq(volume[1].1, 85.0, 1e-9);
        assert_approx_eq(volume[6].1, 10.0, 1e-9);
    }
}
