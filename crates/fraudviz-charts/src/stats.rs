//! Density estimation and histogram binning for the sampled charts.

use fraudviz_common::{FraudVizError, Result};

/// Number of evaluation points for a density curve.
pub const KDE_GRID_SIZE: usize = 200;

/// Bandwidths the density grid extends past the data on each side.
pub const KDE_CUT: f64 = 3.0;

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation (n - 1 denominator). Zero below two samples.
pub fn sample_std_dev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let m = mean(samples);
    let sum_sq: f64 = samples.iter().map(|x| (x - m).powi(2)).sum();
    (sum_sq / (samples.len() - 1) as f64).sqrt()
}

/// Gaussian kernel bandwidth from Scott's rule: `sd * n^(-1/5)`.
pub fn scott_bandwidth(samples: &[f64]) -> Result<f64> {
    if samples.len() < 2 {
        return Err(FraudVizError::data("density estimate needs at least two samples"));
    }
    let bandwidth = sample_std_dev(samples) * (samples.len() as f64).powf(-0.2);
    if bandwidth > 0.0 && bandwidth.is_finite() {
        Ok(bandwidth)
    } else {
        Err(FraudVizError::data("samples have no spread to estimate a density from"))
    }
}

/// A smoothed density evaluated on an even grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    /// `(x, density)` pairs in ascending `x`.
    pub points: Vec<(f64, f64)>,
    /// Kernel bandwidth used.
    pub bandwidth: f64,
}

impl DensityCurve {
    /// Largest density value on the grid.
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|&(_, y)| y).fold(0.0, f64::max)
    }

    /// Grid extent as `(min_x, max_x)`.
    pub fn x_range(&self) -> (f64, f64) {
        let first = self.points.first().map_or(0.0, |p| p.0);
        let last = self.points.last().map_or(0.0, |p| p.0);
        (first, last)
    }

    /// Trapezoidal integral over the grid.
    pub fn area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum()
    }
}

/// Gaussian kernel density estimate over `grid_size` points spanning the
/// data extended by `cut` bandwidths on each side.
pub fn gaussian_kde(samples: &[f64], grid_size: usize, cut: f64) -> Result<DensityCurve> {
    if grid_size < 2 {
        return Err(FraudVizError::data("density grid needs at least two points"));
    }
    let bandwidth = scott_bandwidth(samples)?;
    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    let start = cut.mul_add(-bandwidth, min);
    let end = cut.mul_add(bandwidth, max);
    let step = (end - start) / (grid_size - 1) as f64;

    let norm = 1.0 / (samples.len() as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let points = (0..grid_size)
        .map(|i| {
            let x = step.mul_add(i as f64, start);
            let density: f64 = samples
                .iter()
                .map(|s| {
                    let z = (x - s) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            (x, density * norm)
        })
        .collect();

    Ok(DensityCurve { points, bandwidth })
}

/// Shared-edge histogram of one or more sample sets.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f64>,
    /// Per-set counts, each `bins` long, in input order.
    pub counts: Vec<Vec<u32>>,
}

impl HistogramBins {
    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    /// Total count per bin across every set.
    pub fn stacked_totals(&self) -> Vec<u32> {
        (0..self.bin_count())
            .map(|bin| self.counts.iter().map(|set| set[bin]).sum())
            .collect()
    }
}

/// Bins every set into `bins` equal-width bins spanning the combined
/// min..max. The last bin is closed on the right.
pub fn histogram(sets: &[&[f64]], bins: usize) -> Result<HistogramBins> {
    if bins == 0 {
        return Err(FraudVizError::data("histogram needs at least one bin"));
    }
    if sets.iter().flat_map(|set| set.iter()).any(|x| !x.is_finite()) {
        return Err(FraudVizError::data("histogram input contains non-finite samples"));
    }
    let (mut min, mut max) = sets
        .iter()
        .flat_map(|set| set.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| (lo.min(x), hi.max(x)));
    if !min.is_finite() || !max.is_finite() {
        return Err(FraudVizError::data("histogram input is empty"));
    }
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| width.mul_add(i as f64, min)).collect();
    let counts = sets
        .iter()
        .map(|set| {
            let mut counts = vec![0u32; bins];
            for &x in set.iter() {
                let index = (((x - min) / width).floor() as usize).min(bins - 1);
                counts[index] += 1;
            }
            counts
        })
        .collect();

    Ok(HistogramBins { edges, counts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudviz_common::test_utils::assert_approx_eq;

    #[test]
    fn test_mean_and_std_dev() {
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_approx_eq(mean(&samples), 5.0, 1e-12);
        assert_approx_eq(sample_std_dev(&samples), 2.138_089_935, 1e-6);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(sample_std_dev(&[1.0]), 0.0);
    }

    #[test]
    fn test_scott_bandwidth_rejects_degenerate_input() {
        assert!(scott_bandwidth(&[1.0]).is_err());
        assert!(scott_bandwidth(&[3.0, 3.0, 3.0]).is_err());
        assert!(scott_bandwidth(&[1.0, 2.0, 3.0]).is_ok());
    }

    #[test]
    fn test_kde_integrates_to_one() {
        let samples: Vec<f64> = (0..500).map(|i| f64::from(i % 50)).collect();
        let curve = gaussian_kde(&samples, KDE_GRID_SIZE, KDE_CUT).unwrap();

        assert_eq!(curve.points.len(), KDE_GRID_SIZE);
        assert_approx_eq(curve.area(), 1.0, 0.01);
        assert!(curve.points.iter().all(|&(_, y)| y >= 0.0));

        let (lo, hi) = curve.x_range();
        assert!(lo < 0.0);
        assert!(hi > 49.0);
    }

    #[test]
    fn test_kde_peak_near_mode() {
        let samples = [10.0, 10.5, 9.5, 10.2, 9.8, 30.0];
        let curve = gaussian_kde(&samples, KDE_GRID_SIZE, KDE_CUT).unwrap();
        let (peak_x, _) = curve
            .points
            .iter()
            .copied()
            .fold((0.0, f64::NEG_INFINITY), |best, p| if p.1 > best.1 { p } else { best });
        assert!((peak_x - 10.0).abs() < 3.0);
        assert_approx_eq(curve.peak(), curve.points.iter().map(|p| p.1).fold(0.0, f64::max), 0.0);
    }

    #[test]
    fn test_histogram_counts_every_sample() {
        let a = [0.0, 1.0, 2.0, 3.0, 10.0];
        let b = [5.0, 5.0, 9.99];
        let bins = histogram(&[&a[..], &b[..]], 10).unwrap();

        assert_eq!(bins.bin_count(), 10);
        assert_eq!(bins.edges.len(), 11);
        assert_approx_eq(bins.edges[0], 0.0, 1e-12);
        assert_approx_eq(bins.edges[10], 10.0, 1e-12);
        assert_eq!(bins.counts[0].iter().sum::<u32>(), 5);
        assert_eq!(bins.counts[1].iter().sum::<u32>(), 3);

        // Maximum lands in the closed last bin
        assert_eq!(bins.counts[0][9], 1);
        assert_eq!(bins.counts[1][9], 1);
        assert_eq!(bins.counts[1][5], 2);
        assert_eq!(bins.stacked_totals()[9], 2);
    }

    #[test]
    fn test_histogram_constant_input() {
        let a = [4.0, 4.0];
        let bins = histogram(&[&a[..]], 3).unwrap();
        assert_approx_eq(bins.edges[0], 3.5, 1e-12);
        assert_approx_eq(bins.edges[3], 4.5, 1e-12);
        assert_eq!(bins.counts[0], vec![0, 2, 0]);
    }

    #[test]
    fn test_histogram_rejects_bad_input() {
        let empty: [f64; 0] = [];
        assert!(histogram(&[&empty[..]], 5).is_err());
        assert!(histogram(&[&[1.0][..]], 0).is_err());
    }

    #[test]
    fn test_histogram_rejects_non_finite_samples() {
        let with_nan = [1.0, f64::NAN, 3.0];
        let with_inf = [1.0, 2.0, f64::INFINITY];
        let clean = [0.5, 2.5];
        assert!(histogram(&[&clean[..], &with_nan[..]], 4).is_err());
        assert!(histogram(&[&with_inf[..]], 4).is_err());
        assert!(histogram(&[&clean[..]], 4).is_ok());
    }
}
