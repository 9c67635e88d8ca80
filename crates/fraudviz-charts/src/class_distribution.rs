//! Class imbalance bar chart on a logarithmic count axis.

use crate::style::{
    category_label, category_range, category_ticks, draw_title, font, style_mesh, ChartPalette,
};
use crate::traits::{Canvas, ChartRenderer};
use fraudviz_common::{format_percent, format_thousands, FraudVizError, Result};
use fraudviz_config::StyleConfig;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Legitimate transactions in the reference dataset.
pub const NON_FRAUD_COUNT: u64 = 284_315;
/// Fraudulent transactions in the reference dataset (about 0.17%).
pub const FRAUD_COUNT: u64 = 492;

const CLASS_LABELS: [&str; 2] = ["Non-Fraud", "Fraud"];
const BAR_HALF_WIDTH: f64 = 0.4;

/// Tick label on the class axis; classes sit at `0` and `1`.
pub fn class_tick_label(x: f64) -> String {
    category_label(x, &CLASS_LABELS)
}

/// Two-bar chart of non-fraud vs fraud transaction counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDistributionChart {
    /// Non-fraud count followed by fraud count.
    pub counts: [u64; 2],
}

impl ClassDistributionChart {
    /// Creates a chart for the given class counts.
    pub const fn new(non_fraud: u64, fraud: u64) -> Self {
        Self {
            counts: [non_fraud, fraud],
        }
    }

    /// Sum of both classes.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of the total per class. Zeroes when the total is zero.
    pub fn shares(&self) -> [f64; 2] {
        let total = self.total();
        if total == 0 {
            return [0.0; 2];
        }
        self.counts.map(|count| count as f64 / total as f64)
    }

    /// Two-line bar annotation per class: count, then share in parentheses.
    pub fn bar_labels(&self) -> [(String, String); 2] {
        let shares = self.shares();
        [0, 1].map(|i| {
            (
                format_thousands(self.counts[i]),
                format!("({})", format_percent(shares[i], 2)),
            )
        })
    }

    /// Upper bound of the log axis, leaving headroom for the annotations.
    fn y_max(&self) -> f64 {
        let largest = self.counts.iter().copied().max().unwrap_or(1).max(1);
        largest as f64 * 10.0
    }
}

impl Default for ClassDistributionChart {
    fn default() -> Self {
        Self::new(NON_FRAUD_COUNT, FRAUD_COUNT)
    }
}

impl ChartRenderer for ClassDistributionChart {
    fn name(&self) -> &'static str {
        "fraud_count"
    }

    fn description(&self) -> &'static str {
        "Transaction class distribution"
    }

    fn figure_size(&self) -> (f64, f64) {
        (8.0, 6.0)
    }

    fn render(&self, root: &Canvas<'_>, style: &StyleConfig) -> Result<()> {
        if self.total() == 0 {
            return Err(FraudVizError::chart("class counts are all zero"));
        }
        let palette = ChartPalette::from_style(style);
        let body = draw_title(root, style, "Transaction Class Distribution\n(Highly Imbalanced)")?;

        let mut chart = ChartBuilder::on(&body)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(
                category_range(CLASS_LABELS.len()),
                (1f64..self.y_max()).log_scale(),
            )?;

        let x_formatter = |x: &f64| class_tick_label(*x);
        let y_formatter = |y: &f64| format_thousands(y.round() as u64);
        let mut mesh = chart.configure_mesh();
        mesh.y_desc("Number of Transactions")
            .x_labels(category_ticks(CLASS_LABELS.len()))
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter);
        style_mesh(&mut mesh, style);
        mesh.draw()?;

        let colors = [palette.legit, palette.fraud];
        chart.draw_series(self.counts.iter().enumerate().map(|(i, &count)| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, 1.0), (x + BAR_HALF_WIDTH, (count as f64).max(1.0))],
                colors[i].filled(),
            )
        }))?;

        let annotation = font(style, style.tick_size())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let line_height = style.tick_size() as i32 + 4;
        chart.draw_series(self.bar_labels().into_iter().enumerate().map(
            |(i, (count_label, share_label))| {
                let top = (self.counts[i] as f64).max(1.0);
                EmptyElement::at((i as f64, top))
                    + Text::new(count_label, (0, -4 - line_height), annotation.clone())
                    + Text::new(share_label, (0, -4), annotation.clone())
            },
        ))?;

        Ok(())
    }
}
