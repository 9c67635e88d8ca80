//! Annotated confusion matrix heat-map with live-computed headline metrics.

use crate::style::{
    blues, category_label, category_range, category_ticks, contrasting_text, draw_title, font,
    style_mesh,
};
use crate::traits::{Canvas, ChartRenderer};
use fraudviz_common::{format_percent, format_thousands, Result};
use fraudviz_config::StyleConfig;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const PREDICTED_LABELS: [&str; 2] = ["Predicted Safe", "Predicted Fraud"];
const ACTUAL_LABELS: [&str; 2] = ["Actual Safe", "Actual Fraud"];
const COLORBAR_WIDTH: i32 = 130;
const COLORBAR_STEPS: u32 = 100;

/// Tick label on the predicted (x) axis; columns sit at `0` and `1`.
pub fn predicted_tick_label(x: f64) -> String {
    category_label(x, &PREDICTED_LABELS)
}

/// Tick label on the actual (y) axis. Row 0 sits at the top, `y = 1`.
pub fn actual_tick_label(y: f64) -> String {
    category_label(1.0 - y, &ACTUAL_LABELS)
}

/// Cell centre for `row` and `col` of the matrix.
fn cell_center(row: usize, col: usize) -> (f64, f64) {
    (col as f64, 1.0 - row as f64)
}

/// Binary classification outcome counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// Legitimate transactions predicted legitimate.
    pub true_negative: u64,
    /// Legitimate transactions flagged as fraud.
    pub false_positive: u64,
    /// Fraud predicted legitimate.
    pub false_negative: u64,
    /// Fraud flagged as fraud.
    pub true_positive: u64,
}

/// Illustrative matrix over ~285k transactions: about 85% recall and a
/// false-positive rate under 0.3%.
pub const ILLUSTRATIVE_MATRIX: ConfusionMatrix = ConfusionMatrix::from_rows([[283_465, 850], [74, 418]]);

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl ConfusionMatrix {
    /// Builds a matrix from `[[TN, FP], [FN, TP]]` rows (actual by predicted).
    pub const fn from_rows(rows: [[u64; 2]; 2]) -> Self {
        Self {
            true_negative: rows[0][0],
            false_positive: rows[0][1],
            false_negative: rows[1][0],
            true_positive: rows[1][1],
        }
    }

    /// Rows as `[[TN, FP], [FN, TP]]`.
    pub const fn rows(&self) -> [[u64; 2]; 2] {
        [
            [self.true_negative, self.false_positive],
            [self.false_negative, self.true_positive],
        ]
    }

    /// Total number of classified transactions.
    pub const fn total(&self) -> u64 {
        self.true_negative + self.false_positive + self.false_negative + self.true_positive
    }

    /// `(TN + TP) / total`.
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_negative + self.true_positive, self.total())
    }

    /// `TP / (TP + FN)`, the detection rate.
    pub fn recall(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// `TP / (TP + FP)`.
    pub fn precision(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    /// `FP / (FP + TN)`.
    pub fn false_positive_rate(&self) -> f64 {
        ratio(self.false_positive, self.false_positive + self.true_negative)
    }

    /// Smallest and largest cell.
    fn bounds(&self) -> (u64, u64) {
        let cells = [
            self.true_negative,
            self.false_positive,
            self.false_negative,
            self.true_positive,
        ];
        let min = cells.iter().copied().min().unwrap_or(0);
        let max = cells.iter().copied().max().unwrap_or(0);
        (min, max)
    }

    /// Cell position on the colour map, `0.0` at the smallest cell.
    fn intensity(&self, value: u64) -> f64 {
        let (min, max) = self.bounds();
        if max == min {
            0.0
        } else {
            (value - min) as f64 / (max - min) as f64
        }
    }
}

/// Heat-map of a [`ConfusionMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionMatrixChart {
    /// Matrix being drawn.
    pub matrix: ConfusionMatrix,
}

impl ConfusionMatrixChart {
    /// Creates a chart for `matrix`.
    pub const fn new(matrix: ConfusionMatrix) -> Self {
        Self { matrix }
    }

    /// Title with accuracy and recall derived from the matrix.
    pub fn title(&self) -> String {
        format!(
            "Model Confusion Matrix\n(Accuracy: {}, Recall: {})",
            format_percent(self.matrix.accuracy(), 2),
            format_percent(self.matrix.recall(), 0)
        )
    }

    fn draw_colorbar(&self, area: &Canvas<'_>, style: &StyleConfig) -> Result<()> {
        let (min, max) = self.matrix.bounds();
        let (lo, hi) = (min as f64, (max as f64).max(min as f64 + 1.0));
        let mut bar = ChartBuilder::on(area)
            .margin_top(20)
            .margin_bottom(70)
            .margin_left(10)
            .margin_right(10)
            .right_y_label_area_size(80)
            .build_cartesian_2d(0f64..1f64, lo..hi)?;

        let y_formatter = |y: &f64| format_thousands(y.max(0.0).round() as u64);
        let mut mesh = bar.configure_mesh();
        mesh.x_labels(0).y_labels(6).y_label_formatter(&y_formatter);
        style_mesh(&mut mesh, style);
        mesh.disable_mesh();
        mesh.draw()?;

        let step = (hi - lo) / f64::from(COLORBAR_STEPS);
        bar.draw_series((0..COLORBAR_STEPS).map(|i| {
            let y0 = step.mul_add(f64::from(i), lo);
            let t = f64::from(i) / f64::from(COLORBAR_STEPS - 1);
            Rectangle::new([(0.0, y0), (1.0, y0 + step)], blues(t).filled())
        }))?;
        Ok(())
    }
}

impl Default for ConfusionMatrixChart {
    fn default() -> Self {
        Self::new(ILLUSTRATIVE_MATRIX)
    }
}

impl ChartRenderer for ConfusionMatrixChart {
    fn name(&self) -> &'static str {
        "confusion_matrix"
    }

    fn description(&self) -> &'static str {
        "Model confusion matrix"
    }

    fn figure_size(&self) -> (f64, f64) {
        (8.0, 6.0)
    }

    fn render(&self, root: &Canvas<'_>, style: &StyleConfig) -> Result<()> {
        let body = draw_title(root, style, &self.title())?;
        let (width, _) = body.dim_in_pixel();
        let (matrix_area, colorbar_area) =
            body.split_horizontally((width as i32 - COLORBAR_WIDTH).max(0));

        let mut chart = ChartBuilder::on(&matrix_area)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(120)
            .build_cartesian_2d(category_range(2), category_range(2))?;

        let x_formatter = |x: &f64| predicted_tick_label(*x);
        let y_formatter = |y: &f64| actual_tick_label(*y);
        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Predicted Label")
            .y_desc("True Label")
            .x_labels(category_ticks(PREDICTED_LABELS.len()))
            .y_labels(category_ticks(ACTUAL_LABELS.len()))
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter);
        style_mesh(&mut mesh, style);
        mesh.disable_mesh();
        mesh.draw()?;

        let cells: Vec<(usize, usize, u64)> = self
            .matrix
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(move |(col, &value)| (row, col, value))
            })
            .collect();

        chart.draw_series(cells.iter().map(|&(row, col, value)| {
            let (x, y) = cell_center(row, col);
            Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                blues(self.matrix.intensity(value)).filled(),
            )
        }))?;

        let annotation_font = font(style, style.label_size());
        chart.draw_series(cells.iter().map(|&(row, col, value)| {
            let fill = blues(self.matrix.intensity(value));
            let text_style = annotation_font
                .color(&contrasting_text(fill))
                .pos(Pos::new(HPos::Center, VPos::Center));
            Text::new(format_thousands(value), cell_center(row, col), text_style)
        }))?;

        self.draw_colorbar(&colorbar_area, style)
    }
}
