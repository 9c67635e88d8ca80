//! # fraudviz charts
//!
//! Renders the fraud detection dashboard screenshots with plotters.
//!
//! Each chart implements [`ChartRenderer`]; the [`OutputSink`] owns the
//! bitmap canvas and file lifecycle, and the [`ChartManager`] runs the
//! fixed set of charts in order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod manager;
pub mod sink;
pub mod stats;
pub mod style;
pub mod synthetic;
pub mod traits;

pub mod amount_distribution;
pub mod class_distribution;
pub mod confusion_matrix;
pub mod fraud_by_hour;
pub mod risk_score;

pub use amount_distribution::AmountDistributionChart;
pub use class_distribution::ClassDistributionChart;
pub use confusion_matrix::{ConfusionMatrix, ConfusionMatrixChart};
pub use fraud_by_hour::FraudByHourChart;
pub use manager::*;
pub use risk_score::RiskScoreChart;
pub use sink::*;
pub use traits::*;
