//! End-to-end rendering tests for the dashboard charts.

use fraudviz_charts::{
    AmountDistributionChart, ChartManager, ChartRenderer, ClassDistributionChart,
    ConfusionMatrixChart, FraudByHourChart, OutputSink, RiskScoreChart, COMPLETION_BANNER,
    START_BANNER,
};
use fraudviz_common::test_utils::{create_temp_dir, init_test_logging};
use fraudviz_config::{Config, DataConfig, StyleConfig};
use std::fs;

fn render_one(chart: &dyn ChartRenderer, expected: (u32, u32)) {
    init_test_logging();
    let temp_dir = create_temp_dir();
    let sink = OutputSink::new(temp_dir.path());
    let mut console = Vec::new();

    let path = sink
        .save(chart, &StyleConfig::default(), &mut console)
        .unwrap();

    assert_eq!(path, temp_dir.path().join(chart.file_name()));
    assert!(fs::metadata(&path).unwrap().len() > 0);
    assert_eq!(image::image_dimensions(&path).unwrap(), expected);
    assert_eq!(
        String::from_utf8(console).unwrap(),
        format!("✅ {} generated\n", chart.file_name())
    );
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_class_distribution_renders() {
    render_one(&ClassDistributionChart::default(), (800, 600));
}

#[test]
fn test_amount_distribution_renders() {
    render_one(
        &AmountDistributionChart::from_config(&DataConfig::default()),
        (1000, 600),
    );
}

#[test]
fn test_fraud_by_hour_renders() {
    render_one(&FraudByHourChart::default(), (1200, 600));
}

#[test]
fn test_risk_score_renders() {
    render_one(
        &RiskScoreChart::from_config(&DataConfig::default()),
        (1000, 600),
    );
}

#[test]
fn test_confusion_matrix_renders() {
    render_one(&ConfusionMatrixChart::default(), (800, 600));
}

#[test]
fn test_full_run_into_empty_dir() {
    init_test_logging();
    let temp_dir = create_temp_dir();
    let out = temp_dir.path().join("dashboards").join("screenshots");
    let manager = ChartManager::new(Config::with_output_dir(&out));
    let mut console = Vec::new();

    let paths = manager.generate_all(&mut console).unwrap();

    assert_eq!(paths.len(), 5);
    let mut names: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "amount_distribution.png",
            "confusion_matrix.png",
            "fraud_by_time.png",
            "fraud_count.png",
            "risk_score_distribution.png",
        ]
    );
    for path in &paths {
        assert!(fs::metadata(path).unwrap().len() > 0);
    }

    let output = String::from_utf8(console).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], START_BANNER);
    assert!(lines[1..6].iter().all(|line| line.ends_with(" generated")));
    assert_eq!(lines[6], COMPLETION_BANNER);
}

#[test]
fn test_rerun_overwrites_files() {
    let temp_dir = create_temp_dir();
    let manager = ChartManager::new(Config::with_output_dir(temp_dir.path()));

    manager.generate_all(&mut std::io::sink()).unwrap();
    let first = fs::read(temp_dir.path().join("risk_score_distribution.png")).unwrap();
    manager.generate_all(&mut std::io::sink()).unwrap();
    let second = fs::read(temp_dir.path().join("risk_score_distribution.png")).unwrap();

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 5);
    assert_eq!(first, second);
}
