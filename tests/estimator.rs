extern crate percolation;
extern crate serde_json;

use percolation::{EstimatorConfig, PercolationError, RandSource, ThresholdEstimator};

#[test]
fn threshold_of_twenty_grid() {
    let mut source = RandSource::seeded(1);
    let stats = ThresholdEstimator::with_source(20, 100, &mut source).unwrap();
    assert_eq!(stats.trials(), 100);
    assert!(stats.mean() > 0.55 && stats.mean() < 0.65, "mean {}", stats.mean());
    assert!(stats.stddev() > 0.0);
    assert!(stats.confidence_lo() <= stats.mean());
    assert!(stats.mean() <= stats.confidence_hi());
    let width = stats.confidence_hi() - stats.confidence_lo();
    assert!((width - 2.0 * 1.96 * stats.stddev() / 10.0).abs() < 1e-12);
}

#[test]
fn same_seed_same_thresholds() {
    let config = EstimatorConfig::new(8, 10).with_seed(99);
    let a = ThresholdEstimator::from_config(&config).unwrap();
    let b = ThresholdEstimator::from_config(&config).unwrap();
    assert_eq!(a.thresholds(), b.thresholds());
}

#[test]
fn entropy_seeded_run_is_sane() {
    let stats = ThresholdEstimator::new(5, 20).unwrap();
    assert!(stats.thresholds().iter().all(|&t| t > 0.0 && t <= 1.0));
}

#[test]
fn invalid_estimator_arguments() {
    for &(n, trials) in &[(0, 5), (5, 0), (-2, 5), (5, -7)] {
        match ThresholdEstimator::new(n, trials) {
            Err(PercolationError::InvalidArgument(_)) => {}
            other => panic!("({}, {}) gave {:?}", n, trials, other),
        }
    }
}

#[test]
fn config_from_json_drives_a_run() {
    let json: serde_json::Value = serde_json::from_str(r#"{"n": 6, "trials": 4, "seed": 5}"#).unwrap();
    let config = EstimatorConfig::from_json(&json).unwrap();
    let report = ThresholdEstimator::from_config(&config).unwrap().report();
    assert_eq!(report.n, 6);
    assert_eq!(report.trials, 4);
    let out = report.to_json();
    assert_eq!(out["confidence_interval"].as_array().unwrap().len(), 2);
}
