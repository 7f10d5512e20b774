use serde_json::Value;
use config::EstimatorConfig;
use data::Site;
use error::{invalid, PercolationError, Result};
use grid::PercolationGrid;
use source::{RandSource, UniformSource};

/// z-score of a two-sided 95% Gaussian interval
pub const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimate of the percolation threshold of an n-by-n grid.
///
/// Every trial opens uniformly random blocked sites of a fresh grid until it
/// percolates and records the fraction of sites that were open at that point.
#[derive(Debug, Clone)]
pub struct ThresholdEstimator {
	n: usize,
	thresholds: Vec<f64>,
}

impl ThresholdEstimator {
	/// Runs `trials` trials drawing from an entropy-seeded generator.
	pub fn new(n: i64, trials: i64) -> Result<ThresholdEstimator> {
		let mut source = RandSource::from_entropy();
		ThresholdEstimator::with_source(n, trials, &mut source)
	}

	pub fn with_source<S: UniformSource + ?Sized>(n: i64, trials: i64, source: &mut S) -> Result<ThresholdEstimator> {
		ThresholdEstimator::run(n, trials, source, None)
	}

	pub fn from_config(config: &EstimatorConfig) -> Result<ThresholdEstimator> {
		match config.seed {
			Some(seed) => {
				let mut source = RandSource::seeded(seed);
				ThresholdEstimator::run(config.n, config.trials, &mut source, config.max_draws)
			}
			None => {
				let mut source = RandSource::from_entropy();
				ThresholdEstimator::run(config.n, config.trials, &mut source, config.max_draws)
			}
		}
	}

	fn run<S: UniformSource + ?Sized>(n: i64, trials: i64, source: &mut S, max_draws: Option<u64>) -> Result<ThresholdEstimator> {
		if n <= 0 {
			return invalid(format!("grid size must be positive, got {}", n));
		}
		if trials <= 0 {
			return invalid(format!("trial count must be positive, got {}", trials));
		}
		let n = n as usize;
		let trials = trials as usize;

		let mut thresholds = Vec::with_capacity(trials);
		for trial in 0..trials {
			let threshold = run_trial(n, trial, source, max_draws)?;
			debug!("trial {}: threshold {:.4}", trial, threshold);
			thresholds.push(threshold);
		}

		let estimator = ThresholdEstimator { n, thresholds };
		info!("{}x{} grid, {} trials: mean {:.6}, stddev {:.6}",
			n, n, trials, estimator.mean(), estimator.stddev());
		Ok(estimator)
	}

	pub fn size(&self) -> usize {
		self.n
	}

	pub fn trials(&self) -> usize {
		self.thresholds.len()
	}

	/// Per-trial thresholds, in the order the trials ran.
	pub fn thresholds(&self) -> &[f64] {
		&self.thresholds
	}

	pub fn mean(&self) -> f64 {
		mean(&self.thresholds)
	}

	/// Sample standard deviation; NaN for a single trial.
	pub fn stddev(&self) -> f64 {
		sample_stddev(&self.thresholds)
	}

	pub fn confidence_lo(&self) -> f64 {
		self.mean() - self.half_width()
	}

	pub fn confidence_hi(&self) -> f64 {
		self.mean() + self.half_width()
	}

	fn half_width(&self) -> f64 {
		CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
	}

	pub fn report(&self) -> StatsReport {
		StatsReport {
			n: self.n,
			trials: self.trials(),
			mean: self.mean(),
			stddev: self.stddev(),
			confidence_lo: self.confidence_lo(),
			confidence_hi: self.confidence_hi(),
		}
	}
}

fn run_trial<S: UniformSource + ?Sized>(n: usize, trial: usize, source: &mut S, max_draws: Option<u64>) -> Result<f64> {
	let mut grid = PercolationGrid::new(n as i64)?;
	let mut opened = 0usize;
	let mut draws = 0u64;
	while !grid.percolates() {
		if let Some(limit) = max_draws {
			if draws >= limit {
				warn!("trial {} gave up after {} draws with {} sites open", trial, draws, opened);
				return Err(PercolationError::DrawLimitExceeded { trial, draws });
			}
		}
		let row = source.uniform_int(1, n + 1);
		let col = source.uniform_int(1, n + 1);
		draws += 1;
		let site = Site::new(row, col);
		if !grid.is_open_site(site)? {
			grid.open_site(site)?;
			opened += 1;
		}
	}
	trace!("trial {} final grid:\n{}", trial, grid);
	Ok(opened as f64 / (n * n) as f64)
}

/// Summary of a finished estimator run.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
	pub n: usize,
	pub trials: usize,
	pub mean: f64,
	pub stddev: f64,
	pub confidence_lo: f64,
	pub confidence_hi: f64,
}

impl StatsReport {
	/// Undefined statistics (one trial) come out as `null`.
	pub fn to_json(&self) -> Value {
		json!({
			"n": self.n,
			"trials": self.trials,
			"mean": self.mean,
			"stddev": self.stddev,
			"confidence_interval": [self.confidence_lo, self.confidence_hi],
		})
	}
}

pub fn mean(xs: &[f64]) -> f64 {
	if xs.is_empty() {
		return ::std::f64::NAN;
	}
	xs.iter().sum::<f64>() / xs.len() as f64
}

/// Standard deviation with divisor `len - 1`.
pub fn sample_stddev(xs: &[f64]) -> f64 {
	if xs.len() < 2 {
		return ::std::f64::NAN;
	}
	let m = mean(xs);
	let ss: f64 = xs.iter().map(|x| (x - m) * (x - m)).sum();
	(ss / (xs.len() - 1) as f64).sqrt()
}
