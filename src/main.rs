#[macro_use] extern crate log;
#[macro_use] extern crate anyhow;
extern crate simplelog;
extern crate serde_json;
extern crate percolation;

use anyhow::{Context, Result};
use serde_json::Value;
use simplelog::*;
use std::env;
use std::fs::File;

use percolation::{EstimatorConfig, ThresholdEstimator};

const USAGE: &str = "usage: percolation-stats <n> <trials> [seed] [--json]\n       percolation-stats <config.json> [--json]";

fn log_config() -> Config {
	Config {time: None, level: Some(Level::Error), target: None, location: None, time_format: None}
}

fn init_logging() -> Result<()> {
	let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
	loggers.push(SimpleLogger::new(LevelFilter::Warn, log_config()));
	loggers.push(WriteLogger::new(
		LevelFilter::Info,
		log_config(),
		File::create("percolation-stats.log").context("creating percolation-stats.log")?));
	CombinedLogger::init(loggers).context("installing logger")?;
	Ok(())
}

fn load_config(args: &[String]) -> Result<EstimatorConfig> {
	if args.len() == 1 && args[0].ends_with(".json") {
		let file = File::open(&args[0]).with_context(|| format!("opening {}", args[0]))?;
		let json: Value = serde_json::from_reader(file).with_context(|| format!("parsing {}", args[0]))?;
		return Ok(EstimatorConfig::from_json(&json)?);
	}
	Ok(EstimatorConfig::from_args(args)?)
}

fn main() -> Result<()> {
	let mut args: Vec<String> = env::args().skip(1).collect();
	let as_json = args.last().map_or(false, |a| a == "--json");
	if as_json {
		args.pop();
	}
	if args.is_empty() {
		bail!("{}", USAGE);
	}

	init_logging()?;
	let config = load_config(&args).context(USAGE)?;
	info!("running {:?}", config);

	let stats = ThresholdEstimator::from_config(&config)?;
	if as_json {
		println!("{}", serde_json::to_string_pretty(&stats.report().to_json())?);
	} else {
		println!("mean                    = {}", stats.mean());
		println!("stddev                  = {}", stats.stddev());
		println!("95% confidence interval = [{}, {}]", stats.confidence_lo(), stats.confidence_hi());
	}
	Ok(())
}
