#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;
#[macro_use] extern crate thiserror;
extern crate rand;

mod data;
mod disjoint_set;
mod error;
mod grid;
mod source;
mod config;
mod stats;

pub use data::{Site, Direction};
pub use disjoint_set::DisjointSet;
pub use error::{PercolationError, Result};
pub use grid::PercolationGrid;
pub use source::{UniformSource, RandSource};
pub use config::EstimatorConfig;
pub use stats::{ThresholdEstimator, StatsReport, CONFIDENCE_95, mean, sample_stddev};
