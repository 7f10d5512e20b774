use serde_json::Value;
use error::{invalid, Result};

/// Parameters of one estimator run.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    pub n: i64,
    pub trials: i64,
    pub seed: Option<u64>,
    pub max_draws: Option<u64>,
}

impl EstimatorConfig {
    pub fn new(n: i64, trials: i64) -> EstimatorConfig {
        EstimatorConfig { n, trials, seed: None, max_draws: None }
    }

    pub fn with_seed(mut self, seed: u64) -> EstimatorConfig {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_draws(mut self, max_draws: u64) -> EstimatorConfig {
        self.max_draws = Some(max_draws);
        self
    }

    /// Reads `{"n": .., "trials": .., "seed": .., "max_draws": ..}`; the last
    /// two keys are optional.
    pub fn from_json(json: &Value) -> Result<EstimatorConfig> {
        let n = match json["n"].as_i64() {
            Some(n) => n,
            None => return invalid("config needs an integer \"n\""),
        };
        let trials = match json["trials"].as_i64() {
            Some(t) => t,
            None => return invalid("config needs an integer \"trials\""),
        };
        let seed = optional_u64(json, "seed")?;
        let max_draws = optional_u64(json, "max_draws")?;
        Ok(EstimatorConfig { n, trials, seed, max_draws })
    }

    /// Reads positional `n trials [seed]`.
    pub fn from_args(args: &[String]) -> Result<EstimatorConfig> {
        if args.len() < 2 || args.len() > 3 {
            return invalid(format!("expected `n trials [seed]`, got {} arguments", args.len()));
        }
        let n = parse_arg::<i64>(&args[0], "n")?;
        let trials = parse_arg::<i64>(&args[1], "trials")?;
        let mut config = EstimatorConfig::new(n, trials);
        if args.len() == 3 {
            config.seed = Some(parse_arg::<u64>(&args[2], "seed")?);
        }
        Ok(config)
    }
}

fn optional_u64(json: &Value, key: &str) -> Result<Option<u64>> {
    match json.get(key) {
        None | Some(&Value::Null) => Ok(None),
        Some(v) => match v.as_u64() {
            Some(x) => Ok(Some(x)),
            None => invalid(format!("\"{}\" must be a non-negative integer, got {}", key, v)),
        },
    }
}

fn parse_arg<T: ::std::str::FromStr>(raw: &str, name: &str) -> Result<T> {
    match raw.trim().parse::<T>() {
        Ok(v) => Ok(v),
        Err(_) => invalid(format!("{} must be an integer, got {:?}", name, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reads_json_config() {
        let json: Value = ::serde_json::from_str(r#"{"n": 20, "trials": 50, "seed": 9}"#).unwrap();
        let config = EstimatorConfig::from_json(&json).unwrap();
        assert_eq!(config, EstimatorConfig::new(20, 50).with_seed(9));
    }

    #[test]
    fn json_config_requires_size_and_trials() {
        let json: Value = ::serde_json::from_str(r#"{"n": 20}"#).unwrap();
        assert!(EstimatorConfig::from_json(&json).is_err());
        let json: Value = ::serde_json::from_str(r#"{"n": "big", "trials": 3}"#).unwrap();
        assert!(EstimatorConfig::from_json(&json).is_err());
    }

    #[test]
    fn json_optional_keys_must_be_unsigned() {
        let json: Value = ::serde_json::from_str(r#"{"n": 2, "trials": 3, "max_draws": -1}"#).unwrap();
        assert!(EstimatorConfig::from_json(&json).is_err());
        let json: Value = ::serde_json::from_str(r#"{"n": 2, "trials": 3, "seed": null}"#).unwrap();
        assert_eq!(EstimatorConfig::from_json(&json).unwrap().seed, None);
    }

    #[test]
    fn reads_positional_args() {
        assert_eq!(EstimatorConfig::from_args(&args(&["200", "100"])).unwrap(),
            EstimatorConfig::new(200, 100));
        assert_eq!(EstimatorConfig::from_args(&args(&["2", "3", "11"])).unwrap().seed, Some(11));
        assert!(EstimatorConfig::from_args(&args(&["2"])).is_err());
        assert!(EstimatorConfig::from_args(&args(&["two", "3"])).is_err());
    }
}
