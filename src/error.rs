use std::result;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PercolationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Only raised when an estimator was given an explicit draw limit.
    #[error("trial {trial} drew {draws} sites without percolating")]
    DrawLimitExceeded { trial: usize, draws: u64 },
}

pub type Result<T> = result::Result<T, PercolationError>;

pub fn invalid<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(PercolationError::InvalidArgument(msg.into()))
}
