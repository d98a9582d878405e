//! Error types for the node model and its configuration

use thiserror::Error;

/// Errors raised by bounds construction and node updates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("invalid bounds: min {min} must be strictly less than max {max}")]
    InvalidBounds { min: i64, max: i64 },

    /// The walk step range `[min / 10, max / 10)` has no integers in it
    #[error("empty walk step range [{low}, {high}): bounds are too narrow for a random walk")]
    EmptyStepRange { low: i64, high: i64 },
}

/// Errors raised while assembling a simulation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Bounds(#[from] NodeError),

    #[error("no entropy available to seed the simulation: {0}")]
    Entropy(#[from] getrandom::Error),
}
