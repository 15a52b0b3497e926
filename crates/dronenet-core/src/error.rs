//! Error types for planner configuration.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("consumption rate for model '{model}' must be a finite, non-negative number (got {rate})")]
    InvalidRate { model: String, rate: f64 },
    #[error("default consumption rate must be a finite, non-negative number (got {0})")]
    InvalidDefaultRate(f64),
}
