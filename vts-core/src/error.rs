//! Configuration errors
//!
//! The simulator has no runtime failure modes. Everything that can go
//! wrong is a bad configuration and is rejected before the first tick.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown scenario '{0}' (expected one of city, highway, mixed, aggressive, inefficient, idle)")]
    UnknownScenario(String),

    #[error("trip duration must be at least one tick")]
    NonPositiveDuration,

    #[error("invalid rng seed '{0}': expected an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error("driver id must not be empty")]
    EmptyDriverId,

    #[error("invalid batch configuration: {0}")]
    InvalidBatch(String),
}
