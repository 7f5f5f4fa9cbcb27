//! Error types for configuration validation and species parsing.

use thiserror::Error;

/// Errors surfaced before or outside the tick loop.
///
/// Stochastic non-events ("no kill", "no mating") are normal control flow and
/// never reported through this type.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The configured world side length is not positive.
    #[error("world size must be positive, got {0}")]
    InvalidWorldSize(i32),

    /// A configured probability lies outside `[0, 1]`.
    #[error("probability `{name}` must lie in [0, 1], got {value}")]
    InvalidProbability {
        /// Name of the offending parameter field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A species label did not match any known species.
    #[error("unknown species `{0}`")]
    UnknownSpecies(String),
}
