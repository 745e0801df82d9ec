//! Match error codes

use thiserror::Error;

/// Reasons a match cannot be (re)configured or started
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("match does not have player one set")]
    MissingPlayerOne,

    #[error("match does not have player two set")]
    MissingPlayerTwo,

    #[error("match requires at least one round")]
    NoRounds,

    #[error("match has already left the ready state")]
    AlreadyStarted,
}

/// Errors raised by match operations. A failed operation leaves the match untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid match configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("out of gameplay rounds ({played} of {capacity} played)")]
    OutOfRounds { played: usize, capacity: usize },
}
