//! Configuration violations and errors.

use thiserror::Error;

/// A single rule a configuration breaks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("exit animation ({exit_ms} ms) outlasts the next possible swap ({limit_ms} ms)")]
    ExitOutlastsNextSwap { exit_ms: u64, limit_ms: u64 },

    #[error("{field} ({ms} ms) exceeds the {} ms limit", super::MAX_DELAY_MS)]
    DelayTooLong { field: &'static str, ms: u64 },

    #[error("back-to-top threshold ({back_to_top}) must exceed nav threshold ({nav})")]
    ScrollThresholdsOutOfOrder { nav: u32, back_to_top: u32 },

    #[error("skill visibility threshold {0} must be in (0, 1]")]
    VisibilityThresholdOutOfRange(f32),

    #[error("{field} must not be empty")]
    EmptyText { field: &'static str },
}

/// Errors raised while loading a site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
