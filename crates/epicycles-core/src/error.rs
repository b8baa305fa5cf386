//! Error types for epicycles-core.

use thiserror::Error;

/// Rejected configuration. Raised only while building a [`crate::Simulation`];
/// runtime commands clamp instead of failing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_terms must be at least 1")]
    NoTerms,

    #[error("time_step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("time_speed must be positive, got {0}")]
    NonPositiveTimeSpeed(f64),

    #[error("scale must be positive, got {0}")]
    NonPositiveScale(f64),

    #[error("wave_speed must be positive, got {0}")]
    NonPositiveWaveSpeed(f64),

    #[error("trace_width must be positive, got {0}")]
    NonPositiveTraceWidth(f64),

    #[error("min_rotation_speed must be positive, got {0}")]
    NonPositiveRotationFloor(f64),

    #[error("rotation_step must not be negative, got {0}")]
    NegativeRotationStep(f64),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("unknown waveform: {0} (expected \"square\" or \"sawtooth\")")]
    UnknownWaveform(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
