use thiserror::Error;

/// Startup configuration rejected by [`SandboxConfig::validate`](crate::config::SandboxConfig::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("ball radius must be positive and finite, got {0}")]
    NonPositiveRadius(f32),

    #[error("world {axis} {extent} leaves no room for a ball of radius {radius}")]
    WorldTooSmall {
        axis: &'static str,
        extent: f32,
        radius: f32,
    },

    #[error("speed range ({lo}, {hi}) must be non-negative and ordered")]
    InvalidSpeedRange { lo: f32, hi: f32 },

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidFactor { name: &'static str, value: f32 },

    #[error("physics rate must be positive, got {0} Hz")]
    InvalidTickRate(f64),
}
