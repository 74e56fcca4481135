//! Configuration validation errors.

use thiserror::Error;

/// Why a [`FiringConfig`](crate::config::FiringConfig) was rejected.
///
/// Raised before any derived state is computed, so an invalid shot never
/// produces NaN or infinite positions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("firing angle must lie strictly between 0 and 90 degrees, got {angle_deg}")]
    AngleOutOfRange { angle_deg: f64 },

    #[error("efficiency cannot exceed 100 %, got {efficiency_pct}")]
    EfficiencyTooHigh { efficiency_pct: f64 },

    #[error("start point is below ground level (y0 = {y0})")]
    StartBelowGround { y0: f64 },

    #[error("drag parameter {field} cannot be negative, got {value}")]
    NegativeDragParameter { field: &'static str, value: f64 },
}
