//! Error types for triangle construction, mesh seeding and configuration.

use thiserror::Error;

/// Errors that can occur while building triangles, seed meshes or configs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrisectError {
    /// A triangle was built from unusable vertices.
    #[error("Invalid triangle: {0}")]
    InvalidTriangle(&'static str),

    /// Random point sampling could not satisfy the minimum separation.
    #[error(
        "Placed {placed} of {requested} random points: {attempts} candidates rejected by minimum separation"
    )]
    PointPlacementExhausted {
        /// Random points accepted before giving up.
        placed: usize,
        /// Random points requested.
        requested: usize,
        /// Candidates drawn for the point that failed.
        attempts: usize,
    },

    /// Drop probability outside `[0, 1]`.
    #[error("Invalid drop probability: {0} (must be between 0.0 and 1.0)")]
    InvalidProbability(f64),

    /// Canvas dimensions are not positive finite numbers.
    #[error("Invalid dimensions: {width} x {height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// Padding is negative or leaves no area inside the rectangle.
    #[error("Invalid padding {padding} for a {width} x {height} rectangle")]
    InvalidPadding { padding: f64, width: f64, height: f64 },

    /// Jitter scale is negative or not finite.
    #[error("Invalid jitter scale: {0}")]
    InvalidJitterScale(f64),

    /// Minimum point separation is negative or not finite.
    #[error("Invalid minimum point separation: {0}")]
    InvalidSeparation(f64),

    /// The placement retry budget is zero.
    #[error("Invalid placement attempt budget: must be at least 1")]
    InvalidAttempts,
}

impl TrisectError {
    /// Returns `true` for errors caused by a bad configuration value.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidProbability(_)
                | Self::InvalidDimensions { .. }
                | Self::InvalidPadding { .. }
                | Self::InvalidJitterScale(_)
                | Self::InvalidSeparation(_)
                | Self::InvalidAttempts
        )
    }
}

/// Result type for trisect operations.
pub type TrisectResult<T> = std::result::Result<T, TrisectError>;
