//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Latitude too close to a pole for the ascendant formula.
    #[error("latitude {latitude_deg} deg is too close to a pole for an ascendant")]
    PolarLatitude { latitude_deg: f64 },
    /// An input or intermediate value was NaN or infinite.
    #[error("non-finite value: {0}")]
    NonFinite(&'static str),
}
