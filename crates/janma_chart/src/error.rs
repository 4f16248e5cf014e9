//! Error types for chart assembly.

use janma_time::TimeError;
use janma_vedic_base::{Graha, VedicError};
use thiserror::Error;

use crate::oracle::OracleError;

/// Errors from building a birth chart.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed or out-of-range birth input.
    #[error("invalid birth input: {0}")]
    Time(#[from] TimeError),
    /// Ascendant could not be computed.
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// The planetary-longitude source failed.
    #[error("graha oracle failed: {0}")]
    Oracle(#[from] OracleError),
    /// A body required by the output was not supplied.
    #[error("no reading for {}", .0.english_name())]
    MissingGraha(Graha),
}
