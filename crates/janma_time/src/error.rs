//! Error types for birth-time parsing, validation and offset lookup.

use thiserror::Error;

/// Errors from parsing or validating birth-time inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Birth date string is not `YYYY-MM-DD`.
    #[error("malformed birth date: {0}")]
    MalformedDate(String),
    /// Birth time string is not `HH:MM` or `HH:MM:SS`.
    #[error("malformed birth time: {0}")]
    MalformedTime(String),
    /// Date falls outside the supported range.
    #[error("date out of range: {0}")]
    DateOutOfRange(&'static str),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}

/// Failures of the external time-zone offset lookup.
///
/// These never escape [`crate::normalize_to_utc`]; they are recorded as the
/// reason for falling back to mean solar time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// No lookup service is configured (missing key, disabled, or offline).
    #[error("offset lookup not configured")]
    NotConfigured,
    /// The service did not answer within the timeout.
    #[error("offset lookup timed out")]
    Timeout,
    /// Connection or protocol failure.
    #[error("offset lookup transport error: {0}")]
    Transport(String),
    /// The service answered but reported a failure.
    #[error("offset lookup rejected: {0}")]
    Rejected(String),
    /// The response body could not be understood.
    #[error("malformed offset lookup response: {0}")]
    Malformed(String),
}
