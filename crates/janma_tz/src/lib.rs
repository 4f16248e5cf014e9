//! Time-zone offset lookup over HTTP.
//!
//! Implements [`janma_time::OffsetLookup`] against a TimeZoneDB-compatible
//! endpoint. Every failure is returned as a [`janma_time::LookupError`];
//! the normalizer turns those into the mean solar fallback.

pub mod timezonedb;

use janma_config::TimezoneConfig;
use janma_time::{LookupError, OffsetLookup, offline};
use tracing::{debug, warn};

pub use timezonedb::{TimezoneDbClient, ZoneInfo};

/// Offset lookup selected by configuration.
///
/// Returns the HTTP client when a key is configured and the lookup is
/// enabled, otherwise an offline lookup.
pub fn offset_lookup(config: &TimezoneConfig) -> Box<dyn OffsetLookup> {
    match TimezoneDbClient::from_config(config) {
        Ok(client) => {
            debug!(endpoint = %config.endpoint, "using timezonedb offset lookup");
            Box::new(client)
        }
        Err(LookupError::NotConfigured) => {
            debug!("timezone lookup not configured; offsets use mean solar time");
            Box::new(offline())
        }
        Err(e) => {
            warn!(error = %e, "timezone lookup unavailable; offsets use mean solar time");
            Box::new(offline())
        }
    }
}
