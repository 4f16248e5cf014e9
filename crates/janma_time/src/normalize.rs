//! Local wall-clock time to UTC.
//!
//! The offset comes from an [`OffsetLookup`] (normally a time-zone service).
//! When the lookup fails for any reason the mean solar offset of the
//! longitude (4 minutes per degree) is used instead and the result is
//! marked low confidence. Normalization itself never fails.

use chrono::TimeDelta;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::geo::GeoLocation;
use crate::local::LocalBirthTime;
use crate::utc_time::UtcMoment;

/// Mean solar offset per degree of east longitude, in seconds.
pub const SECONDS_PER_DEGREE_LONGITUDE: f64 = 240.0;

/// Source of GMT offsets for a location and instant.
///
/// Implementations must be bounded in time; a slow backend should report
/// [`LookupError::Timeout`] rather than block.
pub trait OffsetLookup {
    /// GMT offset in seconds (east positive, DST-aware) in force at the
    /// given location around `approx_unix_utc`.
    fn gmt_offset_seconds(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        approx_unix_utc: i64,
    ) -> Result<i32, LookupError>;
}

impl<F> OffsetLookup for F
where
    F: Fn(f64, f64, i64) -> Result<i32, LookupError>,
{
    fn gmt_offset_seconds(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        approx_unix_utc: i64,
    ) -> Result<i32, LookupError> {
        self(latitude_deg, longitude_deg, approx_unix_utc)
    }
}

/// Lookup that is never configured; forces the mean solar path.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineLookup;

impl OffsetLookup for OfflineLookup {
    fn gmt_offset_seconds(&self, _: f64, _: f64, _: i64) -> Result<i32, LookupError> {
        Err(LookupError::NotConfigured)
    }
}

/// Lookup for callers that want the mean solar offset deliberately.
pub fn offline() -> OfflineLookup {
    OfflineLookup
}

/// Where the applied offset came from.
#[derive(Debug, Clone, PartialEq)]
pub enum OffsetSource {
    /// Offset reported by the lookup.
    Lookup,
    /// Longitude-derived offset after the lookup failed.
    MeanSolarFallback { reason: LookupError },
}

/// A birth instant resolved to UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedUtc {
    pub moment: UtcMoment,
    /// Offset subtracted from local time, in seconds.
    pub offset_seconds: f64,
    pub source: OffsetSource,
}

impl NormalizedUtc {
    /// True when the offset is the mean solar approximation.
    pub fn is_low_confidence(&self) -> bool {
        matches!(self.source, OffsetSource::MeanSolarFallback { .. })
    }
}

/// Mean solar offset for a longitude, in milliseconds.
pub fn mean_solar_offset_ms(longitude_deg: f64) -> i64 {
    (longitude_deg * SECONDS_PER_DEGREE_LONGITUDE * 1000.0).round() as i64
}

/// Resolve a local birth time at `location` to UTC.
pub fn normalize_to_utc<L>(
    local: &LocalBirthTime,
    location: &GeoLocation,
    lookup: &L,
) -> NormalizedUtc
where
    L: OffsetLookup + ?Sized,
{
    let approx = local.approx_unix_utc();
    let (offset_ms, source) = match lookup.gmt_offset_seconds(
        location.latitude_deg,
        location.longitude_deg,
        approx,
    ) {
        Ok(secs) => {
            debug!(gmt_offset = secs, "offset lookup succeeded");
            (i64::from(secs) * 1000, OffsetSource::Lookup)
        }
        Err(reason) => {
            warn!(
                error = %reason,
                longitude = location.longitude_deg,
                "offset lookup failed; using mean solar time"
            );
            (
                mean_solar_offset_ms(location.longitude_deg),
                OffsetSource::MeanSolarFallback { reason },
            )
        }
    };

    let utc = local.datetime() - TimeDelta::milliseconds(offset_ms);
    NormalizedUtc {
        moment: UtcMoment::from_naive(utc),
        offset_seconds: offset_ms as f64 / 1000.0,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(lat: f64, lon: f64) -> GeoLocation {
        GeoLocation::try_new(lat, lon).unwrap()
    }

    fn fixed(secs: i32) -> impl Fn(f64, f64, i64) -> Result<i32, LookupError> {
        move |_, _, _| Ok(secs)
    }

    #[test]
    fn fallback_ten_am_at_75_east() {
        let local = LocalBirthTime::parse("2024-03-20", "10:00").unwrap();
        let n = normalize_to_utc(&local, &loc(20.0, 75.0), &offline());
        assert_eq!((n.moment.year, n.moment.month, n.moment.day), (2024, 3, 20));
        assert!((n.moment.hour - 5.0).abs() < 1e-12);
        assert_eq!(n.offset_seconds, 18_000.0);
        assert!(n.is_low_confidence());
        assert_eq!(
            n.source,
            OffsetSource::MeanSolarFallback {
                reason: LookupError::NotConfigured
            }
        );
    }

    #[test]
    fn lookup_ist_offset() {
        let local = LocalBirthTime::parse("1989-04-04", "21:04").unwrap();
        let n = normalize_to_utc(&local, &loc(17.385, 78.4867), &fixed(19_800));
        assert!(!n.is_low_confidence());
        assert!((n.moment.hour - (15.0 + 34.0 / 60.0)).abs() < 1e-12);
        assert!((n.moment.to_jd() - 2_447_621.148_611_111).abs() < 1e-8);
    }

    #[test]
    fn rolls_back_a_day() {
        let local = LocalBirthTime::parse("2024-06-15", "03:00").unwrap();
        let n = normalize_to_utc(&local, &loc(17.385, 78.4867), &fixed(19_800));
        assert_eq!((n.moment.month, n.moment.day), (6, 14));
        assert!((n.moment.hour - 21.5).abs() < 1e-12);
    }

    #[test]
    fn rolls_forward_over_year_end() {
        let local = LocalBirthTime::parse("1999-12-31", "20:00").unwrap();
        let n = normalize_to_utc(&local, &loc(40.7, -74.0), &fixed(-5 * 3600));
        assert_eq!((n.moment.year, n.moment.month, n.moment.day), (2000, 1, 1));
        assert!((n.moment.hour - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fallback_carries_failure_reason() {
        let failing =
            |_: f64, _: f64, _: i64| -> Result<i32, LookupError> { Err(LookupError::Timeout) };
        let local = LocalBirthTime::parse("2024-01-01", "00:30").unwrap();
        let n = normalize_to_utc(&local, &loc(0.0, 15.0), &failing);
        assert_eq!(
            n.source,
            OffsetSource::MeanSolarFallback {
                reason: LookupError::Timeout
            }
        );
        assert_eq!((n.moment.year, n.moment.month, n.moment.day), (2023, 12, 31));
        assert!((n.moment.hour - 23.5).abs() < 1e-12);
    }

    #[test]
    fn lookup_receives_local_clock_as_unix() {
        let local = LocalBirthTime::parse("2000-01-01", "12:00").unwrap();
        let probe = |lat: f64, lon: f64, ts: i64| -> Result<i32, LookupError> {
            assert_eq!(ts, 946_728_000);
            assert_eq!((lat, lon), (10.0, 20.0));
            Ok(0)
        };
        let n = normalize_to_utc(&local, &loc(10.0, 20.0), &probe);
        assert_eq!(n.moment.hour, 12.0);
    }

    #[test]
    fn mean_solar_offset_rounds_to_millis() {
        assert_eq!(mean_solar_offset_ms(75.0), 18_000_000);
        assert_eq!(mean_solar_offset_ms(-74.006), -17_761_440);
        assert_eq!(mean_solar_offset_ms(0.0), 0);
    }
}
