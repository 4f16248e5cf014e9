//! Calendar and time math for birth-chart computation.
//!
//! This crate provides:
//! - Parsing of local birth date/time strings
//! - Geographic location validation
//! - Local → UTC normalization with a pluggable offset lookup and a
//!   mean-solar-time fallback
//! - Julian Day conversion
//! - Greenwich and local mean sidereal time

pub mod error;
pub mod geo;
pub mod julian;
pub mod local;
pub mod normalize;
pub mod sidereal;
pub mod utc_time;

pub use error::{LookupError, TimeError};
pub use geo::GeoLocation;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, calendar_to_jd, jd_to_centuries,
    julian_day,
};
pub use local::{LocalBirthTime, MAX_BIRTH_YEAR, MIN_BIRTH_YEAR};
pub use normalize::{
    NormalizedUtc, OfflineLookup, OffsetLookup, OffsetSource, SECONDS_PER_DEGREE_LONGITUDE,
    mean_solar_offset_ms, normalize_to_utc, offline,
};
pub use sidereal::{SIDEREAL_RATE_DEG_PER_DAY, gmst_deg, local_sidereal_time_deg};
pub use utc_time::UtcMoment;
