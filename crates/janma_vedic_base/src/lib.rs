//! Vedic jyotish primitives for sidereal birth charts.
//!
//! This crate provides:
//! - Linear ayanamsha and tropical → sidereal conversion
//! - Lagna (ascendant) from Julian Day and location
//! - Rashi (zodiac sign) with DMS breakdown
//! - Nakshatra (27 lunar mansions) with pada
//! - Graha (the 9 bodies) and lordship
//! - Whole-sign bhava (house) mapping
//!
//! All functions are pure math; the ascendant is the only fallible one.

pub mod ayanamsha;
pub mod bhava;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use ayanamsha::{
    AYANAMSHA_AT_J2000_DEG, PRECESSION_ARCSEC_PER_YEAR, ayanamsha_deg, tropical_to_sidereal,
};
pub use bhava::{BHAVA_COUNT, bhava_from_indices, group_by_bhava, rashi_for_bhava, whole_sign_bhava};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use janma_time::GeoLocation;
pub use lagna::{
    LagnaInfo, POLAR_LATITUDE_LIMIT_DEG, lagna_details, obliquity_deg, sidereal_lagna_deg,
    tropical_ascendant_deg, tropical_lagna_deg,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_from_tropical,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
    rashi_from_tropical,
};
pub use util::normalize_360;
