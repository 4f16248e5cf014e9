//! Greenwich and Local Mean Sidereal Time in degrees.
//!
//! GMST uses the linear-plus-quadratic expression in days from J2000.0,
//! which is what the ascendant computation is calibrated against.
//!
//! Source: Meeus, "Astronomical Algorithms", 2nd ed., Eq. 12.4.

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// GMST at J2000.0, degrees.
const GMST_AT_J2000_DEG: f64 = 280.460_618_37;

/// Sidereal rotation per solar day, degrees.
pub const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Quadratic coefficient on T², degrees.
const GMST_T2_DEG: f64 = 0.000_387_933;

/// Greenwich Mean Sidereal Time at a Julian Day.
///
/// GMST = 280.46061837 + 360.98564736629·D + 0.000387933·T²
/// where D = JD − 2451545.0 and T = D / 36525.
///
/// Returns degrees in [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = d / DAYS_PER_JULIAN_CENTURY;
    wrap_deg(GMST_AT_J2000_DEG + SIDEREAL_RATE_DEG_PER_DAY * d + GMST_T2_DEG * t * t)
}

/// Local Sidereal Time from GMST and observer east longitude.
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    wrap_deg(gmst_deg + longitude_east_deg)
}

fn wrap_deg(x: f64) -> f64 {
    let r = x.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
