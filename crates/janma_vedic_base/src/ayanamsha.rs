//! Linear Lahiri-style ayanamsha.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! It is modeled here as a reference value at J2000.0 plus a constant
//! precession rate:
//!
//! `aya = 23.85 + (50.29 / 3600) × (JD − 2451545.0) / 365.25`
//!
//! A constant rate ignores the slow change of general precession, so the
//! error grows with distance from J2000.0 (well under an arc-minute across
//! 1900–2100).

use janma_time::{DAYS_PER_JULIAN_YEAR, J2000_JD};

use crate::util::normalize_360;

/// Ayanamsha at J2000.0, degrees.
pub const AYANAMSHA_AT_J2000_DEG: f64 = 23.85;

/// Precession rate in arcseconds per Julian year.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.29;

/// Ayanamsha in degrees at a Julian Day.
pub fn ayanamsha_deg(jd: f64) -> f64 {
    let years = (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR;
    AYANAMSHA_AT_J2000_DEG + (PRECESSION_ARCSEC_PER_YEAR / 3600.0) * years
}

/// Convert a tropical longitude to sidereal at a Julian Day.
///
/// Returns degrees in [0, 360).
pub fn tropical_to_sidereal(tropical_lon_deg: f64, jd: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsha_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_at_j2000() {
        assert!((ayanamsha_deg(J2000_JD) - 23.85).abs() < 1e-12);
    }

    #[test]
    fn one_year_adds_rate() {
        let delta = ayanamsha_deg(J2000_JD + DAYS_PER_JULIAN_YEAR) - ayanamsha_deg(J2000_JD);
        assert!((delta - 50.29 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn value_2024() {
        let aya = ayanamsha_deg(2_460_311.0);
        assert!((aya - 24.185_266_666_666_667).abs() < 1e-9, "aya = {aya}");
    }

    #[test]
    fn before_j2000_is_smaller() {
        let aya = ayanamsha_deg(2_415_020.5);
        assert!(aya < 23.85 && aya > 22.0, "aya 1900 = {aya}");
    }

    #[test]
    fn strictly_increasing() {
        let mut prev = f64::NEG_INFINITY;
        let mut jd = 2_415_020.5;
        while jd < 2_488_070.5 {
            let aya = ayanamsha_deg(jd);
            assert!(aya > prev, "not increasing at jd {jd}");
            prev = aya;
            jd += 10.0;
        }
    }

    #[test]
    fn tropical_to_sidereal_wraps() {
        let sid = tropical_to_sidereal(10.0, J2000_JD);
        assert!((sid - 346.15).abs() < 1e-9, "sid = {sid}");
    }
}
