//! Lagna (Ascendant) computation.
//!
//! Chain: JD → GMST → LST → obliquity → tropical ascendant → sidereal.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 12, 13, 22.
//!
//! The tan(φ) term diverges toward the poles, so latitudes at or beyond
//! [`POLAR_LATITUDE_LIMIT_DEG`] are rejected with
//! [`VedicError::PolarLatitude`] instead of returning an unstable angle.

use janma_time::{GeoLocation, gmst_deg, jd_to_centuries, local_sidereal_time_deg};

use crate::ayanamsha::ayanamsha_deg;
use crate::error::VedicError;
use crate::util::normalize_360;

/// Absolute latitude at or above which no ascendant is computed.
pub const POLAR_LATITUDE_LIMIT_DEG: f64 = 89.9;

/// Mean obliquity of the ecliptic at a Julian Day, degrees.
///
/// ε = 23.439291 − 0.0130042·T
pub fn obliquity_deg(jd: f64) -> f64 {
    23.439_291 - 0.013_004_2 * jd_to_centuries(jd)
}

/// Intermediate and final values of one ascendant computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagnaInfo {
    pub gmst_deg: f64,
    pub lst_deg: f64,
    pub obliquity_deg: f64,
    pub ayanamsha_deg: f64,
    /// Tropical ascendant in [0, 360).
    pub tropical_deg: f64,
    /// Sidereal ascendant in [0, 360).
    pub sidereal_deg: f64,
}

/// Tropical ascendant from local sidereal time, obliquity and latitude.
///
/// `Asc = atan2(cos(LST), −sin(LST)·cos(ε) − tan(φ)·sin(ε))`
///
/// Returns degrees in [0, 360). No polar check; see [`lagna_details`].
pub fn tropical_ascendant_deg(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let y = lst.cos();
    let x = -lst.sin() * eps.cos() - phi.tan() * eps.sin();
    normalize_360(y.atan2(x).to_degrees())
}

/// Full ascendant computation with every intermediate value.
pub fn lagna_details(jd: f64, location: &GeoLocation) -> Result<LagnaInfo, VedicError> {
    if !jd.is_finite() {
        return Err(VedicError::NonFinite("julian day"));
    }
    let lat = location.latitude_deg;
    if !lat.is_finite() || !location.longitude_deg.is_finite() {
        return Err(VedicError::NonFinite("location"));
    }
    if lat.abs() >= POLAR_LATITUDE_LIMIT_DEG {
        return Err(VedicError::PolarLatitude { latitude_deg: lat });
    }

    let gmst = gmst_deg(jd);
    let lst = local_sidereal_time_deg(gmst, location.longitude_deg);
    let eps = obliquity_deg(jd);
    let tropical = tropical_ascendant_deg(lst, eps, lat);
    let aya = ayanamsha_deg(jd);
    let sidereal = normalize_360(tropical - aya);

    if !sidereal.is_finite() {
        return Err(VedicError::NonFinite("ascendant"));
    }

    Ok(LagnaInfo {
        gmst_deg: gmst,
        lst_deg: lst,
        obliquity_deg: eps,
        ayanamsha_deg: aya,
        tropical_deg: tropical,
        sidereal_deg: sidereal,
    })
}

/// Tropical ascendant in degrees [0, 360).
pub fn tropical_lagna_deg(jd: f64, location: &GeoLocation) -> Result<f64, VedicError> {
    lagna_details(jd, location).map(|info| info.tropical_deg)
}

/// Sidereal ascendant in degrees [0, 360).
pub fn sidereal_lagna_deg(jd: f64, location: &GeoLocation) -> Result<f64, VedicError> {
    lagna_details(jd, location).map(|info| info.sidereal_deg)
}
