//! Geographic birth location.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location after range checks.
    pub fn try_new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, TimeError> {
        if !latitude_deg.is_finite() {
            return Err(TimeError::InvalidLocation("latitude must be finite"));
        }
        if !longitude_deg.is_finite() {
            return Err(TimeError::InvalidLocation("longitude must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(TimeError::InvalidLocation(
                "latitude must be in [-90, 90] degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(TimeError::InvalidLocation(
                "longitude must be in [-180, 180] degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
