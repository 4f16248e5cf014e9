//! Planetary-longitude source.
//!
//! Only the ascendant is computed from first principles. Sidereal
//! longitudes of the nine grahas come from a [`GrahaOracle`].

use janma_vedic_base::{ALL_GRAHAS, Graha, normalize_360};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures reported by a [`GrahaOracle`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum OracleError {
    /// The source could not produce readings.
    #[error("readings unavailable: {0}")]
    Unavailable(String),
    /// A longitude was NaN or infinite.
    #[error("non-finite longitude for {}", .0.english_name())]
    NonFinite(Graha),
    /// The same graha was supplied twice.
    #[error("duplicate reading for {}", .0.english_name())]
    Duplicate(Graha),
}

/// One body's sidereal position at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrahaReading {
    pub graha: Graha,
    /// Sidereal ecliptic longitude, degrees.
    pub sidereal_lon_deg: f64,
    pub is_retrograde: bool,
}

impl GrahaReading {
    pub fn new(graha: Graha, sidereal_lon_deg: f64, is_retrograde: bool) -> Self {
        Self {
            graha,
            sidereal_lon_deg,
            is_retrograde,
        }
    }
}

/// Source of graha longitudes at a Julian Day.
pub trait GrahaOracle {
    fn graha_readings(&self, jd: f64) -> Result<Vec<GrahaReading>, OracleError>;
}

/// Table-backed oracle returning the same readings for every instant.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedGrahaReadings {
    readings: Vec<GrahaReading>,
}

impl FixedGrahaReadings {
    /// Build from arbitrary readings. Longitudes are normalized to [0, 360).
    pub fn new(readings: Vec<GrahaReading>) -> Result<Self, OracleError> {
        let mut seen = [false; 9];
        let mut out = Vec::with_capacity(readings.len());
        for r in readings {
            if !r.sidereal_lon_deg.is_finite() {
                return Err(OracleError::NonFinite(r.graha));
            }
            let slot = &mut seen[r.graha.index() as usize];
            if *slot {
                return Err(OracleError::Duplicate(r.graha));
            }
            *slot = true;
            out.push(GrahaReading {
                sidereal_lon_deg: normalize_360(r.sidereal_lon_deg),
                ..r
            });
        }
        Ok(Self { readings: out })
    }

    /// Build from nine longitudes in [`ALL_GRAHAS`] order, none retrograde.
    pub fn from_longitudes(longitudes: [f64; 9]) -> Result<Self, OracleError> {
        Self::new(
            ALL_GRAHAS
                .iter()
                .zip(longitudes)
                .map(|(&g, lon)| GrahaReading::new(g, lon, false))
                .collect(),
        )
    }

    /// Mark the given grahas retrograde.
    pub fn with_retrograde(mut self, grahas: &[Graha]) -> Self {
        for r in &mut self.readings {
            if grahas.contains(&r.graha) {
                r.is_retrograde = true;
            }
        }
        self
    }

    pub fn readings(&self) -> &[GrahaReading] {
        &self.readings
    }
}

impl GrahaOracle for FixedGrahaReadings {
    fn graha_readings(&self, _jd: f64) -> Result<Vec<GrahaReading>, OracleError> {
        Ok(self.readings.clone())
    }
}
