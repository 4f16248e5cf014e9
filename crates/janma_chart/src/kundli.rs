//! Serialized chart contract consumed by rendering, storage and
//! narrative generation.
//!
//! Field names are fixed. Ids are 1-based: `sign_id` is the rashi index
//! plus one and `nakshatra_id` is the nakshatra index plus one. Graha `id`
//! is the chart id (0-6 for Sun to Saturn, 101 Rahu, 102 Ketu). The lagna
//! is the first entry of `planetary_positions`, with id [`ASCENDANT_ID`]
//! and name [`ASCENDANT_NAME`]. Lords are rendered by English name.

use janma_time::OffsetSource;
use janma_vedic_base::{Graha, NakshatraInfo, RashiInfo, bhava_from_indices};
use serde::{Deserialize, Serialize};

use crate::chart::{BirthChart, Placement};
use crate::error::ChartError;

/// `id` of the lagna entry in `planetary_positions`.
pub const ASCENDANT_ID: u16 = 100;
/// `name` of the lagna entry in `planetary_positions`.
pub const ASCENDANT_NAME: &str = "Ascendant";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KundliData {
    pub ascendant_sign: String,
    pub ascendant_sign_id: u8,
    pub ascendant_sign_lord: String,
    pub moon_sign: String,
    pub moon_sign_id: u8,
    pub moon_sign_lord: String,
    pub sun_sign: String,
    pub sun_sign_id: u8,
    pub sun_sign_lord: String,
    /// Janma nakshatra (the Moon's).
    pub nakshatra: String,
    pub nakshatra_id: u8,
    pub nakshatra_pada: u8,
    pub nakshatra_lord: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal_sign: Option<String>,
    /// Same as `moon_sign`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac_sign: Option<String>,
    /// Set when the UTC offset is the mean solar approximation rather than
    /// a time-zone lookup result.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub utc_low_confidence: bool,
    /// Why the time-zone lookup was not used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_fallback_reason: Option<String>,
    pub planetary_positions: Vec<PlanetPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub id: u16,
    pub name: String,
    pub sign: String,
    pub sign_id: u8,
    pub sign_lord: String,
    /// Degrees within the sign, [0, 30).
    pub degree: f64,
    /// Sidereal longitude, [0, 360).
    pub full_degree: f64,
    pub is_retrograde: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra_id: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra_pada: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra_lord: Option<String>,
}

impl PlanetPosition {
    fn new(
        id: u16,
        name: &str,
        full_degree: f64,
        rashi: &RashiInfo,
        nak: &NakshatraInfo,
        is_retrograde: bool,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            sign: rashi.rashi.name().to_string(),
            sign_id: rashi.rashi_index + 1,
            sign_lord: rashi.lord().english_name().to_string(),
            degree: rashi.degrees_in_rashi,
            full_degree,
            is_retrograde,
            nakshatra: Some(nak.nakshatra.name().to_string()),
            nakshatra_id: Some(nak.nakshatra_index + 1),
            nakshatra_pada: Some(nak.pada),
            nakshatra_lord: Some(nak.lord().english_name().to_string()),
        }
    }

    /// True for the lagna entry.
    pub fn is_ascendant(&self) -> bool {
        self.id == ASCENDANT_ID || self.name == ASCENDANT_NAME
    }
}

impl From<&Placement> for PlanetPosition {
    fn from(p: &Placement) -> Self {
        Self::new(
            p.graha().chart_id(),
            p.graha().english_name(),
            p.sidereal_lon_deg(),
            p.rashi(),
            p.nakshatra(),
            p.is_retrograde(),
        )
    }
}

impl BirthChart {
    /// Render the chart in the serialized contract shape.
    pub fn to_kundli(&self) -> Result<KundliData, ChartError> {
        let moon = self.required(Graha::Chandra)?;
        let sun = self.required(Graha::Surya)?;
        let asc = &self.lagna_rashi;
        let janma = moon.nakshatra();

        let mut positions = Vec::with_capacity(self.placements.len() + 1);
        positions.push(PlanetPosition::new(
            ASCENDANT_ID,
            ASCENDANT_NAME,
            self.lagna.sidereal_deg,
            asc,
            &self.lagna_nakshatra,
            false,
        ));
        positions.extend(self.placements.iter().map(PlanetPosition::from));

        let utc_fallback_reason = match self.utc_source() {
            OffsetSource::Lookup => None,
            OffsetSource::MeanSolarFallback { reason } => Some(reason.to_string()),
        };

        Ok(KundliData {
            ascendant_sign: asc.rashi.name().to_string(),
            ascendant_sign_id: asc.rashi_index + 1,
            ascendant_sign_lord: asc.lord().english_name().to_string(),
            moon_sign: moon.rashi().rashi.name().to_string(),
            moon_sign_id: moon.rashi().rashi_index + 1,
            moon_sign_lord: moon.rashi().lord().english_name().to_string(),
            sun_sign: sun.rashi().rashi.name().to_string(),
            sun_sign_id: sun.rashi().rashi_index + 1,
            sun_sign_lord: sun.rashi().lord().english_name().to_string(),
            nakshatra: janma.nakshatra.name().to_string(),
            nakshatra_id: janma.nakshatra_index + 1,
            nakshatra_pada: janma.pada,
            nakshatra_lord: janma.lord().english_name().to_string(),
            deity: Some(janma.nakshatra.deity().to_string()),
            animal_sign: Some(janma.nakshatra.animal().to_string()),
            zodiac_sign: Some(moon.rashi().rashi.name().to_string()),
            utc_low_confidence: self.is_low_confidence(),
            utc_fallback_reason,
            planetary_positions: positions,
        })
    }
}

impl KundliData {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The lagna entry, if present.
    pub fn ascendant_position(&self) -> Option<&PlanetPosition> {
        self.planetary_positions.iter().find(|p| p.is_ascendant())
    }

    /// Whole-sign bhava (1-12) of a position, computed from the 1-based
    /// `sign_id` fields. None if either id is outside 1-12.
    pub fn bhava_of(&self, position: &PlanetPosition) -> Option<u8> {
        bhava_from_indices(
            position.sign_id.checked_sub(1)?,
            self.ascendant_sign_id.checked_sub(1)?,
        )
    }

    /// Graha positions grouped by bhava. Slot 0 is bhava 1. The lagna
    /// entry and positions with an invalid `sign_id` are skipped.
    pub fn positions_by_bhava(&self) -> [Vec<&PlanetPosition>; 12] {
        let mut out: [Vec<&PlanetPosition>; 12] = Default::default();
        for pos in self.planetary_positions.iter().filter(|p| !p.is_ascendant()) {
            if let Some(bhava) = self.bhava_of(pos) {
                out[usize::from(bhava - 1)].push(pos);
            }
        }
        out
    }
}
