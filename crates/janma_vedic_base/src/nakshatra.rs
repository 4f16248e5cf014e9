//! Nakshatra (lunar mansion) computation.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (800 arc-minutes) each. Each nakshatra has 4 padas of 3 deg 20'
//! (200 arc-minutes).
//!
//! Classification works in arc-minutes, where both spans are whole numbers,
//! so a longitude exactly on an edge always falls in the segment that begins
//! there.

use serde::{Deserialize, Serialize};

use crate::ayanamsha::ayanamsha_deg;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Span of one nakshatra in arc-minutes.
pub const NAKSHATRA_SPAN_ARCMIN: f64 = 800.0;

/// Span of one pada in arc-minutes.
pub const PADA_SPAN_ARCMIN: f64 = 200.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Nakshatra lords repeat in this 9-fold cycle starting from Ashwini.
const LORD_CYCLE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Presiding deity.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini Kumaras",
            Self::Bharani => "Yama",
            Self::Krittika => "Agni",
            Self::Rohini => "Brahma",
            Self::Mrigashira => "Soma",
            Self::Ardra => "Rudra",
            Self::Punarvasu => "Aditi",
            Self::Pushya => "Brihaspati",
            Self::Ashlesha => "Nagas",
            Self::Magha => "Pitris",
            Self::PurvaPhalguni => "Bhaga",
            Self::UttaraPhalguni => "Aryaman",
            Self::Hasta => "Savitar",
            Self::Chitra => "Vishvakarma",
            Self::Swati => "Vayu",
            Self::Vishakha => "Indra-Agni",
            Self::Anuradha => "Mitra",
            Self::Jyeshtha => "Indra",
            Self::Mula => "Nirriti",
            Self::PurvaAshadha => "Apas",
            Self::UttaraAshadha => "Vishvadevas",
            Self::Shravana => "Vishnu",
            Self::Dhanishta => "Vasus",
            Self::Shatabhisha => "Varuna",
            Self::PurvaBhadrapada => "Aja Ekapada",
            Self::UttaraBhadrapada => "Ahir Budhnya",
            Self::Revati => "Pushan",
        }
    }

    /// Yoni animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ashwini => "Horse",
            Self::Bharani => "Elephant",
            Self::Krittika => "Sheep",
            Self::Rohini => "Serpent",
            Self::Mrigashira => "Serpent",
            Self::Ardra => "Dog",
            Self::Punarvasu => "Cat",
            Self::Pushya => "Sheep",
            Self::Ashlesha => "Cat",
            Self::Magha => "Rat",
            Self::PurvaPhalguni => "Rat",
            Self::UttaraPhalguni => "Cow",
            Self::Hasta => "Buffalo",
            Self::Chitra => "Tiger",
            Self::Swati => "Buffalo",
            Self::Vishakha => "Tiger",
            Self::Anuradha => "Deer",
            Self::Jyeshtha => "Deer",
            Self::Mula => "Dog",
            Self::PurvaAshadha => "Monkey",
            Self::UttaraAshadha => "Mongoose",
            Self::Shravana => "Monkey",
            Self::Dhanishta => "Lion",
            Self::Shatabhisha => "Horse",
            Self::PurvaBhadrapada => "Lion",
            Self::UttaraBhadrapada => "Cow",
            Self::Revati => "Elephant",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishta => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// Ruling graha.
    pub const fn lord(self) -> Graha {
        LORD_CYCLE[self.index() as usize % 9]
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
}

impl NakshatraInfo {
    /// Ruling graha of the nakshatra.
    pub fn lord(&self) -> Graha {
        self.nakshatra.lord()
    }
}

/// Index of the segment of width `span` containing `x`, clamped to `max`.
fn segment_index(x: f64, span: f64, max: u8) -> u8 {
    let mut idx = ((x / span).floor() as u8).min(max);
    if x < idx as f64 * span {
        idx -= 1;
    }
    idx
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let arcmin = normalize_360(sidereal_lon_deg) * 60.0;
    let nak_idx = segment_index(arcmin, NAKSHATRA_SPAN_ARCMIN, 26);
    let within = arcmin - nak_idx as f64 * NAKSHATRA_SPAN_ARCMIN;
    let pada_idx = segment_index(within, PADA_SPAN_ARCMIN, 3);
    let within_pada = within - pada_idx as f64 * PADA_SPAN_ARCMIN;

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra: within / 60.0,
        degrees_in_pada: within_pada / 60.0,
    }
}

/// Convenience: determine nakshatra from tropical longitude at a Julian Day.
pub fn nakshatra_from_tropical(tropical_lon_deg: f64, jd: f64) -> NakshatraInfo {
    nakshatra_from_longitude(tropical_lon_deg - ayanamsha_deg(jd))
}
