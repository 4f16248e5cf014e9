//! Birth-chart assembly.
//!
//! Pipeline: local time → UTC → Julian Day → ayanamsha and sidereal lagna
//! → oracle readings → rashi, nakshatra and whole-sign bhava per graha.

use janma_time::{NormalizedUtc, OffsetLookup, OffsetSource, normalize_to_utc};
use janma_vedic_base::{
    Graha, LagnaInfo, NakshatraInfo, Rashi, RashiInfo, group_by_bhava, lagna_details,
    nakshatra_from_longitude, normalize_360, rashi_from_longitude, whole_sign_bhava,
};
use tracing::debug;

use crate::error::ChartError;
use crate::oracle::{GrahaOracle, GrahaReading, OracleError};
use crate::request::BirthRequest;

/// One graha in the chart.
///
/// The sidereal longitude is the only stored angle; sign, nakshatra and
/// bhava are derived from it once, at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    graha: Graha,
    sidereal_lon_deg: f64,
    is_retrograde: bool,
    rashi: RashiInfo,
    nakshatra: NakshatraInfo,
    bhava: u8,
}

impl Placement {
    fn new(reading: &GrahaReading, lagna: Rashi) -> Self {
        let lon = normalize_360(reading.sidereal_lon_deg);
        let rashi = rashi_from_longitude(lon);
        Self {
            graha: reading.graha,
            sidereal_lon_deg: lon,
            is_retrograde: reading.is_retrograde,
            rashi,
            nakshatra: nakshatra_from_longitude(lon),
            bhava: whole_sign_bhava(rashi.rashi, lagna),
        }
    }

    pub fn graha(&self) -> Graha {
        self.graha
    }

    /// Sidereal longitude in [0, 360).
    pub fn sidereal_lon_deg(&self) -> f64 {
        self.sidereal_lon_deg
    }

    pub fn is_retrograde(&self) -> bool {
        self.is_retrograde
    }

    pub fn rashi(&self) -> &RashiInfo {
        &self.rashi
    }

    pub fn nakshatra(&self) -> &NakshatraInfo {
        &self.nakshatra
    }

    /// Whole-sign bhava, 1-12.
    pub fn bhava(&self) -> u8 {
        self.bhava
    }
}

/// A computed sidereal birth chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthChart {
    pub request: BirthRequest,
    pub utc: NormalizedUtc,
    pub jd: f64,
    pub lagna: LagnaInfo,
    pub lagna_rashi: RashiInfo,
    pub lagna_nakshatra: NakshatraInfo,
    /// Placements in graha order (Surya first, Ketu last).
    pub placements: Vec<Placement>,
}

impl BirthChart {
    /// How the UTC offset was obtained. A mean-solar fallback marks the
    /// whole chart as lower confidence.
    pub fn utc_source(&self) -> &OffsetSource {
        &self.utc.source
    }

    pub fn is_low_confidence(&self) -> bool {
        self.utc.is_low_confidence()
    }

    pub fn placement(&self, graha: Graha) -> Option<&Placement> {
        self.placements.iter().find(|p| p.graha == graha)
    }

    pub(crate) fn required(&self, graha: Graha) -> Result<&Placement, ChartError> {
        self.placement(graha).ok_or(ChartError::MissingGraha(graha))
    }

    /// Grahas grouped by bhava. Slot 0 is bhava 1.
    pub fn bhavas(&self) -> [Vec<Graha>; 12] {
        group_by_bhava(
            self.placements.iter().map(|p| (p.graha, p.rashi.rashi)),
            self.lagna_rashi.rashi,
        )
    }
}

/// Compute a birth chart.
///
/// Offset lookup failures never fail the chart; they are recorded on
/// [`BirthChart::utc`]. Surya and Chandra readings are required.
pub fn compute_birth_chart<L, O>(
    request: &BirthRequest,
    lookup: &L,
    oracle: &O,
) -> Result<BirthChart, ChartError>
where
    L: OffsetLookup + ?Sized,
    O: GrahaOracle + ?Sized,
{
    let utc = normalize_to_utc(&request.local, &request.location, lookup);
    let jd = utc.moment.to_jd();
    debug!(local = %request.local, utc = %utc.moment, jd, "birth moment resolved");

    let lagna = lagna_details(jd, &request.location)?;
    let lagna_rashi = rashi_from_longitude(lagna.sidereal_deg);
    let lagna_nakshatra = nakshatra_from_longitude(lagna.sidereal_deg);
    debug!(
        sidereal = lagna.sidereal_deg,
        rashi = lagna_rashi.rashi.name(),
        ayanamsha = lagna.ayanamsha_deg,
        "lagna computed"
    );

    let mut readings = oracle.graha_readings(jd)?;
    check_readings(&readings)?;
    readings.sort_by_key(|r| r.graha.index());

    let placements: Vec<Placement> = readings
        .iter()
        .map(|r| Placement::new(r, lagna_rashi.rashi))
        .collect();

    let chart = BirthChart {
        request: *request,
        utc,
        jd,
        lagna,
        lagna_rashi,
        lagna_nakshatra,
        placements,
    };
    chart.required(Graha::Surya)?;
    chart.required(Graha::Chandra)?;
    debug!(grahas = chart.placements.len(), "chart assembled");
    Ok(chart)
}

fn check_readings(readings: &[GrahaReading]) -> Result<(), OracleError> {
    let mut seen = [false; 9];
    for r in readings {
        if !r.sidereal_lon_deg.is_finite() {
            return Err(OracleError::NonFinite(r.graha));
        }
        let slot = &mut seen[r.graha.index() as usize];
        if *slot {
            return Err(OracleError::Duplicate(r.graha));
        }
        *slot = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::FixedGrahaReadings;
    use janma_time::{LookupError, offline};

    fn ist(_: f64, _: f64, _: i64) -> Result<i32, LookupError> {
        Ok(19_800)
    }

    struct Failing;

    impl GrahaOracle for Failing {
        fn graha_readings(&self, _jd: f64) -> Result<Vec<GrahaReading>, OracleError> {
            Err(OracleError::Unavailable("offline".into()))
        }
    }

    struct Unchecked(Vec<GrahaReading>);

    impl GrahaOracle for Unchecked {
        fn graha_readings(&self, _jd: f64) -> Result<Vec<GrahaReading>, OracleError> {
            Ok(self.0.clone())
        }
    }

    fn hyderabad() -> BirthRequest {
        BirthRequest::parse("1989-04-04", "21:04", 17.385, 78.4867).unwrap()
    }

    #[test]
    fn placements_follow_lagna() {
        let oracle = FixedGrahaReadings::from_longitudes([
            350.9, 95.0, 10.0, 5.0, 40.0, 20.0, 280.0, 300.0, 120.0,
        ])
        .unwrap();
        let chart = compute_birth_chart(&hyderabad(), &ist, &oracle).unwrap();

        assert_eq!(chart.lagna_rashi.rashi, Rashi::Tula);
        assert!(!chart.is_low_confidence());

        let moon = chart.placement(Graha::Chandra).unwrap();
        assert_eq!(moon.rashi().rashi, Rashi::Karka);
        assert_eq!(moon.nakshatra().nakshatra_index, 7);
        // Karka is the 10th from Tula.
        assert_eq!(moon.bhava(), 10);

        let sun = chart.placement(Graha::Surya).unwrap();
        assert_eq!(sun.rashi().rashi, Rashi::Meena);
        assert_eq!(sun.bhava(), 6);
    }

    #[test]
    fn bhavas_hold_every_graha_once() {
        let oracle = FixedGrahaReadings::from_longitudes([
            0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 30.0,
        ])
        .unwrap();
        let chart = compute_birth_chart(&hyderabad(), &ist, &oracle).unwrap();
        let bhavas = chart.bhavas();
        assert_eq!(bhavas.iter().map(Vec::len).sum::<usize>(), 9);
        // Saturn at 180 sits in Tula, the lagna rashi.
        assert!(bhavas[0].contains(&Graha::Shani));
    }

    #[test]
    fn readings_are_sorted_by_graha() {
        let oracle = Unchecked(vec![
            GrahaReading::new(Graha::Chandra, 95.0, false),
            GrahaReading::new(Graha::Surya, 10.0, false),
        ]);
        let chart = compute_birth_chart(&hyderabad(), &ist, &oracle).unwrap();
        let order: Vec<Graha> = chart.placements.iter().map(Placement::graha).collect();
        assert_eq!(order, vec![Graha::Surya, Graha::Chandra]);
    }

    #[test]
    fn offline_lookup_marks_low_confidence() {
        let oracle = FixedGrahaReadings::from_longitudes([0.0; 9]).unwrap();
        let chart = compute_birth_chart(&hyderabad(), &offline(), &oracle).unwrap();
        assert!(chart.is_low_confidence());
        assert!(matches!(
            chart.utc_source(),
            OffsetSource::MeanSolarFallback {
                reason: LookupError::NotConfigured
            }
        ));
    }

    #[test]
    fn missing_moon_is_an_error() {
        let oracle = Unchecked(vec![GrahaReading::new(Graha::Surya, 10.0, false)]);
        let err = compute_birth_chart(&hyderabad(), &ist, &oracle).unwrap_err();
        assert_eq!(err, ChartError::MissingGraha(Graha::Chandra));
    }

    #[test]
    fn oracle_failures_propagate() {
        let err = compute_birth_chart(&hyderabad(), &ist, &Failing).unwrap_err();
        assert!(matches!(err, ChartError::Oracle(OracleError::Unavailable(_))));

        let dup = Unchecked(vec![
            GrahaReading::new(Graha::Surya, 10.0, false),
            GrahaReading::new(Graha::Surya, 11.0, false),
        ]);
        let err = compute_birth_chart(&hyderabad(), &ist, &dup).unwrap_err();
        assert_eq!(err, ChartError::Oracle(OracleError::Duplicate(Graha::Surya)));

        let nan = Unchecked(vec![GrahaReading::new(Graha::Mangal, f64::INFINITY, false)]);
        let err = compute_birth_chart(&hyderabad(), &ist, &nan).unwrap_err();
        assert_eq!(err, ChartError::Oracle(OracleError::NonFinite(Graha::Mangal)));
    }

    #[test]
    fn polar_birth_place_is_rejected() {
        let req = BirthRequest::parse("2000-06-21", "12:00", 89.95, 0.0).unwrap();
        let oracle = FixedGrahaReadings::from_longitudes([0.0; 9]).unwrap();
        let err = compute_birth_chart(&req, &offline(), &oracle).unwrap_err();
        assert!(matches!(err, ChartError::Vedic(_)));
    }
}
