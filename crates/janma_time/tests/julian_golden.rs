//! Integration tests for Julian Day conversion and UTC normalization.

use janma_time::{
    GeoLocation, J2000_JD, LocalBirthTime, LookupError, OffsetSource, UtcMoment, julian_day,
    normalize_to_utc, offline,
};

// ---------------------------------------------------------------------------
// Julian Day
// ---------------------------------------------------------------------------

#[test]
fn jd_anchor_j2000() {
    assert_eq!(julian_day(2000, 1, 1, 12.0), J2000_JD);
}

#[test]
fn jd_reference_dates() {
    let cases: [(i32, u32, u32, f64, f64); 6] = [
        (1900, 1, 1, 0.0, 2_415_020.5),
        (1950, 6, 15, 12.0, 2_433_448.0),
        (1989, 4, 4, 15.0 + 34.0 / 60.0, 2_447_621.148_611_111),
        (1990, 1, 1, 0.0, 2_447_892.5),
        (2024, 1, 1, 12.0, 2_460_311.0),
        (2024, 3, 20, 12.0, 2_460_390.0),
    ];
    for (y, m, d, h, expected) in cases {
        let jd = julian_day(y, m, d, h);
        assert!(
            (jd - expected).abs() < 1e-8,
            "{y}-{m:02}-{d:02} {h}h: jd = {jd}, expected {expected}"
        );
    }
}

#[test]
fn jd_strictly_increasing_hourly_over_leap_year() {
    let mut prev = f64::NEG_INFINITY;
    let mut date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    while date < end {
        for h in 0..24 {
            use chrono::Datelike;
            let jd = julian_day(date.year(), date.month(), date.day(), h as f64);
            assert!(jd > prev, "jd not increasing at {date} {h}h");
            prev = jd;
        }
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn jd_strictly_increasing_across_centuries() {
    let mut prev = f64::NEG_INFINITY;
    for year in 1900..=2100 {
        for month in 1..=12 {
            let jd = julian_day(year, month, 1, 0.0);
            assert!(jd > prev, "jd not increasing at {year}-{month:02}");
            prev = jd;
        }
    }
}

// ---------------------------------------------------------------------------
// UTC normalization
// ---------------------------------------------------------------------------

#[test]
fn fallback_scenario_ten_am_at_75_east() {
    let local = LocalBirthTime::parse("2010-08-01", "10:00").unwrap();
    let loc = GeoLocation::try_new(12.0, 75.0).unwrap();
    let n = normalize_to_utc(&local, &loc, &offline());
    assert_eq!(n.moment, UtcMoment::new(2010, 8, 1, 5.0).unwrap());
    assert!(n.is_low_confidence());
}

#[test]
fn western_fallback_rolls_forward() {
    // 22:00 at 120 W → offset −8 h → 06:00 next day.
    let local = LocalBirthTime::parse("2012-02-28", "22:00").unwrap();
    let loc = GeoLocation::try_new(35.0, -120.0).unwrap();
    let n = normalize_to_utc(&local, &loc, &offline());
    assert_eq!((n.moment.month, n.moment.day), (2, 29));
    assert!((n.moment.hour - 6.0).abs() < 1e-12);
}

#[test]
fn lookup_offset_overrides_longitude() {
    // Kolkata-style: IST (+5:30) even though 88.36 E is +5:53 mean solar.
    let ist = |_: f64, _: f64, _: i64| -> Result<i32, LookupError> { Ok(19_800) };
    let local = LocalBirthTime::parse("2001-05-05", "05:30").unwrap();
    let loc = GeoLocation::try_new(22.57, 88.36).unwrap();
    let n = normalize_to_utc(&local, &loc, &ist);
    assert_eq!(n.source, OffsetSource::Lookup);
    assert_eq!(n.moment, UtcMoment::new(2001, 5, 5, 0.0).unwrap());
}
