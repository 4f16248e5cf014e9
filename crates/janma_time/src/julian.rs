//! Calendar date to Julian Day conversion.
//!
//! Uses the standard Gregorian-calendar formula (Meeus, "Astronomical
//! Algorithms", Ch. 7). January and February are treated as months 13 and
//! 14 of the previous year so the century correction applies cleanly.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Day for a Gregorian calendar date with fractional day.
///
/// `day_frac` is the day of month plus the elapsed fraction of the day,
/// e.g. `1.5` for noon on the 1st.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Day for a UTC date and fractional hour in [0, 24).
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    calendar_to_jd(year, month, day as f64 + hour / 24.0)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
