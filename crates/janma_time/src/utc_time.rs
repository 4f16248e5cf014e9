//! UTC calendar date with fractional hour.
//!
//! `UtcMoment` is the birth instant after zone resolution. It is the input
//! of every downstream astronomical formula via [`UtcMoment::to_jd`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::julian_day;

/// UTC calendar date with hour as a fractional decimal in [0, 24).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: f64,
}

impl UtcMoment {
    /// Build from calendar parts, checking the date exists and `hour` is in [0, 24).
    pub fn new(year: i32, month: u32, day: u32, hour: f64) -> Result<Self, TimeError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::MalformedDate(format!(
                "{year:04}-{month:02}-{day:02} is not a calendar date"
            )));
        }
        if !(0.0..24.0).contains(&hour) {
            return Err(TimeError::MalformedTime(format!(
                "hour {hour} outside [0, 24)"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
        })
    }

    /// Read a UTC date-time.
    pub fn from_naive(utc: NaiveDateTime) -> Self {
        let secs = utc.second() as f64 + utc.nanosecond() as f64 / 1e9;
        Self {
            year: utc.year(),
            month: utc.month(),
            day: utc.day(),
            hour: utc.hour() as f64 + utc.minute() as f64 / 60.0 + secs / 3600.0,
        }
    }

    /// Julian Day of this instant.
    pub fn to_jd(&self) -> f64 {
        julian_day(self.year, self.month, self.day, self.hour)
    }
}

impl std::fmt::Display for UtcMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = ((self.hour * 3600.0).round() as u32).min(86_399);
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year,
            self.month,
            self.day,
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}
