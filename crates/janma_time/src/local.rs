//! Local wall-clock birth input.
//!
//! Parses the `birthDate` / `birthTime` strings of the input contract into a
//! naive local date-time. Nothing here knows the zone; that is resolved by
//! [`crate::normalize_to_utc`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::TimeError;

/// Earliest supported birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Latest supported birth year (four-digit years only).
pub const MAX_BIRTH_YEAR: i32 = 9999;

/// A birth moment as read off a local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalBirthTime {
    datetime: NaiveDateTime,
}

impl LocalBirthTime {
    /// Parse a `YYYY-MM-DD` date and an `HH:MM` (or `HH:MM:SS`) time.
    pub fn parse(birth_date: &str, birth_time: &str) -> Result<Self, TimeError> {
        let date = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d")
            .map_err(|e| TimeError::MalformedDate(format!("{birth_date:?}: {e}")))?;
        let time = parse_clock(birth_time.trim())
            .ok_or_else(|| TimeError::MalformedTime(format!("{birth_time:?}")))?;
        Self::from_naive(date.and_time(time))
    }

    /// Wrap an already-built local date-time, enforcing the year range.
    pub fn from_naive(datetime: NaiveDateTime) -> Result<Self, TimeError> {
        if datetime.year() < MIN_BIRTH_YEAR {
            return Err(TimeError::DateOutOfRange(
                "birth date must be on or after 1900-01-01",
            ));
        }
        if datetime.year() > MAX_BIRTH_YEAR {
            return Err(TimeError::DateOutOfRange("birth year must be at most 9999"));
        }
        Ok(Self { datetime })
    }

    /// The local date-time.
    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Unix seconds obtained by reading the local clock as if it were UTC.
    pub fn approx_unix_utc(&self) -> i64 {
        self.datetime.and_utc().timestamp()
    }
}

fn parse_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

impl std::fmt::Display for LocalBirthTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S"))
    }
}
