//! Validated birth input.

use janma_time::{GeoLocation, LocalBirthTime};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Raw request body as received at an API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `HH:MM` or `HH:MM:SS`, local clock time.
    pub birth_time: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Birth moment and place, validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthRequest {
    pub local: LocalBirthTime,
    pub location: GeoLocation,
}

impl BirthRequest {
    pub fn new(local: LocalBirthTime, location: GeoLocation) -> Self {
        Self { local, location }
    }

    /// Parse and validate all four input fields.
    pub fn parse(
        birth_date: &str,
        birth_time: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ChartError> {
        let local = LocalBirthTime::parse(birth_date, birth_time)?;
        let location = GeoLocation::try_new(latitude, longitude)?;
        Ok(Self { local, location })
    }
}

impl TryFrom<&BirthInput> for BirthRequest {
    type Error = ChartError;

    fn try_from(input: &BirthInput) -> Result<Self, Self::Error> {
        Self::parse(
            &input.birth_date,
            &input.birth_time,
            input.latitude,
            input.longitude,
        )
    }
}
