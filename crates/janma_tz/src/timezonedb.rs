//! TimeZoneDB `get-time-zone` client.
//!
//! Request: `GET {endpoint}?key=..&format=json&by=position&lat=..&lng=..&time=..`
//!
//! Response fields used: `status` ("OK" or "FAILED"), `message`,
//! `zoneName`, `abbreviation`, `gmtOffset` (seconds), `dst` ("0"/"1").

use std::time::Duration;

use janma_config::TimezoneConfig;
use janma_time::{LookupError, OffsetLookup};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

/// Upper bound on the connect phase, applied on top of the whole-request
/// timeout.
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Zone details returned by a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneInfo {
    pub zone_name: String,
    pub abbreviation: String,
    /// GMT offset in seconds, DST included.
    pub gmt_offset_seconds: i32,
    pub dst: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetTimeZoneResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    zone_name: String,
    #[serde(default)]
    abbreviation: String,
    gmt_offset: Option<i64>,
    #[serde(default)]
    dst: String,
}

/// Blocking TimeZoneDB client with bounded timeouts.
#[derive(Debug, Clone)]
pub struct TimezoneDbClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl TimezoneDbClient {
    /// Build a client for `endpoint` with a whole-request `timeout`.
    pub fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Result<Self, LookupError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| LookupError::Transport(format!("invalid endpoint {endpoint:?}: {e}")))?;
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT))
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            endpoint,
            api_key: api_key.to_string(),
        })
    }

    /// Build from configuration. Fails with `NotConfigured` when the
    /// lookup is disabled or has no API key.
    pub fn from_config(config: &TimezoneConfig) -> Result<Self, LookupError> {
        let key = config.usable_api_key().ok_or(LookupError::NotConfigured)?;
        Self::new(&config.endpoint, key, config.timeout())
    }

    fn request_url(&self, latitude_deg: f64, longitude_deg: f64, unix_time: i64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("format", "json")
            .append_pair("by", "position")
            .append_pair("lat", &latitude_deg.to_string())
            .append_pair("lng", &longitude_deg.to_string())
            .append_pair("time", &unix_time.to_string());
        url
    }

    /// Look up the zone in force at a position around `unix_time`.
    pub fn lookup_zone(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        unix_time: i64,
    ) -> Result<ZoneInfo, LookupError> {
        let url = self.request_url(latitude_deg, longitude_deg, unix_time);
        debug!(lat = latitude_deg, lng = longitude_deg, time = unix_time, "timezonedb request");

        let response = self.http.get(url).send().map_err(map_transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Rejected(format!("http status {status}")));
        }
        let body: GetTimeZoneResponse = response.json().map_err(map_transport)?;

        if body.status != "OK" {
            let reason = if body.message.is_empty() {
                body.status
            } else {
                body.message
            };
            return Err(LookupError::Rejected(reason));
        }
        let offset = body
            .gmt_offset
            .ok_or_else(|| LookupError::Malformed("missing gmtOffset".into()))?;
        let gmt_offset_seconds = i32::try_from(offset)
            .map_err(|_| LookupError::Malformed(format!("gmtOffset {offset} out of range")))?;

        debug!(
            zone = %body.zone_name,
            abbreviation = %body.abbreviation,
            gmt_offset = gmt_offset_seconds,
            "timezonedb response"
        );
        Ok(ZoneInfo {
            zone_name: body.zone_name,
            abbreviation: body.abbreviation,
            gmt_offset_seconds,
            dst: body.dst == "1",
        })
    }
}

fn map_transport(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout
    } else if e.is_decode() {
        LookupError::Malformed(e.to_string())
    } else {
        LookupError::Transport(e.to_string())
    }
}

impl OffsetLookup for TimezoneDbClient {
    fn gmt_offset_seconds(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        approx_unix_utc: i64,
    ) -> Result<i32, LookupError> {
        self.lookup_zone(latitude_deg, longitude_deg, approx_unix_utc)
            .map(|zone| zone.gmt_offset_seconds)
    }
}
