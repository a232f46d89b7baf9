use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{
    DailyForecast, LocationInfo, LocationObservation, LocationResult, LocationWarning,
    ThreeHourlyForecast,
};

/// Documented endpoint of the BOM weather API.
pub const API_BASE_URL: &str = "https://api.weather.bom.gov.au/v1";

/// Client for the BOM weather API.
///
/// Stateless and cheap to clone; every operation is a single GET with no
/// retries, caching, or authentication. The API wraps every response body in
/// a `{"data": ...}` envelope, which [`Client::fetch`] unwraps.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Client against the real API endpoint.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Client against an alternative endpoint, e.g. a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET `base_url + path` and unwrap the `data` envelope.
    ///
    /// 400 means "not found" on this API; any other non-200 status is a
    /// generic request error. Both carry the response body. `Value::Null`
    /// stands in for a missing `data` field.
    async fn fetch(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "requesting");

        let mut request = self.http.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match status {
            StatusCode::OK => {
                let envelope: Value = serde_json::from_str(&body)?;
                Ok(envelope.get("data").cloned().unwrap_or(Value::Null))
            }
            StatusCode::BAD_REQUEST => Err(Error::NotFound { body }),
            _ => Err(Error::Request { status, body }),
        }
    }

    /// Search for locations matching `search`, in server-returned order.
    ///
    /// An empty search string returns an empty list without touching the
    /// network: the API answers it with an auth-style error (bit odd).
    pub async fn search_locations(&self, search: &str) -> Result<Vec<LocationResult>> {
        if search.is_empty() {
            return Ok(Vec::new());
        }

        let data = self.fetch("/locations", Some(&[("search", search)])).await?;
        Ok(serde_json::from_value(data)?)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for one location, identified by its geohash.
///
/// Holds no state beyond the geohash; each method is an independent
/// request/response cycle and nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Location {
    client: Client,
    geohash: String,
}

impl Location {
    pub fn from_geohash(client: &Client, geohash: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            geohash: geohash.into(),
        }
    }

    pub fn from_result(client: &Client, result: &LocationResult) -> Self {
        Self::from_geohash(client, result.geohash.clone())
    }

    pub fn geohash(&self) -> &str {
        &self.geohash
    }

    /// Observation stations and forecast areas are registered at 6-character
    /// geohash precision; info and warnings use the full geohash.
    fn station_geohash(&self) -> &str {
        self.geohash.get(..6).unwrap_or(&self.geohash)
    }

    /// Metadata for this location.
    pub async fn info(&self) -> Result<LocationInfo> {
        let data = self
            .client
            .fetch(&format!("/locations/{}", self.geohash), None)
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Warnings covering this location.
    pub async fn warnings(&self) -> Result<Vec<LocationWarning>> {
        let data = self
            .client
            .fetch(&format!("/locations/{}/warnings", self.geohash), None)
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Current conditions from the nearest station.
    pub async fn observations(&self) -> Result<LocationObservation> {
        let data = self
            .client
            .fetch(
                &format!("/locations/{}/observations", self.station_geohash()),
                None,
            )
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Daily forecast for the next seven days.
    pub async fn forecast_daily(&self) -> Result<Vec<DailyForecast>> {
        let data = self
            .client
            .fetch(
                &format!("/locations/{}/forecasts/daily", self.station_geohash()),
                None,
            )
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Three-hourly forecast for the next two days.
    pub async fn forecast_3_hourly(&self) -> Result<Vec<ThreeHourlyForecast>> {
        let data = self
            .client
            .fetch(
                &format!("/locations/{}/forecasts/3-hourly", self.station_geohash()),
                None,
            )
            .await?;
        Ok(serde_json::from_value(data)?)
    }
}
