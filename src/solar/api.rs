//! Client for the sunrise-sunset.org time-service.
//!
//! One unauthenticated request keyed by latitude/longitude, with
//! `formatted=0` so the service answers with ISO-8601 zone-qualified
//! timestamps instead of locale-formatted strings.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

use super::location::Coordinates;
use crate::constants::SOLAR_API_URL;

/// UTC sunrise and sunset instants for one location and date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarInstants {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// External service resolving solar instants for a position.
pub trait SolarTimeService {
    /// Fetch today's sunrise/sunset instants for the given coordinates.
    fn solar_instants(&self, coords: Coordinates) -> Result<SolarInstants>;

    /// Human-readable service name for log messages.
    fn service_name(&self) -> &'static str;
}

/// The `results` object of a successful sunrise-sunset.org response.
///
/// On error statuses the service sends `"results": ""` instead of an object,
/// so this is only deserialized after the status check passes.
#[derive(Debug, Deserialize)]
struct SolarResults {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

/// Production client for api.sunrise-sunset.org.
pub struct SunriseSunsetApi;

impl SunriseSunsetApi {
    fn parse_response(body: serde_json::Value) -> Result<SolarInstants> {
        let status = body
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("missing");
        if status != "OK" {
            return Err(anyhow!("solar time-service returned status {status:?}"));
        }

        let results: SolarResults = serde_json::from_value(
            body.get("results").cloned().unwrap_or(serde_json::Value::Null),
        )
        .context("malformed solar time results")?;

        Ok(SolarInstants {
            sunrise: results.sunrise,
            sunset: results.sunset,
        })
    }
}

impl SolarTimeService for SunriseSunsetApi {
    fn solar_instants(&self, coords: Coordinates) -> Result<SolarInstants> {
        // The blocking client applies a 30s timeout by default; this fetch
        // carries none, relying on platform/network defaults instead.
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("failed to build solar time HTTP client")?;

        let url = format!(
            "{SOLAR_API_URL}?lat={}&lng={}&formatted=0",
            coords.latitude, coords.longitude
        );

        let body: serde_json::Value = client
            .get(&url)
            .send()
            .context("solar time request failed")?
            .json()
            .context("malformed solar time response")?;

        Self::parse_response(body)
    }

    fn service_name(&self) -> &'static str {
        "api.sunrise-sunset.org"
    }
}
