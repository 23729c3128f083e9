//! Current-position acquisition via IP geolocation.
//!
//! The position is requested exactly once per process lifetime, with a
//! bounded acquisition timeout. Any failure is reported to the caller, which
//! degrades to the fallback boundary times.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::time::Duration;

use crate::constants::{GEOLOCATION_TIMEOUT_SECS, GEOLOCATION_URL};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Source of the current geographic position.
pub trait LocationProvider {
    /// Acquire the current position, or fail within the acquisition timeout.
    fn current_position(&self) -> Result<Coordinates>;
}

/// Response from the ip-api.com geolocation endpoint.
///
/// On failure the service still answers 200 with `status: "fail"` and a
/// `message` field, so all coordinate fields must be optional.
#[derive(Debug, Deserialize)]
struct GeoLookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl GeoLookupResponse {
    fn into_coordinates(self) -> Result<Coordinates> {
        if self.status != "success" {
            return Err(anyhow!(
                "geolocation service reported failure: {}",
                self.message.as_deref().unwrap_or("unknown reason")
            ));
        }

        match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(anyhow!("geolocation response missing coordinates")),
        }
    }
}

/// IP-based geolocation over HTTP.
pub struct IpLocationProvider {
    client: reqwest::blocking::Client,
}

impl IpLocationProvider {
    /// Build the provider.
    ///
    /// Failure here means no HTTP client could be constructed at all, which
    /// callers treat as the location capability being unavailable.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(GEOLOCATION_TIMEOUT_SECS))
            .build()
            .context("failed to build geolocation HTTP client")?;
        Ok(Self { client })
    }
}

impl LocationProvider for IpLocationProvider {
    fn current_position(&self) -> Result<Coordinates> {
        let response: GeoLookupResponse = self
            .client
            .get(GEOLOCATION_URL)
            .send()
            .context("geolocation request failed")?
            .json()
            .context("malformed geolocation response")?;

        response.into_coordinates()
    }
}
