//! Forward geocoding: city name to coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use crate::error::WeatherError;
use crate::types::Location;
use serde::Deserialize;

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    results: Option<Vec<GeocodingCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingCandidate {
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Search URL asking for the single best match for `city`.
pub fn search_url(base_url: &str, city: &str) -> String {
    format!("{}?name={}&count=1", base_url, urlencoding::encode(city))
}

impl GeocodingResponse {
    /// Take the first candidate. `city` is the name that was searched for.
    pub(crate) fn into_location(self, city: &str) -> Result<Location, WeatherError> {
        let candidate = self
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))?;

        match (candidate.latitude, candidate.longitude, candidate.name) {
            (Some(latitude), Some(longitude), Some(name)) => Ok(Location {
                name,
                latitude,
                longitude,
            }),
            _ => Err(WeatherError::malformed_geocoding()),
        }
    }
}
