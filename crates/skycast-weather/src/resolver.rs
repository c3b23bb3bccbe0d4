//! City name to current weather.
//!
//! Two sequential requests: geocode the name, then fetch current conditions
//! for the resolved coordinates. Both go through [`WeatherResolver::fetch_json`],
//! which owns the status policy:
//! - 429 is `RateLimited`
//! - any other non-200 is `ApiError`
//! - no response at all is `Network`

use crate::error::{Stage, WeatherError};
use crate::forecast::{self, ForecastResponse, FORECAST_URL};
use crate::geocode::{self, GeocodingResponse, GEOCODING_URL};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{CurrentConditions, Location, WeatherResult};
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Base URLs of the two APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub geocoding_url: String,
    pub forecast_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherResolver<T = ReqwestTransport> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: HttpTransport> WeatherResolver<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Resolve `city_name` to its current weather.
    ///
    /// Blank input fails with `InvalidInput` before any request is made.
    /// The forecast request is only sent once geocoding has succeeded.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve(&self, city_name: &str) -> Result<WeatherResult, WeatherError> {
        let location = self.geocode(city_name).await?;
        let conditions = self.current_conditions(&location).await?;

        let result = WeatherResult::new(location, conditions);
        tracing::info!(
            "Weather for {}: {}°C, {}",
            result.city,
            result.temperature,
            result.description
        );
        Ok(result)
    }

    /// Look up the best match for `city_name`.
    #[instrument(skip(self), level = "debug")]
    pub async fn geocode(&self, city_name: &str) -> Result<Location, WeatherError> {
        let city = city_name.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidInput);
        }

        let url = geocode::search_url(&self.endpoints.geocoding_url, city);
        let response: GeocodingResponse = self.fetch_json(&url, Stage::Geocoding).await?;
        let location = response.into_location(city)?;

        tracing::info!(
            "Resolved {} to {} ({:.4}, {:.4})",
            city,
            location.name,
            location.latitude,
            location.longitude
        );
        Ok(location)
    }

    /// Fetch current conditions at `location`.
    #[instrument(skip(self, location), fields(city = %location.name), level = "debug")]
    pub async fn current_conditions(
        &self,
        location: &Location,
    ) -> Result<CurrentConditions, WeatherError> {
        let url = forecast::current_weather_url(&self.endpoints.forecast_url, location);
        let response: ForecastResponse = self.fetch_json(&url, Stage::Forecast).await?;
        response.into_conditions()
    }

    /// GET `url` and decode the body, applying the shared status policy.
    async fn fetch_json<R: DeserializeOwned>(
        &self,
        url: &str,
        stage: Stage,
    ) -> Result<R, WeatherError> {
        tracing::debug!("{} request: {}", stage, url);

        let response = self.transport.get(url).await.map_err(|e| {
            tracing::debug!("{} request failed: {}", stage, e);
            WeatherError::from(e)
        })?;

        tracing::debug!("{} response status {}", stage, response.status);
        match response.status {
            200 => {}
            429 => {
                tracing::warn!("{} API rate limited", stage);
                return Err(WeatherError::RateLimited);
            }
            status => {
                tracing::warn!("{} API returned status {}", stage, status);
                return Err(WeatherError::ApiError { status });
            }
        }

        serde_json::from_str(&response.body).map_err(|e| {
            tracing::debug!("{} parse error: {}", stage, e);
            WeatherError::invalid_body(stage, e)
        })
    }
}

impl WeatherResolver<ReqwestTransport> {
    /// Resolver over a fresh reqwest client and the public Open-Meteo endpoints.
    pub fn with_defaults(user_agent: &str) -> Result<Self, WeatherError> {
        Ok(Self::new(ReqwestTransport::new(user_agent)?, Endpoints::default()))
    }
}
