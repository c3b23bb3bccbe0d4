//! Current conditions from the Open-Meteo forecast API.

use crate::error::WeatherError;
use crate::types::{CurrentConditions, Location};
use serde::Deserialize;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    current_weather: Option<CurrentWeatherBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherBlock {
    temperature: Option<f64>,
    weathercode: Option<i64>,
}

/// Forecast URL requesting only current weather.
///
/// Coordinates are sent with exactly four decimals, whatever precision the
/// location carries.
pub fn current_weather_url(base_url: &str, location: &Location) -> String {
    format!(
        "{}?latitude={:.4}&longitude={:.4}&current_weather=true",
        base_url, location.latitude, location.longitude
    )
}

impl ForecastResponse {
    pub(crate) fn into_conditions(self) -> Result<CurrentConditions, WeatherError> {
        let current = self.current_weather.ok_or(WeatherError::NoData)?;

        match (current.temperature, current.weathercode) {
            (Some(temperature), Some(weather_code)) => Ok(CurrentConditions {
                temperature,
                weather_code,
            }),
            _ => Err(WeatherError::malformed_forecast()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ForecastResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_url_uses_four_decimals() {
        let location = Location {
            name: "Bangalore".to_string(),
            latitude: 12.97,
            longitude: 77.59,
        };
        assert_eq!(
            current_weather_url(FORECAST_URL, &location),
            "https://api.open-meteo.com/v1/forecast?latitude=12.9700&longitude=77.5900&current_weather=true"
        );
    }

    #[test]
    fn test_url_rounds_extra_precision() {
        let location = Location {
            name: "Somewhere".to_string(),
            latitude: -33.868820,
            longitude: 151.209296,
        };
        let url = current_weather_url("http://localhost/v1/forecast", &location);
        assert!(url.contains("latitude=-33.8688&"), "{}", url);
        assert!(url.contains("longitude=151.2093&"), "{}", url);
    }

    #[test]
    fn test_full_response() {
        let conditions = parse(
            r#"{
                "latitude": 13.0, "longitude": 77.625,
                "current_weather": {
                    "temperature": 28.5, "windspeed": 9.4, "winddirection": 270,
                    "weathercode": 1, "is_day": 1, "time": "2024-03-01T12:00"
                }
            }"#,
        )
        .into_conditions()
        .unwrap();

        assert_eq!(conditions.temperature, 28.5);
        assert_eq!(conditions.weather_code, 1);
        assert_eq!(conditions.description(), "Mainly clear to overcast");
    }

    #[test]
    fn test_missing_current_weather_is_no_data() {
        let err = parse(r#"{"latitude":13.0}"#).into_conditions().unwrap_err();
        assert_eq!(err, WeatherError::NoData);
    }

    #[test]
    fn test_missing_temperature_is_malformed() {
        let err = parse(r#"{"current_weather":{"weathercode":1}}"#)
            .into_conditions()
            .unwrap_err();
        assert_eq!(err, WeatherError::malformed_forecast());
    }

    #[test]
    fn test_missing_weathercode_is_malformed() {
        let err = parse(r#"{"current_weather":{"temperature":3.5}}"#)
            .into_conditions()
            .unwrap_err();
        assert_eq!(err, WeatherError::malformed_forecast());
    }
}
