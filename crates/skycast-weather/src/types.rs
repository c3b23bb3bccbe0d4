use serde::{Deserialize, Serialize};

/// Geocoding result for a city query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display name as returned by the geocoder (may differ in case or
    /// accents from what the user typed)
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions at a location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Degrees Celsius
    pub temperature: f64,
    /// WMO weather interpretation code
    pub weather_code: i64,
}

impl CurrentConditions {
    pub fn description(&self) -> &'static str {
        describe_weather_code(self.weather_code)
    }
}

/// Final lookup result.
///
/// Serializes as a flat `{"city", "temperature", "description"}` object, in
/// that key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub city: String,
    pub temperature: f64,
    pub description: String,
}

impl WeatherResult {
    pub fn new(location: Location, conditions: CurrentConditions) -> Self {
        Self {
            city: location.name,
            temperature: conditions.temperature,
            description: conditions.description().to_string(),
        }
    }

    /// Render as a single-line JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Map a WMO weather code to a description.
/// See: https://open-meteo.com/en/docs#weathervariables
///
/// Only the codes below are named; everything else is "Unknown".
pub fn describe_weather_code(code: i64) -> &'static str {
    match code {
        0 => "Clear sky",
        1..=3 => "Mainly clear to overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        61 | 63 | 65 => "Rain",
        71 | 73 | 75 => "Snow",
        80..=82 => "Rain showers",
        95 => "Thunderstorm",
        _ => "Unknown",
    }
}
