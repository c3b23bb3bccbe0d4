use serde::{Deserialize, Serialize};
use skycast_weather::geocode::GEOCODING_URL;
use skycast_weather::forecast::FORECAST_URL;
use skycast_weather::Endpoints;
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// All errors joined into one line
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Weather API settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Geocoding search endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Forecast endpoint
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_url() -> String {
    GEOCODING_URL.to_string()
}

fn default_forecast_url() -> String {
    FORECAST_URL.to_string()
}

fn default_user_agent() -> String {
    format!("skycast/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl WeatherConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            geocoding_url: self.geocoding_url.clone(),
            forecast_url: self.forecast_url.clone(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory.
    ///
    /// The file is optional: a missing file (or no config directory on this
    /// platform) yields the defaults, and nothing is written back.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from `path`, falling back to defaults if it does
    /// not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Warnings are logged; any error fails the load.
    pub fn load_validated() -> Result<(Self, ValidationResult), ConfigError> {
        Self::load()?.into_validated()
    }

    fn into_validated(self) -> Result<(Self, ValidationResult), ConfigError> {
        let validation = self.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((self, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        validate_url(
            &self.weather.geocoding_url,
            "weather.geocoding_url",
            &mut result,
        );
        validate_url(
            &self.weather.forecast_url,
            "weather.forecast_url",
            &mut result,
        );

        if self.weather.user_agent.trim().is_empty() {
            result.add_error("weather.user_agent", "User agent must not be empty");
        }

        result
    }

    /// `<config dir>/skycast/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skycast").join("config.toml"))
    }
}

fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
    match Url::parse(url_str) {
        Ok(url) => {
            match url.scheme() {
                "https" => {}
                "http" => result.add_warning(field_name, "URL is not using https"),
                scheme => result.add_error(
                    field_name,
                    format!("URL must use http or https scheme, got: {}", scheme),
                ),
            }

            if url.host().is_none() {
                result.add_error(field_name, "URL must have a host");
            }

            // Query parameters are appended by the resolver
            if url.query().is_some() {
                result.add_error(field_name, "URL must not contain a query string");
            }
        }
        Err(e) => {
            result.add_error(field_name, format!("Invalid URL: {}", e));
        }
    }
}
