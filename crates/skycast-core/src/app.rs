use skycast_weather::{ReqwestTransport, WeatherError, WeatherResolver, WeatherResult};

use crate::{AppError, Config};

/// Application state: loaded configuration and a resolver over one shared
/// HTTP client.
pub struct App {
    config: Config,
    resolver: WeatherResolver,
}

impl App {
    /// Create a new application instance from the user's config file (or
    /// defaults).
    pub fn new() -> Result<Self, AppError> {
        let (config, _) = Config::load_validated()?;
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(&config.weather.user_agent)?;
        let resolver = WeatherResolver::new(transport, config.weather.endpoints());

        tracing::debug!(
            "Using geocoding {} and forecast {}",
            config.weather.geocoding_url,
            config.weather.forecast_url
        );

        Ok(Self { config, resolver })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current weather for `city`.
    pub async fn lookup(&self, city: &str) -> Result<WeatherResult, WeatherError> {
        self.resolver.resolve(city).await
    }
}
