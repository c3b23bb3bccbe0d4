pub mod app;
pub mod config;
pub mod error;

pub use app::App;
pub use config::{Config, ValidationResult, WeatherConfig};
pub use error::{AppError, ConfigError};

use anyhow::Result;

/// Initialize logging.
///
/// Diagnostics go to stderr so stdout only carries the prompt and the result.
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Skycast core initialized");
    Ok(())
}
