//! Weather lookup error types.
//!
//! Every failure is recoverable from the caller's side. The `Display` text is
//! the message shown to the user; `kind()` lets callers branch without
//! matching on strings.

use thiserror::Error;

/// Discriminant of a [`WeatherError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    MalformedResponse,
    NoData,
    RateLimited,
    ApiError,
    NetworkError,
}

/// The lookup stage a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocoding,
    Forecast,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Geocoding => write!(f, "geocoding"),
            Stage::Forecast => write!(f, "forecast"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    #[error("City name must not be empty")]
    InvalidInput,

    #[error("City not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    MalformedResponse(String),

    #[error("No current weather data available")]
    NoData,

    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("API returned status {status}")]
    ApiError { status: u16 },

    #[error("Network error: {0}")]
    Network(String),
}

impl WeatherError {
    /// First geocoding candidate lacked latitude, longitude or name.
    pub fn malformed_geocoding() -> Self {
        Self::MalformedResponse("Unexpected response format in geocoding results.".to_string())
    }

    /// `current_weather` lacked temperature or weathercode.
    pub fn malformed_forecast() -> Self {
        Self::MalformedResponse(
            "Unexpected API response: missing temperature or weathercode.".to_string(),
        )
    }

    /// A 200 response whose body could not be decoded.
    pub fn invalid_body(stage: Stage, detail: impl std::fmt::Display) -> Self {
        Self::MalformedResponse(format!("Unexpected {} response body: {}", stage, detail))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput => ErrorKind::InvalidInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::NoData => ErrorKind::NoData,
            Self::RateLimited => ErrorKind::RateLimited,
            Self::ApiError { .. } => ErrorKind::ApiError,
            Self::Network(_) => ErrorKind::NetworkError,
        }
    }

    /// Whether trying again later can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Network(_))
    }

    /// Short, non-technical hint for display next to the message.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Enter a city name and try again.",
            Self::NotFound(_) => "Check the spelling of the city and try again.",
            Self::MalformedResponse(_) | Self::NoData => {
                "The weather service sent an unexpected response. Please try again."
            }
            Self::RateLimited => "Too many requests. Please wait a moment and try again.",
            Self::ApiError { status } if *status >= 500 => {
                "The weather service is experiencing issues. Please try again later."
            }
            Self::ApiError { .. } => "The weather request failed. Please try again.",
            Self::Network(_) => "Unable to connect. Check your internet connection.",
        }
    }
}

/// Failure reported by an [`HttpTransport`](crate::transport::HttpTransport)
/// before any response arrived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(error_chain(&e))
    }
}

impl From<TransportError> for WeatherError {
    fn from(e: TransportError) -> Self {
        WeatherError::Network(e.message)
    }
}

/// Render an error and its sources as `outer: inner: root`.
///
/// reqwest's own message is only "error sending request"; the useful part
/// (connection refused, dns failure) lives further down the chain.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
