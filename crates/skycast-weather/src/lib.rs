//! Weather lookup for Skycast
//!
//! Resolves a city name to coordinates via the Open-Meteo geocoding API, then
//! fetches current conditions for those coordinates from the forecast API.

pub mod error;
pub mod forecast;
pub mod geocode;
pub mod resolver;
pub mod transport;
pub mod types;

pub use error::{ErrorKind, Stage, TransportError, WeatherError};
pub use resolver::{Endpoints, WeatherResolver};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use types::*;
