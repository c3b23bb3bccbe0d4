//! HTTP transport seam.
//!
//! The resolver only ever issues GET requests and needs the status code plus
//! the body text, so the seam is that narrow. Tests substitute their own
//! implementation; production uses [`ReqwestTransport`].

use crate::error::TransportError;
use reqwest::Client;
use std::sync::Arc;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues GET requests on behalf of the resolver.
///
/// Calls are made one at a time; implementations need not support
/// concurrent use beyond what `Send + Sync` implies.
pub trait HttpTransport: Send + Sync {
    /// Fetch `url`. Any completed response, whatever its status, is `Ok`;
    /// `Err` is reserved for failures where no response arrived.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] over a shared `reqwest::Client`.
///
/// No request timeout is configured; the client default applies.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Arc<Client>,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self::with_client(client))
    }

    /// Wrap an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(header("User-Agent", "skycast-test"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new("skycast-test").unwrap();
        let response = transport
            .get(&format!("{}/v1/search", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(response, HttpResponse::new(200, "{\"ok\":true}"));
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new("skycast-test").unwrap();
        let response = transport.get(&mock_server.uri()).await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, "boom");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop a listener to get a port nobody is listening on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::new("skycast-test").unwrap();
        let result = transport.get(&format!("http://{}/", addr)).await;

        let err = result.unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
