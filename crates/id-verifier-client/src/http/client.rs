/*
[INPUT]:  HTTP configuration (verifier base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for verifier calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::Result;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for a verifier backend
#[derive(Debug)]
pub struct VerifierClient {
    http_client: Client,
    base_url: Url,
}

impl VerifierClient {
    /// Create a new client for the given verifier base URL
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Get the verifier base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build request builder for verifier endpoints
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode the JSON response body
    ///
    /// The status line is not inspected: a body that is not valid JSON of
    /// the expected shape surfaces as a serialization error.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let text = builder.send().await?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Send a request and hand back the raw response for manual handling
    pub(crate) async fn send_raw(&self, builder: RequestBuilder) -> Result<Response> {
        Ok(builder.send().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let err = VerifierClient::new("not a url").unwrap_err();
        assert!(matches!(err, crate::http::VerifierError::UrlParse(_)));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_request_joins_endpoint() {
        let client = VerifierClient::new("http://localhost:8100").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8100/");
        let builder = client.request(Method::GET, "/statement").unwrap();
        let request = builder.build().unwrap();
        assert_eq!(request.url().path(), "/statement");
    }
}
