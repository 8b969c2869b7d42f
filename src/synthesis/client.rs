//! reqwest-backed synthesis transport.

use super::types::{SynthesisRequest, SynthesisResult};
use super::{SynthesisTransport, DEFAULT_ENDPOINT_PATH};
use crate::config::ConsoleConfig;
use crate::error::TransportError;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Correlation header sent with every attempt.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client for the synthesis endpoint.
pub struct HttpSynthesisClient {
    http_client: reqwest::Client,
    endpoint: Url,
}

impl HttpSynthesisClient {
    pub fn builder() -> HttpSynthesisClientBuilder {
        HttpSynthesisClientBuilder::new()
    }

    pub fn from_config(config: &ConsoleConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .base_url(config.base_url.clone())
            .endpoint_path(config.endpoint_path.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl SynthesisTransport for HttpSynthesisClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult> {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(
            endpoint = %self.endpoint,
            request_id = %request_id,
            voice = %request.voice,
            format = %request.format,
            chars = request.text.chars().count(),
            "sending synthesis request"
        );
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .header(REQUEST_ID_HEADER, &request_id)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        tracing::debug!(
            request_id = %request_id,
            status = status.as_u16(),
            bytes = bytes.len(),
            "synthesis response received"
        );
        SynthesisResult::from_response(status.as_u16(), &bytes)
    }
}

pub struct HttpSynthesisClientBuilder {
    base_url: Option<String>,
    endpoint_path: Option<String>,
    timeout: Option<Duration>,
}

impl HttpSynthesisClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            endpoint_path: None,
            timeout: None,
        }
    }

    /// Origin serving the endpoint, e.g. "http://localhost:5000".
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = Some(path.into());
        self
    }

    /// Requests wait indefinitely unless a timeout is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<HttpSynthesisClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("Base URL must be specified"))?;
        let base = Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(base_url.clone()),
            )
        })?;
        let endpoint_path = self
            .endpoint_path
            .unwrap_or_else(|| DEFAULT_ENDPOINT_PATH.to_string());
        let endpoint_path = if endpoint_path.starts_with('/') {
            endpoint_path
        } else {
            format!("/{}", endpoint_path)
        };
        let endpoint = base.join(&endpoint_path).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid endpoint path: {}", e),
                ErrorContext::new()
                    .with_field_path("endpoint_path")
                    .with_details(endpoint_path.clone()),
            )
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(HttpSynthesisClient {
            http_client,
            endpoint,
        })
    }
}

impl Default for HttpSynthesisClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_joined_onto_base() {
        let client = HttpSynthesisClient::builder()
            .base_url("http://localhost:5000")
            .endpoint_path("api/tts")
            .build()
            .unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:5000/api/tts");
    }

    #[test]
    fn default_endpoint_path() {
        let client = HttpSynthesisClient::builder()
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(client.endpoint().path(), "/api/tts");
    }

    #[test]
    fn missing_or_invalid_base_url() {
        assert!(matches!(
            HttpSynthesisClient::builder().build(),
            Err(Error::Configuration { .. })
        ));
        let err = HttpSynthesisClient::builder()
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("base_url")
        );
    }
}
