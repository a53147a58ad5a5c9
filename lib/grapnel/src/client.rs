//! HTTP transport executor using hyper-util.

use std::collections::HashMap;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};

use crate::{
    Error, RawResponse, Request, Result, Transport,
    config::{ClientConfig, ClientConfigBuilder},
    connector::https_connector,
};

/// Pooled HTTP transport executor over a rustls HTTPS connector.
///
/// Implements [`Transport`]: one call, one round trip. Retries, backoff,
/// and redirect handling are not this layer's concern.
///
/// # Example
///
/// ```ignore
/// use grapnel::HyperClient;
/// use std::time::Duration;
///
/// let client = HyperClient::builder()
///     .default_timeout(Duration::from_secs(30))
///     .build();
/// ```
#[derive(Clone)]
pub struct HyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(https_connector());

        Self { inner, config }
    }

    /// Create a client builder.
    #[must_use]
    pub fn builder() -> HyperClientBuilder {
        HyperClientBuilder::default()
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a hyper request from an assembled grapnel request.
    fn build_hyper_request(request: &Request) -> Result<http::Request<Full<Bytes>>> {
        let mut builder = http::Request::builder()
            .method(http::Method::from(request.method()))
            .uri(request.url().as_str());

        for (name, values) in request.headers() {
            for value in values {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        builder
            .body(Full::new(request.body().clone()))
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    /// Extract response headers as a multi-valued map.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            if let Ok(value) = value.to_str() {
                map.entry(name.to_string()).or_default().push(value.to_string());
            }
        }
        map
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }

    async fn round_trip(&self, request: Request) -> Result<RawResponse> {
        let deadline = request.deadline().or(self.config.default_timeout);
        let hyper_request = Self::build_hyper_request(&request)?;

        tracing::debug!(method = %request.method(), url = %request.url(), "executing request");

        let pending = self.inner.request(hyper_request);
        let response = match deadline {
            Some(deadline) => tokio::time::timeout(deadline, pending)
                .await
                .map_err(|_| Error::Timeout)?,
            None => pending.await,
        }
        .map_err(Self::map_hyper_error)?;

        let status = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();

        tracing::debug!(status, bytes = body.len(), "received response");

        Ok(RawResponse::new(status, headers, body))
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HyperClient {
    async fn execute(&self, request: Request) -> Result<RawResponse> {
        self.round_trip(request).await
    }
}

/// Builder for [`HyperClient`].
#[derive(Debug, Clone, Default)]
pub struct HyperClientBuilder {
    config: ClientConfigBuilder,
}

impl HyperClientBuilder {
    /// Set the default request timeout for calls without a deadline.
    #[must_use]
    pub const fn default_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.default_timeout(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config = self.config.pool_idle_per_host(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.pool_idle_timeout(timeout);
        self
    }

    /// Build the client.
    #[must_use]
    pub fn build(self) -> HyperClient {
        HyperClient::with_config(self.config.build())
    }
}
