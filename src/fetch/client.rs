//! HTTP fetcher
//!
//! Performs the single request that precedes type inference:
//! - URL normalization (blank rejection, default `https://` scheme)
//! - Default header merge with caller headers winning on equal names
//! - Status and content-type validation
//! - JSON body decoding
//!
//! Deliberately single-shot: no retries, backoff, or rate limiting.

use crate::error::{Error, Result};
use crate::types::ApiRequest;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the fetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("typequick/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }
}

impl FetcherConfig {
    /// Create a new config builder
    pub fn builder() -> FetcherConfigBuilder {
        FetcherConfigBuilder::default()
    }
}

/// Builder for fetcher config
#[derive(Default)]
pub struct FetcherConfigBuilder {
    config: FetcherConfig,
}

impl FetcherConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Build the config
    pub fn build(self) -> FetcherConfig {
        self.config
    }
}

/// Single-shot JSON fetcher
pub struct Fetcher {
    client: Client,
    config: FetcherConfig,
}

impl Fetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Self {
        Self::with_config(FetcherConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(config: FetcherConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Fetch the endpoint described by `request` and return its decoded
    /// JSON body.
    ///
    /// The response must carry a 2xx status and a JSON content type.
    pub async fn fetch_json(&self, request: &ApiRequest) -> Result<Value> {
        let url = normalize_url(&request.url)?;
        let headers = self.merge_headers(request)?;

        debug!("Fetching {} {}", request.method, url);

        let response = self
            .client
            .request(request.method.into(), url.clone())
            .headers(headers)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Request to {} failed with {}", url, status.as_u16());
            return Err(Error::http_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("").to_string(),
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("application/json") {
            return Err(Error::not_json(content_type));
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        debug!("Fetched {} bytes of JSON from {}", body.len(), url);
        Ok(value)
    }

    /// Merge caller headers over the defaults. `Content-Type:
    /// application/json` is the base; equal names from the caller win.
    fn merge_headers(&self, request: &ApiRequest) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (key, value) in &self.config.default_headers {
            insert_header(&mut headers, key, value)?;
        }
        for (key, value) in request.header_map() {
            insert_header(&mut headers, &key, &value)?;
        }

        Ok(headers)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Normalize a caller-supplied URL.
///
/// Rejects blank input, prepends `https://` when no scheme is given,
/// and validates the result.
pub fn normalize_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::BlankUrl);
    }

    let full = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    Ok(Url::parse(&full)?)
}

fn insert_header(headers: &mut HeaderMap, key: &str, value: &str) -> Result<()> {
    let name = HeaderName::from_bytes(key.as_bytes())
        .map_err(|e| Error::invalid_header(key, e.to_string()))?;
    let value =
        HeaderValue::from_str(value).map_err(|e| Error::invalid_header(key, e.to_string()))?;
    headers.insert(name, value);
    Ok(())
}
