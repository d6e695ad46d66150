//! Docs API client.
//!
//! [`DocsFetcher`] is the seam between dispatch and the network. The server
//! uses [`HttpDocsClient`]; tests substitute an in-memory fetcher.

use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{DispatchError, GENERIC_API_FAILURE};
use super::request::{ApiRequest, Method};
use crate::core::config::ApiConfig;

/// Performs a single [`ApiRequest`] and returns the decoded JSON body.
#[async_trait::async_trait]
pub trait DocsFetcher: Send + Sync {
    async fn fetch(&self, request: &ApiRequest) -> Result<Value, DispatchError>;
}

/// [`DocsFetcher`] backed by a shared `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct HttpDocsClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDocsClient {
    /// Build a client for `config.base_url`, identifying as `user_agent`.
    pub fn new(config: &ApiConfig, user_agent: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl DocsFetcher for HttpDocsClient {
    #[instrument(skip(self), fields(path = %request.path()))]
    async fn fetch(&self, request: &ApiRequest) -> Result<Value, DispatchError> {
        let url = request.url(&self.base_url);
        debug!("{} {}", request.method(), url);

        let builder = match request.method() {
            Method::Get => self.http.get(&url),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&body);
            warn!("Docs API returned {}: {}", status, message);
            return Err(DispatchError::remote(status.as_u16(), message));
        }

        serde_json::from_slice(&body)
            .map_err(|e| DispatchError::transport(format!("Invalid JSON in API response: {}", e)))
    }
}

/// Extract the `error` field of an API error body, if there is a usable one.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| match v.get("error") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_else(|| GENERIC_API_FAILURE.to_string())
}
