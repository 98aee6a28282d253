//! HTTP client wrapper - single configured entry point to the backend

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::error::ApiError;

/// Backend client bound to a fixed base URL and default headers
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        ApiClient {
            http: create_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the body as JSON. Failures are logged here.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url_for(path);
        let start = Instant::now();
        let result = self.fetch_json(&url).await;
        let elapsed = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => tracing::debug!(url = %url, elapsed_ms = elapsed, "GET completed"),
            Err(e) => tracing::error!(url = %url, elapsed_ms = elapsed, error = %e, "API error"),
        }
        result
    }

    async fn fetch_json(&self, url: &str) -> Result<Value, ApiError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "HTTP client builder failed; using defaults without JSON header or timeout");
            reqwest::Client::new()
        })
}
