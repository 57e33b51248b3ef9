//! HTTP client for the adaptor's settings endpoint

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, header::HeaderMap};
use serde_json::Value;
use tracing::info;
use url::Url;

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

/// Timeout for a single request to the adaptor
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Status, headers and parsed body of an adaptor response.
#[derive(Debug, Clone)]
pub struct SettingsResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,

    /// JSON body; `Value::Null` when the response had no body
    pub body: Value,
}

impl SettingsResponse {
    /// Value of a response header, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Client that sends settings updates to one adaptor.
#[derive(Debug, Clone)]
pub struct SettingsClient {
    http: Client,
    base_url: Url,
}

impl SettingsClient {
    /// Create a client for the adaptor at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(mut base_url: Url) -> Result<Self> {
        // Url::join replaces the last path segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the settings endpoint
    pub fn settings_url(&self) -> Result<Url> {
        self.base_url
            .join("settings")
            .context("Failed to build settings URL")
    }

    /// Send `PUT /settings` with `body`, authorized by `system_token`.
    ///
    /// Any HTTP status is returned as a [`SettingsResponse`]; only transport
    /// failures and non-JSON bodies are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the response body is
    /// not JSON.
    pub async fn put_settings(
        &self,
        body: &Value,
        system_token: &str,
    ) -> Result<SettingsResponse> {
        let url = self.settings_url()?;

        let response = self
            .http
            .put(url.clone())
            .bearer_auth(system_token)
            .json(body)
            .send()
            .await
            .with_context(|| format!("PUT {} failed", url))?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .with_context(|| format!("Response from {} is not JSON", url))?
        };

        info!(status = %status, body = %body, "Settings response");

        Ok(SettingsResponse {
            status,
            headers,
            body,
        })
    }
}
