//! RealTime Trains HTTP client.
//!
//! Provides async methods for querying the RTT JSON API. Handles basic
//! auth, per-request timeouts, and retries on transient failures.

use tracing::{info, warn};

use super::error::RttError;
use super::types::{DepartureRecord, SearchResponse};

/// Default base URL for the RTT JSON API.
const DEFAULT_BASE_URL: &str = "https://api.rtt.io/api/v1/json";

/// Default per-request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 500;

/// Default number of retries after a transient failure.
const DEFAULT_RETRIES: u32 = 3;

/// Configuration for the RTT client.
///
/// Constructed once and handed to [`RttClient::new`]; timeout and retry
/// settings are fixed for the lifetime of the client rather than being
/// ambient process state.
#[derive(Debug, Clone)]
pub struct RttConfig {
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Base URL for the API (defaults to production RTT).
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Retries after a transient transport failure.
    pub retries: u32,
}

impl RttConfig {
    /// Create a new config with the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: DEFAULT_RETRIES,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = ms;
        self
    }

    /// Set the retry count.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }
}

/// RealTime Trains API client.
#[derive(Debug, Clone)]
pub struct RttClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
    retries: u32,
}

impl RttClient {
    /// Create a new RTT client with the given configuration.
    pub fn new(config: RttConfig) -> Result<Self, RttError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            username: config.username,
            password: config.password,
            retries: config.retries,
        })
    }

    /// Get departures from a station, optionally filtered to those
    /// calling at a destination.
    ///
    /// A response with no `services` field means no departures; this
    /// returns an empty list rather than an error.
    pub async fn search_departures(
        &self,
        from: &str,
        to: Option<&str>,
    ) -> Result<Vec<DepartureRecord>, RttError> {
        let path = match to {
            Some(to) => format!("search/{from}/to/{to}"),
            None => format!("search/{from}"),
        };

        let body = self.get(&path).await?;

        let response: SearchResponse =
            serde_json::from_str(&body).map_err(|e| RttError::Json {
                message: e.to_string(),
            })?;

        Ok(response.services.unwrap_or_default())
    }

    /// Get information about a specific service on a given run date.
    ///
    /// The payload is passed through unparsed; the facade re-emits it
    /// as-is.
    pub async fn service_info(
        &self,
        service_id: &str,
        run_date: &str,
    ) -> Result<serde_json::Value, RttError> {
        let (year, month, day) = split_run_date(run_date)?;
        let path = format!("service/{service_id}/{year}/{month}/{day}");

        let body = self.get(&path).await?;

        serde_json::from_str(&body).map_err(|e| RttError::Json {
            message: e.to_string(),
        })
    }

    /// Perform a GET against the API, retrying transient failures.
    ///
    /// Non-2xx responses are not retried; only transport-level failures
    /// (connection errors, timeouts) are.
    async fn get(&self, path: &str) -> Result<String, RttError> {
        let url = format!("{}/{}", self.base_url, path);
        info!(%url, "fetching from RTT");

        let mut attempt = 0;
        let response = loop {
            let result = self
                .http
                .get(&url)
                .basic_auth(&self.username, Some(&self.password))
                .send()
                .await;

            match result {
                Ok(response) => break response,
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    warn!(%url, attempt, error = %e, "transient RTT failure, retrying");
                }
                Err(e) => {
                    warn!(%url, error = %e, "RTT request failed");
                    return Err(RttError::Http(e));
                }
            }
        };

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "RTT returned an error status");
            return Err(RttError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

/// Split a `YYYY-MM-DD` run date into year, month, and day substrings.
///
/// Uses fixed character offsets, so any separator is accepted as long
/// as the digits are where `YYYY-MM-DD` puts them.
fn split_run_date(run_date: &str) -> Result<(&str, &str, &str), RttError> {
    let year = run_date.get(0..4);
    let month = run_date.get(5..7);
    let day = run_date.get(8..10);

    match (year, month, day) {
        (Some(y), Some(m), Some(d)) => Ok((y, m, d)),
        _ => Err(RttError::InvalidRunDate(run_date.to_string())),
    }
}
