use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use interface::{RateError, RateSnapshot};

/// Source of finalized snapshots for the controller.
#[async_trait]
pub trait RateTransport: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateSnapshot, RateError>;
}

/// Polls the oracle's JSON endpoint.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RateError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RateTransport for HttpTransport {
    async fn fetch_rates(&self) -> Result<RateSnapshot, RateError> {
        debug!("fetching rates from {}", self.endpoint);
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| timeout_or_http(e, self.timeout))?;

        if !response.status().is_success() {
            return Err(RateError::Status(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| timeout_or_http(e, self.timeout))?;
        let snapshot: RateSnapshot = serde_json::from_slice(&body)?;

        // a payload with blank leaves is as unusable as a missing one
        if let Some(field) = snapshot.missing_field() {
            return Err(RateError::Incomplete(field));
        }
        Ok(snapshot)
    }
}

fn timeout_or_http(e: reqwest::Error, timeout: Duration) -> RateError {
    if e.is_timeout() {
        RateError::Timeout(timeout)
    } else {
        RateError::Http(e)
    }
}
