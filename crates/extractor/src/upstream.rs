use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use interface::RateError;

/// Where the rate page comes from.
#[async_trait]
pub trait RateSource: Send + Sync {
    fn url(&self) -> &str;

    async fn fetch_html(&self) -> Result<String, RateError>;
}

#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RateError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bullion-oracle/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            url: url.into(),
            timeout,
        })
    }
}

#[async_trait]
impl RateSource for UpstreamClient {
    fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_html(&self) -> Result<String, RateError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| timeout_or_http(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| timeout_or_http(e, self.timeout))?;
        debug!("fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}

fn timeout_or_http(e: reqwest::Error, timeout: Duration) -> RateError {
    if e.is_timeout() {
        RateError::Timeout(timeout)
    } else {
        RateError::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer, timeout: Duration) -> UpstreamClient {
        UpstreamClient::new(format!("{}/LiveRates.html", server.uri()), timeout).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_html() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/LiveRates.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(10)).await;
        assert!(client.url().ends_with("/LiveRates.html"));
        assert_eq!(client.fetch_html().await.unwrap(), "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(10)).await;
        let err = client.fetch_html().await.unwrap_err();
        assert!(matches!(err, RateError::Status(503)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html></html>")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_millis(100)).await;
        let err = client.fetch_html().await.unwrap_err();
        assert!(matches!(err, RateError::Timeout(_)));
    }
}
