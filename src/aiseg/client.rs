use crate::config::Aiseg2Config;
use crate::error::{ConfigError, FetchError};
use diqwest::WithDigestAuth;
use reqwest::Client as HttpClient;
use scraper::Html;
use std::time::Duration;
use tokio::time;

/// Digest-authenticated HTTP client for the AiSEG2 web interface.
///
/// Holds only connection settings and credentials; responses are never
/// cached, so one instance can be shared by every extractor of a run.
pub struct Client {
    http_client: HttpClient,
    base_url: String,
    user: String,
    password: String,
    timeout: Duration,
}

impl Client {
    /// Creates a client, rejecting an empty host, user or password.
    pub fn new(config: Aiseg2Config) -> Result<Self, ConfigError> {
        if config.host.is_empty() {
            return Err(ConfigError::missing("AISEG2_HOST"));
        }
        if config.user.is_empty() {
            return Err(ConfigError::missing("AISEG2_USER"));
        }
        if config.password.is_empty() {
            return Err(ConfigError::missing("AISEG2_PASSWORD"));
        }

        // the whole fetch, digest handshake included, is bounded in `get`
        let http_client = HttpClient::builder()
            .build()
            .map_err(|e| ConfigError::invalid("http_client", e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url(),
            timeout: config.timeout(),
            user: config.user,
            password: config.password,
        })
    }

    /// Fetches `path` and returns the response body.
    pub async fn get(&self, path: &str) -> Result<String, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Fetching page");

        match time::timeout(self.timeout, self.send(&url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout.as_secs())),
        }
    }

    /// Fetches `path` and parses the body as an HTML document.
    pub async fn fetch_document(&self, path: &str) -> Result<Html, FetchError> {
        let body = self.get(path).await?;
        Ok(Html::parse_document(&body))
    }

    async fn send(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http_client
            .get(url)
            .header("user-agent", "reqwest")
            .send_with_digest_auth(&self.user, &self.password)
            .await
            .map_err(|e| FetchError::request(url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::request(url, e))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(FetchError::from_status(status, body))
        }
    }
}
