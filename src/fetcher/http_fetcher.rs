use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::app::{QuakeError, Result};
use crate::fetcher::Fetcher;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }

    pub fn with_timeouts(connect_timeout: Duration, read_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("quakereport/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        let url = parse_http_url(url)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(QuakeError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        String::from_utf8(body.to_vec())
            .map_err(|e| QuakeError::Other(format!("Response body is not UTF-8: {}", e)))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Problem retrieving the earthquake JSON results from {}: {}", url, e);
                String::new()
            }
        }
    }
}

/// Accept only absolute http(s) URLs.
pub fn parse_http_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(QuakeError::UnsupportedScheme(other.to_string())),
    }
}
