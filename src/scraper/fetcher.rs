// fetcher.rs
use crate::scraper::{ExtractError, ThumbnailError};
use reqwest::blocking::{Client, ClientBuilder};
use std::io::Read;
use std::time::Duration;

/// Default identification header sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Network seam for the pipeline. The HTTP implementation is [`HttpFetcher`];
/// tests swap in canned pages.
pub trait PageFetcher: Send + Sync {
    /// GET a listing page and return its body as text.
    fn fetch_page(&self, url: &str) -> Result<String, ExtractError>;

    /// GET an image, refusing bodies over `max_bytes`.
    fn fetch_image(&self, url: &str, max_bytes: u64) -> Result<Vec<u8>, ThumbnailError>;
}

fn client_builder(user_agent: &str, timeout: Duration) -> ClientBuilder {
    Client::builder().user_agent(user_agent).timeout(timeout)
}

pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ExtractError> {
        Self::from_builder(client_builder(user_agent, timeout), timeout)
    }

    /// Same client, but never routed through an environment proxy.
    #[cfg(test)]
    pub fn direct(user_agent: &str, timeout: Duration) -> Result<Self, ExtractError> {
        Self::from_builder(client_builder(user_agent, timeout).no_proxy(), timeout)
    }

    fn from_builder(builder: ClientBuilder, timeout: Duration) -> Result<Self, ExtractError> {
        let client = builder
            .build()
            .map_err(|e| ExtractError::Network(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    fn classify(&self, err: reqwest::Error) -> ExtractError {
        if err.is_builder() {
            ExtractError::InvalidUrl(err.to_string())
        } else if err.is_timeout() {
            ExtractError::Timeout {
                secs: self.timeout.as_secs(),
            }
        } else {
            ExtractError::Network(err.to_string())
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&self, url: &str) -> Result<String, ExtractError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.classify(e))?;

        // Error pages are parsed like any other page; their fields come out as N/A.
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "listing page returned non-success status");
        }

        resp.text().map_err(|e| {
            if e.is_timeout() {
                ExtractError::Timeout {
                    secs: self.timeout.as_secs(),
                }
            } else {
                ExtractError::Body(e.to_string())
            }
        })
    }

    fn fetch_image(&self, url: &str, max_bytes: u64) -> Result<Vec<u8>, ThumbnailError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ThumbnailError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ThumbnailError::Network(format!("HTTP {status}")));
        }

        if resp.content_length().is_some_and(|len| len > max_bytes) {
            return Err(ThumbnailError::TooLarge { limit: max_bytes });
        }

        let mut buf = Vec::new();
        resp.take(max_bytes.saturating_add(1))
            .read_to_end(&mut buf)
            .map_err(|e| ThumbnailError::Network(e.to_string()))?;

        if buf.len() as u64 > max_bytes {
            return Err(ThumbnailError::TooLarge { limit: max_bytes });
        }

        Ok(buf)
    }
}
