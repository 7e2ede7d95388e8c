// src/core/net.rs

// Blocking HTTP GET against a fixed origin. No retries, no caching.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::config::options::ScrapeOptions;
use crate::error::FetchError;

/// Anything that can turn a site-relative path into a page body.
pub trait Fetch {
    fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    origin: String,
}

impl HttpFetcher {
    pub fn new(origin: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_options(opts: &ScrapeOptions) -> Result<Self, FetchError> {
        Self::new(&opts.origin, opts.timeout)
    }

    pub fn url_for(&self, path: &str) -> String {
        join!(&self.origin, path)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Request { url: url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        resp.text().map_err(|source| FetchError::Body { url, source })
    }
}
