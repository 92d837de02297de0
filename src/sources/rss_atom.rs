use std::time::Duration;

use feed_rs::parser;
use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::{RawEntry, Source};
use crate::errors::{FeederError, FeederResult};
use crate::sources::traits::FeedFetcher;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_USER_AGENT: &str = concat!("fashion-feeder/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Fetches RSS, Atom and JSON feeds over HTTP, one attempt per call
pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    pub fn new(config: &FetchConfig) -> FeederResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FeederError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    fn fetch_bytes(&self, url: &str) -> FeederResult<Vec<u8>> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeederError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }

    /// Parse raw feed bytes into at most `limit` entries
    pub fn entries_from_bytes(bytes: &[u8], limit: usize) -> FeederResult<Vec<RawEntry>> {
        let feed = parser::parse(bytes)?;
        let source_title = feed.title.map(|t| t.content);

        let entries = feed
            .entries
            .into_iter()
            .take(limit)
            .map(|entry| {
                let link = entry.links.into_iter().next().map(|l| l.href);

                let raw_summary = entry
                    .summary
                    .map(|s| s.content)
                    .or_else(|| entry.content.and_then(|c| c.body));

                RawEntry {
                    title: entry.title.map(|t| t.content),
                    link,
                    raw_summary,
                    source_title: source_title.clone(),
                    published: entry.published.or(entry.updated),
                }
            })
            .collect();

        Ok(entries)
    }
}

impl FeedFetcher for HttpFeedFetcher {
    fn fetch(&self, source: &Source, limit: usize) -> FeederResult<Vec<RawEntry>> {
        let bytes = self.fetch_bytes(&source.url)?;
        debug!("Fetched {} bytes from {}", bytes.len(), source.url);

        Self::entries_from_bytes(&bytes, limit)
    }
}
