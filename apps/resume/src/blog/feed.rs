//! Feed-to-JSON proxy client.
//!
//! The proxy turns an RSS feed URL into JSON, so no feed parser is needed.
//! Callers go through the `FeedClient` trait so tests can swap in canned
//! feeds.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::feed::{FeedItem, FeedResponse};

pub const DEFAULT_PROXY_URL: &str = "https://api.rss2json.com/v1/api.json";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed proxy returned status {0}")]
    Status(u16),

    #[error("feed proxy reported '{status}': {message}")]
    Api { status: String, message: String },

    #[error("malformed feed payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("feed payload has no items")]
    MissingItems,

    #[error("cannot derive an author handle from '{0}'")]
    NoHandle(String),
}

#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetches the entries of `feed_url`, in feed order.
    async fn fetch_items(&self, feed_url: &str) -> Result<Vec<FeedItem>, FeedError>;
}

/// Default client backed by rss2json (or any proxy with the same contract).
#[derive(Clone)]
pub struct Rss2JsonClient {
    client: Client,
    endpoint: String,
}

impl Rss2JsonClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl FeedClient for Rss2JsonClient {
    async fn fetch_items(&self, feed_url: &str) -> Result<Vec<FeedItem>, FeedError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("rss_url", feed_url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let payload: FeedResponse = serde_json::from_slice(&body)?;

        if payload.status != "ok" {
            return Err(FeedError::Api {
                message: payload.message.unwrap_or_default(),
                status: payload.status,
            });
        }

        let items = payload.items.ok_or(FeedError::MissingItems)?;
        debug!("Feed proxy returned {} items for {feed_url}", items.len());
        Ok(items)
    }
}
