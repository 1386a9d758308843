//! Client for the market stats service's completed-fills endpoint
//!
//! Endpoint: `GET {base}/completeFills?market={id}&limit={n}&offset={k}`
//! returning `{ fills, total, hasMore }`.
pub mod types;

pub use self::types::{FillsPage, RawFill};

use crate::apis::client::{HttpClient, RateLimiter};
use crate::arguments::is_debug_api_enabled;
use crate::config::FeedConfig;
use crate::errors::FundingError;
use crate::funding::FillSource;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use std::time::Instant;

const ENDPOINT: &str = "completeFills";

pub struct FillsClient {
    http: HttpClient,
    limiter: RateLimiter,
    feed: FeedConfig,
}

impl FillsClient {
    pub fn new(feed: &FeedConfig) -> Result<Self, FundingError> {
        feed.validate()?;

        Ok(Self {
            http: HttpClient::new(feed.timeout_secs)?,
            limiter: RateLimiter::new(feed.rate_limit_per_minute),
            feed: feed.clone(),
        })
    }
}

#[async_trait]
impl FillSource for FillsClient {
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<FillsPage, FundingError> {
        let url = self.feed.page_url(limit, offset);

        logger::debug(
            LogTag::Api,
            &format!("[FILLS] GET {} (limit={}, offset={})", ENDPOINT, limit, offset),
        );

        self.limiter.acquire().await;

        let start = Instant::now();
        let response = self
            .http
            .client()
            .get(&url)
            .send()
            .await
            .map_err(|e| FundingError::from_reqwest(ENDPOINT, &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            logger::error(
                LogTag::Api,
                &format!("[FILLS] HTTP {} at offset {}: {}", status, offset, body),
            );
            return Err(FundingError::Fetch {
                endpoint: ENDPOINT.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FundingError::from_reqwest(ENDPOINT, &e))?;

        if is_debug_api_enabled() {
            logger::debug(
                LogTag::Api,
                &format!(
                    "[FILLS] offset={} -> {} bytes in {}ms",
                    offset,
                    body.len(),
                    start.elapsed().as_millis()
                ),
            );
        }

        logger::verbose(
            LogTag::Api,
            &format!("[FILLS] body: {}", body.chars().take(300).collect::<String>()),
        );

        serde_json::from_str::<FillsPage>(&body).map_err(|e| FundingError::Decode {
            endpoint: ENDPOINT.to_string(),
            message: e.to_string(),
        })
    }
}
