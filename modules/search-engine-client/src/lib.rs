pub mod error;
pub mod types;

pub use error::{Result, SearchEngineError};
pub use types::{
    ContentDetail, ContentDetailResponse, ContentFilter, ContentId, ContentMetrics,
    ContentStatistics, ContentSummary, ContentType, DashboardData, Envelope, HealthStatus,
    PageResult, ProviderInfo, ScoreBreakdown, SearchParams,
};

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the search-engine service's JSON API.
#[derive(Debug, Clone)]
pub struct SearchEngineClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearchEngineClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    pub fn dashboard_url(&self) -> Result<Url> {
        self.endpoint("/api/dashboard")
    }

    pub fn popular_url(&self, limit: u32) -> Result<Url> {
        let mut url = self.endpoint("/api/content/popular")?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        Ok(url)
    }

    pub fn search_url(&self, params: &SearchParams) -> Result<Url> {
        let mut url = self.endpoint("/api/search")?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params.pairs() {
                query.append_pair(key, &value);
            }
        }
        Ok(url)
    }

    pub fn content_url(&self, id: ContentId) -> Result<Url> {
        self.endpoint(&format!("/api/content/{id}"))
    }

    pub fn refresh_url(&self) -> Result<Url> {
        self.endpoint("/api/providers/refresh")
    }

    pub fn health_url(&self) -> Result<Url> {
        self.endpoint("/health")
    }

    /// Send a request and decode the envelope. Non-2xx responses become
    /// `Api` errors carrying the body's `error` field when there is one.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Envelope<T>> {
        let resp = request.send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|env| env.error)
                .unwrap_or(body);
            return Err(SearchEngineError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Aggregate statistics and configured providers.
    pub async fn dashboard(&self) -> Result<DashboardData> {
        let url = self.dashboard_url()?;
        tracing::debug!(%url, "Fetching dashboard");
        let env: Envelope<DashboardData> = self.send(self.client.get(url)).await?;
        env.into_data("dashboard")
    }

    /// Highest-scored content, at most `limit` items.
    pub async fn popular(&self, limit: u32) -> Result<Vec<ContentSummary>> {
        let url = self.popular_url(limit)?;
        tracing::debug!(%url, "Fetching popular content");
        let env: Envelope<Vec<ContentSummary>> = self.send(self.client.get(url)).await?;
        Ok(env.into_result()?.unwrap_or_default())
    }

    pub async fn search(&self, params: &SearchParams) -> Result<PageResult> {
        let url = self.search_url(params)?;
        tracing::debug!(%url, "Searching");
        let env: Envelope<PageResult> = self.send(self.client.get(url)).await?;
        env.into_data("search")
    }

    /// A content record with its score breakdown.
    pub async fn content(&self, id: ContentId) -> Result<ContentDetailResponse> {
        let url = self.content_url(id)?;
        tracing::debug!(%url, "Fetching content detail");
        let env: Envelope<ContentDetailResponse> = self.send(self.client.get(url)).await?;
        env.into_data("content")
    }

    /// Ask the backend to re-fetch content from every provider.
    pub async fn refresh_providers(&self) -> Result<()> {
        let url = self.refresh_url()?;
        tracing::info!(%url, "Requesting provider refresh");
        let env: Envelope<serde_json::Value> = self.send(self.client.post(url)).await?;
        env.into_result()?;
        Ok(())
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.health_url()?;
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SearchEngineError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }
}
