// SearchApi is the dashboard's only way to reach the backend.
//
// SearchEngineClient implements it over HTTP; testing::MockApi implements it
// in memory so the whole dashboard runs without a server.

use async_trait::async_trait;

use search_engine_client::{
    ContentDetailResponse, ContentId, ContentSummary, DashboardData, HealthStatus, PageResult,
    Result, SearchEngineClient, SearchParams,
};

#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn dashboard(&self) -> Result<DashboardData>;

    async fn popular(&self, limit: u32) -> Result<Vec<ContentSummary>>;

    async fn search(&self, params: &SearchParams) -> Result<PageResult>;

    async fn content(&self, id: ContentId) -> Result<ContentDetailResponse>;

    async fn refresh_providers(&self) -> Result<()>;

    async fn health(&self) -> Result<HealthStatus>;
}

#[async_trait]
impl SearchApi for SearchEngineClient {
    async fn dashboard(&self) -> Result<DashboardData> {
        self.dashboard().await
    }

    async fn popular(&self, limit: u32) -> Result<Vec<ContentSummary>> {
        self.popular(limit).await
    }

    async fn search(&self, params: &SearchParams) -> Result<PageResult> {
        self.search(params).await
    }

    async fn content(&self, id: ContentId) -> Result<ContentDetailResponse> {
        self.content(id).await
    }

    async fn refresh_providers(&self) -> Result<()> {
        self.refresh_providers().await
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.health().await
    }
}
