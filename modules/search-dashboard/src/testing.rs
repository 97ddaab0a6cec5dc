// In-memory SearchApi for driving the dashboard without a backend.
//
// MockApi answers from registered fixtures and records every request.
// Plus fixture builders for content summaries, detail records and pages.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::DateTime;
use tokio::sync::Notify;

use search_engine_client::{
    ContentDetail, ContentDetailResponse, ContentId, ContentStatistics, ContentSummary,
    ContentType, DashboardData, HealthStatus, PageResult, ProviderInfo, Result, ScoreBreakdown,
    SearchEngineError, SearchParams,
};

use crate::traits::SearchApi;

// ---------------------------------------------------------------------------
// MockApi
// ---------------------------------------------------------------------------

/// Fixture-backed API. Unregistered searches and details fail the way the
/// backend would (500 and 404). Builder pattern: `.on_dashboard()`,
/// `.on_popular()`, `.on_search()`, `.on_detail()`.
pub struct MockApi {
    dashboard: Option<DashboardData>,
    popular: Option<Vec<ContentSummary>>,
    searches: HashMap<u32, PageResult>,
    details: HashMap<ContentId, ContentDetailResponse>,
    refresh_ok: bool,
    held: Mutex<HashMap<u32, Arc<Notify>>>,
    calls: Mutex<Calls>,
}

/// Everything MockApi was asked for, in order.
#[derive(Debug, Clone, Default)]
pub struct Calls {
    pub dashboard: usize,
    pub popular: Vec<u32>,
    pub searches: Vec<SearchParams>,
    pub details: Vec<ContentId>,
    pub refreshes: usize,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            dashboard: Some(DashboardData::default()),
            popular: Some(Vec::new()),
            searches: HashMap::new(),
            details: HashMap::new(),
            refresh_ok: true,
            held: Mutex::new(HashMap::new()),
            calls: Mutex::new(Calls::default()),
        }
    }

    pub fn on_dashboard(mut self, data: DashboardData) -> Self {
        self.dashboard = Some(data);
        self
    }

    pub fn failing_dashboard(mut self) -> Self {
        self.dashboard = None;
        self
    }

    pub fn on_popular(mut self, contents: Vec<ContentSummary>) -> Self {
        self.popular = Some(contents);
        self
    }

    pub fn failing_popular(mut self) -> Self {
        self.popular = None;
        self
    }

    /// Answer searches for `page` with `result`, whatever the query.
    pub fn on_search(mut self, page: u32, result: PageResult) -> Self {
        self.searches.insert(page, result);
        self
    }

    pub fn on_detail(mut self, detail: ContentDetailResponse) -> Self {
        self.details.insert(detail.content.summary.id, detail);
        self
    }

    pub fn failing_refresh(mut self) -> Self {
        self.refresh_ok = false;
        self
    }

    /// Park searches for `page` until the returned handle is notified.
    pub fn hold_search(&self, page: u32) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.held
            .lock()
            .unwrap()
            .insert(page, Arc::clone(&notify));
        notify
    }

    pub fn calls(&self) -> Calls {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, f: impl FnOnce(&mut Calls)) {
        f(&mut self.calls.lock().unwrap());
    }
}

fn server_error(message: &str) -> SearchEngineError {
    SearchEngineError::Api {
        status: 500,
        message: message.to_string(),
    }
}

#[async_trait]
impl SearchApi for MockApi {
    async fn dashboard(&self) -> Result<DashboardData> {
        self.record(|c| c.dashboard += 1);
        self.dashboard
            .clone()
            .ok_or_else(|| server_error("Failed to load dashboard data"))
    }

    async fn popular(&self, limit: u32) -> Result<Vec<ContentSummary>> {
        self.record(|c| c.popular.push(limit));
        self.popular
            .clone()
            .ok_or_else(|| server_error("Failed to load popular content"))
    }

    async fn search(&self, params: &SearchParams) -> Result<PageResult> {
        self.record(|c| c.searches.push(params.clone()));

        let held = self.held.lock().unwrap().get(&params.page).cloned();
        if let Some(notify) = held {
            notify.notified().await;
        }

        self.searches
            .get(&params.page)
            .cloned()
            .ok_or_else(|| server_error("Search failed"))
    }

    async fn content(&self, id: ContentId) -> Result<ContentDetailResponse> {
        self.record(|c| c.details.push(id));
        self.details.get(&id).cloned().ok_or(SearchEngineError::Api {
            status: 404,
            message: "Content not found".to_string(),
        })
    }

    async fn refresh_providers(&self) -> Result<()> {
        self.record(|c| c.refreshes += 1);
        if self.refresh_ok {
            Ok(())
        } else {
            Err(server_error("Failed to refresh providers"))
        }
    }

    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "ok".to_string(),
            service: Some("search-engine-service".to_string()),
            version: None,
            uptime: None,
        })
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn summary(
    id: ContentId,
    content_type: ContentType,
    title: &str,
    score: f64,
) -> ContentSummary {
    ContentSummary {
        id,
        content_type,
        title: title.to_string(),
        description: format!("Description for {title}"),
        final_score: score,
        published_at: DateTime::parse_from_rfc3339("2024-03-05T10:00:00+03:00")
            .expect("valid fixture date"),
    }
}

/// Page `page` of a search with `total` matches at `limit` per page.
/// Contents are numbered from `(page - 1) * limit + 1`.
pub fn search_page(page: u32, limit: u32, total: u64, content_type: ContentType) -> PageResult {
    let total_pages = total.div_ceil(u64::from(limit)) as u32;
    let first = u64::from(page - 1) * u64::from(limit);
    let count = total.saturating_sub(first).min(u64::from(limit));
    let contents = (first + 1..=first + count)
        .map(|id| summary(id, content_type, &format!("Result {id}"), 40.0))
        .collect();

    PageResult {
        contents,
        page,
        total_pages,
        total,
        limit,
        has_next: page < total_pages,
        has_previous: page > 1,
    }
}

pub fn empty_page() -> PageResult {
    PageResult {
        contents: Vec::new(),
        page: 1,
        total_pages: 0,
        total: 0,
        limit: 10,
        has_next: false,
        has_previous: false,
    }
}

pub fn detail(
    id: ContentId,
    content_type: ContentType,
    title: &str,
    url: &str,
) -> ContentDetailResponse {
    ContentDetailResponse {
        content: ContentDetail {
            summary: summary(id, content_type, title, 62.5),
            url: url.to_string(),
            provider: "json_provider".to_string(),
            language: "en".to_string(),
            views: 15000,
            likes: 1200,
            duration: 1800,
            reading_time: 8,
            reactions: 340,
        },
        score_breakdown: ScoreBreakdown {
            base_score: 15.0,
            type_multiplier: 1.5,
            freshness_score: 3.0,
            engagement_score: 0.08,
            final_score: 62.5,
        },
    }
}

pub fn dashboard_data(total: u64, videos: u64, texts: u64, providers: usize) -> DashboardData {
    DashboardData {
        statistics: ContentStatistics {
            total_content: Some(total),
            video_count: Some(videos),
            text_count: Some(texts),
        },
        providers: (0..providers)
            .map(|i| ProviderInfo {
                name: format!("provider_{i}"),
                url: format!("https://provider-{i}.example.com"),
                timeout: "10s".to_string(),
            })
            .collect(),
    }
}
