use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SearchEngineError};

pub type ContentId = u64;

// --- Envelope ---

/// The `{success, data}` wrapper every `/api` endpoint returns.
/// Error responses carry `error` instead of `success`, so `success` defaults to false.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Reject a `success: false` envelope, keeping whatever payload it had otherwise.
    pub fn into_result(self) -> Result<Option<T>> {
        if !self.success {
            let reason = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "success flag not set".to_string());
            return Err(SearchEngineError::Rejected(reason));
        }
        Ok(self.data)
    }

    pub fn into_data(self, what: &'static str) -> Result<T> {
        self.into_result()?.ok_or(SearchEngineError::MissingData(what))
    }
}

/// Go encodes nil slices as `null`.
fn nullable_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Content ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Text,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Text => "text",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` query parameter of `/api/search`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFilter {
    #[default]
    All,
    Video,
    Text,
}

impl ContentFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFilter::All => "all",
            ContentFilter::Video => "video",
            ContentFilter::Text => "text",
        }
    }
}

impl fmt::Display for ContentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(ContentFilter::All),
            "video" => Ok(ContentFilter::Video),
            "text" => Ok(ContentFilter::Text),
            other => Err(format!("unknown content type '{other}' (expected all, video or text)")),
        }
    }
}

/// A content item as listed in search results and popular content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSummary {
    pub id: ContentId,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub final_score: f64,
    pub published_at: DateTime<FixedOffset>,
}

/// Full content record from `/api/content/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDetail {
    #[serde(flatten)]
    pub summary: ContentSummary,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    /// Seconds.
    #[serde(default)]
    pub duration: u64,
    /// Minutes.
    #[serde(default)]
    pub reading_time: u64,
    #[serde(default)]
    pub reactions: u64,
}

/// The engagement fields that apply to a detail record's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMetrics {
    Video {
        views: u64,
        likes: u64,
        duration_seconds: u64,
    },
    Text {
        reading_time_minutes: u64,
        reactions: u64,
    },
}

impl ContentDetail {
    pub fn metrics(&self) -> ContentMetrics {
        match self.summary.content_type {
            ContentType::Video => ContentMetrics::Video {
                views: self.views,
                likes: self.likes,
                duration_seconds: self.duration,
            },
            ContentType::Text => ContentMetrics::Text {
                reading_time_minutes: self.reading_time,
                reactions: self.reactions,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub type_multiplier: f64,
    pub freshness_score: f64,
    pub engagement_score: f64,
    pub final_score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentDetailResponse {
    pub content: ContentDetail,
    pub score_breakdown: ScoreBreakdown,
}

// --- Search ---

/// Query parameters for `/api/search`, serialized in `q, type, page, limit` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub content_type: ContentFilter,
    pub page: u32,
    pub limit: u32,
}

impl SearchParams {
    pub fn pairs(&self) -> [(&'static str, String); 4] {
        [
            ("q", self.query.clone()),
            ("type", self.content_type.as_str().to_string()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageResult {
    #[serde(default, deserialize_with = "nullable_vec")]
    pub contents: Vec<ContentSummary>,
    pub page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
}

impl PageResult {
    /// `1 <= page <= total_pages` whenever there is at least one page.
    pub fn is_consistent(&self) -> bool {
        self.total_pages == 0 || (1..=self.total_pages).contains(&self.page)
    }
}

// --- Dashboard ---

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentStatistics {
    #[serde(default)]
    pub total_content: Option<u64>,
    #[serde(default)]
    pub video_count: Option<u64>,
    #[serde(default)]
    pub text_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProviderInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timeout: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub statistics: ContentStatistics,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub providers: Vec<ProviderInfo>,
}

/// `/health` response; not enveloped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub uptime: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_body_without_success_is_rejected() {
        let env: Envelope<DashboardData> =
            serde_json::from_value(json!({"error": "Failed to load dashboard data"})).unwrap();
        match env.into_data("dashboard") {
            Err(SearchEngineError::Rejected(msg)) => {
                assert_eq!(msg, "Failed to load dashboard data")
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn successful_envelope_without_data_is_missing_data() {
        let env: Envelope<PageResult> = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(matches!(
            env.into_data("search"),
            Err(SearchEngineError::MissingData("search"))
        ));
    }

    #[test]
    fn detail_flattens_summary_and_defaults_metrics() {
        let detail: ContentDetail = serde_json::from_value(json!({
            "id": 7,
            "type": "text",
            "title": "Rust ownership",
            "description": "Borrowing explained",
            "url": "https://example.com/articles/7",
            "provider": "xml_provider",
            "language": "en",
            "reading_time": 8,
            "final_score": 31.5,
            "published_at": "2024-03-05T10:00:00Z",
            "tags": "rust,ownership"
        }))
        .unwrap();

        assert_eq!(detail.summary.id, 7);
        assert_eq!(detail.summary.content_type, ContentType::Text);
        assert_eq!(
            detail.metrics(),
            ContentMetrics::Text {
                reading_time_minutes: 8,
                reactions: 0
            }
        );
    }

    #[test]
    fn null_slices_become_empty() {
        let result: PageResult = serde_json::from_value(json!({
            "contents": null,
            "page": 1,
            "total_pages": 0
        }))
        .unwrap();
        assert!(result.contents.is_empty());
        assert!(result.is_consistent());

        let dashboard: DashboardData = serde_json::from_value(json!({
            "statistics": {"total_content": 12},
            "providers": null
        }))
        .unwrap();
        assert!(dashboard.providers.is_empty());
        assert_eq!(dashboard.statistics.video_count, None);
    }

    #[test]
    fn page_past_the_end_is_inconsistent() {
        let result = PageResult {
            contents: vec![],
            page: 4,
            total_pages: 3,
            total: 25,
            limit: 10,
            has_next: false,
            has_previous: true,
        };
        assert!(!result.is_consistent());
    }

    #[test]
    fn filter_parses_select_values() {
        assert_eq!("video".parse::<ContentFilter>().unwrap(), ContentFilter::Video);
        assert_eq!("".parse::<ContentFilter>().unwrap(), ContentFilter::All);
        assert_eq!(" TEXT ".parse::<ContentFilter>().unwrap(), ContentFilter::Text);
        assert!("audio".parse::<ContentFilter>().is_err());
    }
}
