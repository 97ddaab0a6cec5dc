use search_engine_client::ContentStatistics;

use crate::page::ids;

/// Text for each statistics counter, keyed by element ID. Missing counts show 0.
pub fn statistics_text(stats: &ContentStatistics) -> [(&'static str, String); 3] {
    [
        (ids::TOTAL_CONTENT, stats.total_content.unwrap_or(0).to_string()),
        (ids::VIDEO_COUNT, stats.video_count.unwrap_or(0).to_string()),
        (ids::TEXT_COUNT, stats.text_count.unwrap_or(0).to_string()),
    ]
}

pub fn provider_count_text(count: usize) -> (&'static str, String) {
    (ids::PROVIDER_COUNT, count.to_string())
}
