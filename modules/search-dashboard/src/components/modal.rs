use search_engine_client::{ContentDetailResponse, ContentMetrics, ScoreBreakdown};
use url::Url;

use crate::format::{format_count, format_date, format_duration, format_score};
use crate::messages;
use crate::view::{el, Element, Node};

/// The URL if it is absolute http(s), otherwise `#`.
pub fn safe_href(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url.to_string(),
        _ => "#".to_string(),
    }
}

fn labelled(label: &str, value: impl Into<String>) -> Element {
    el("li")
        .child(el("strong").text(label))
        .text(format!(" {}", value.into()))
}

fn metrics_list(metrics: ContentMetrics) -> Element {
    let list = el("ul").class("list-unstyled");
    match metrics {
        ContentMetrics::Video {
            views,
            likes,
            duration_seconds,
        } => list
            .child(labelled(messages::VIEWS, format_count(views)))
            .child(labelled(messages::LIKES, format_count(likes)))
            .child(labelled(messages::DURATION, format_duration(duration_seconds))),
        ContentMetrics::Text {
            reading_time_minutes,
            reactions,
        } => list
            .child(labelled(
                messages::READING_TIME,
                format!("{reading_time_minutes} {}", messages::MINUTES),
            ))
            .child(labelled(messages::REACTIONS, format_count(reactions))),
    }
}

fn score_line(label: &str, value: f64) -> Element {
    el("p")
        .child(el("strong").text(label))
        .text(format!(" {}", format_score(value, 2)))
}

fn breakdown_card(breakdown: &ScoreBreakdown) -> Element {
    let body = el("div")
        .class("card-body")
        .child(score_line(messages::BASE_SCORE, breakdown.base_score))
        .child(score_line(messages::TYPE_MULTIPLIER, breakdown.type_multiplier))
        .child(score_line(messages::FRESHNESS_SCORE, breakdown.freshness_score))
        .child(score_line(messages::ENGAGEMENT_SCORE, breakdown.engagement_score))
        .child(el("hr"))
        .child(
            el("p")
                .child(el("strong").text(messages::FINAL_SCORE))
                .text(" ")
                .child(
                    el("span")
                        .class("badge bg-success")
                        .text(format_score(breakdown.final_score, 2)),
                ),
        );

    el("div").class("card").child(body)
}

/// Modal body for a content record: description, details, the type's
/// engagement metrics and the score breakdown.
pub fn render_detail_body(detail: &ContentDetailResponse) -> Vec<Node> {
    let content = &detail.content;
    let summary = &content.summary;

    let details = el("ul")
        .class("list-unstyled")
        .child(labelled(messages::TYPE, summary.content_type.as_str()))
        .child(labelled(messages::PROVIDER, content.provider.as_str()))
        .child(labelled(messages::PUBLISHED, format_date(&summary.published_at)))
        .child(labelled(messages::LANGUAGE, content.language.as_str()));

    let main = el("div")
        .class("col-md-8")
        .child(el("h6").text(messages::DESCRIPTION))
        .child(el("p").text(summary.description.as_str()))
        .child(el("h6").text(messages::DETAILS))
        .child(details)
        .child(metrics_list(content.metrics()));

    let side = el("div")
        .class("col-md-4")
        .child(el("h6").text(messages::SCORE_DETAILS))
        .child(breakdown_card(&detail.score_breakdown));

    vec![el("div").class("row").child(main).child(side).into()]
}
