use search_engine_client::{ContentSummary, PageResult};

use super::{
    score_badge, type_badge, ScoreTier, CARD_DESCRIPTION_CHARS, POPULAR_DESCRIPTION_CHARS,
};
use crate::components::panels::empty_state;
use crate::events::Action;
use crate::format::{format_date, truncate};
use crate::view::{el, Element, Node};

fn card_header(content: &ContentSummary, score_class: &str) -> Element {
    el("div")
        .class("d-flex justify-content-between align-items-start mb-2")
        .child(type_badge(content.content_type))
        .child(score_badge(content.final_score, score_class))
}

fn card_shell(content: &ContentSummary, body: Element) -> Element {
    el("div")
        .class("card content-card h-100")
        .on_click(Action::ShowDetail(content.id))
        .child(body)
}

/// Search result card. Clicking anywhere on it opens the detail modal.
pub fn content_card(content: &ContentSummary) -> Node {
    let tier = ScoreTier::from_score(content.final_score);
    let body = el("div")
        .class("card-body")
        .child(card_header(content, tier.badge_class()))
        .child(el("h6").class("card-title").text(content.title.as_str()))
        .child(
            el("p")
                .class("card-text text-muted small")
                .text(truncate(&content.description, CARD_DESCRIPTION_CHARS)),
        )
        .child(
            el("div").class("mt-auto").child(
                el("small")
                    .class("text-muted")
                    .child(el("i").class("fas fa-calendar"))
                    .text(format!(" {}", format_date(&content.published_at))),
            ),
        );

    el("div")
        .class("col-md-6 col-lg-4 mb-4")
        .child(card_shell(content, body))
        .into()
}

/// Compact card for the popular-content strip. The score badge is not tiered.
pub fn popular_card(content: &ContentSummary) -> Node {
    let body = el("div")
        .class("card-body")
        .child(card_header(content, ScoreTier::High.badge_class()))
        .child(el("h6").class("card-title").text(content.title.as_str()))
        .child(
            el("p")
                .class("card-text text-muted small")
                .text(truncate(&content.description, POPULAR_DESCRIPTION_CHARS)),
        );

    el("div")
        .class("col-md-4 mb-3")
        .child(card_shell(content, body))
        .into()
}

/// Cards for a result page, or the empty-state panel when there are none.
pub fn render_search_results(result: &PageResult) -> Vec<Node> {
    if result.contents.is_empty() {
        return vec![empty_state()];
    }
    result.contents.iter().map(content_card).collect()
}

pub fn render_popular(contents: &[ContentSummary]) -> Vec<Node> {
    contents.iter().map(popular_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Node;
    use chrono::DateTime;
    use search_engine_client::ContentType;

    fn summary(id: u64, description: &str, score: f64) -> ContentSummary {
        ContentSummary {
            id,
            content_type: ContentType::Video,
            title: format!("Video {id}"),
            description: description.to_string(),
            final_score: score,
            published_at: DateTime::parse_from_rfc3339("2024-03-05T10:00:00Z").unwrap(),
        }
    }

    fn description_of(card: &Node) -> String {
        card.find_all(&|e| e.has_class("card-text"))[0]
            .children
            .iter()
            .map(Node::text_content)
            .collect()
    }

    #[test]
    fn card_description_truncates_past_100() {
        let short = summary(1, &"x".repeat(100), 10.0);
        assert_eq!(description_of(&content_card(&short)), "x".repeat(100));

        let long = summary(2, &"y".repeat(150), 10.0);
        assert_eq!(
            description_of(&content_card(&long)),
            format!("{}...", "y".repeat(100))
        );
    }

    #[test]
    fn popular_description_truncates_past_80() {
        let short = summary(1, &"x".repeat(80), 10.0);
        assert_eq!(description_of(&popular_card(&short)), "x".repeat(80));

        let long = summary(2, &"y".repeat(81), 10.0);
        assert_eq!(
            description_of(&popular_card(&long)),
            format!("{}...", "y".repeat(80))
        );
    }

    #[test]
    fn card_carries_detail_action_and_tier() {
        let card = content_card(&summary(42, "desc", 30.0));
        let clickable = card.find_all(&|e| e.action.is_some());
        assert_eq!(clickable.len(), 1);
        assert_eq!(clickable[0].action, Some(Action::ShowDetail(42)));

        let badges = card.find_all(&|e| e.has_class("score-badge"));
        assert!(badges[0].has_class("bg-warning"));
        assert!(card.text_content().contains("30.0 puan"));
        assert!(card.text_content().contains("5 Mart 2024"));
    }

    #[test]
    fn popular_card_has_no_date_and_fixed_badge() {
        let card = popular_card(&summary(3, "desc", 5.0));
        assert!(card.find_all(&|e| e.has_class("fa-calendar")).is_empty());
        let badges = card.find_all(&|e| e.has_class("score-badge"));
        assert!(badges[0].has_class("bg-success"));
    }

    #[test]
    fn empty_result_renders_only_the_empty_state() {
        let result = PageResult {
            contents: vec![],
            page: 1,
            total_pages: 4,
            total: 0,
            limit: 10,
            has_next: false,
            has_previous: false,
        };
        let nodes = render_search_results(&result);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].find_all(&|e| e.has_class("alert-info")).len(), 1);
        assert!(nodes[0].find_all(&|e| e.has_class("content-card")).is_empty());
    }

    #[test]
    fn markup_in_titles_is_escaped() {
        let mut item = summary(1, "desc", 60.0);
        item.title = "<img src=x onerror=alert(1)>".to_string();
        let html = content_card(&item).to_html();
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
    }
}
