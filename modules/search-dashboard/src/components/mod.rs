use search_engine_client::ContentType;

use crate::format::score_label;
use crate::view::{el, Element};

pub mod cards;
pub mod modal;
pub mod pagination;
pub mod panels;
pub mod stats;

pub use cards::{content_card, popular_card, render_popular, render_search_results};
pub use modal::{render_detail_body, safe_href};
pub use pagination::{page_window, render_pagination};
pub use panels::{empty_state, error_panel};
pub use stats::{provider_count_text, statistics_text};

/// Card description lengths.
pub const CARD_DESCRIPTION_CHARS: usize = 100;
pub const POPULAR_DESCRIPTION_CHARS: usize = 80;

/// Display bucket for a content item's final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score > 50.0 {
            ScoreTier::High
        } else if score > 25.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ScoreTier::High => "bg-success",
            ScoreTier::Medium => "bg-warning",
            ScoreTier::Low => "bg-secondary",
        }
    }
}

fn type_style(content_type: ContentType) -> (&'static str, &'static str) {
    match content_type {
        ContentType::Video => ("fas fa-video", "bg-danger"),
        ContentType::Text => ("fas fa-file-alt", "bg-primary"),
    }
}

/// Icon plus type label.
pub(crate) fn type_badge(content_type: ContentType) -> Element {
    let (icon, badge) = type_style(content_type);
    el("span")
        .class("badge type-badge")
        .class(badge)
        .child(el("i").class(icon))
        .text(format!(" {content_type}"))
}

pub(crate) fn score_badge(score: f64, badge_class: &str) -> Element {
    el("span")
        .class("badge score-badge")
        .class(badge_class)
        .text(score_label(score))
}
