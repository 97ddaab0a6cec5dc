use std::ops::RangeInclusive;

use search_engine_client::PageResult;

use crate::events::Action;
use crate::messages;
use crate::view::{el, Element, Node};

/// Pages shown around `current`: two on each side, clipped to `1..=total`.
pub fn page_window(current: u32, total: u32) -> RangeInclusive<u32> {
    let start = current.saturating_sub(2).max(1);
    let end = current.saturating_add(2).min(total);
    start..=end
}

fn page_item(label: String, target: Option<u32>, state: Option<&str>) -> Element {
    let mut link = el("a").class("page-link").attr("href", "#").text(label);
    if let Some(page) = target {
        link = link.on_click(Action::ChangePage(page));
    }

    let mut item = el("li").class("page-item");
    if let Some(state) = state {
        item = item.class(state);
    }
    item.child(link)
}

/// Previous/next controls and the page window. Nothing at all for a single page.
/// A page outside `1..=total_pages` is clamped into range.
pub fn render_pagination(result: &PageResult) -> Vec<Node> {
    if result.total_pages <= 1 {
        return Vec::new();
    }

    let last = result.total_pages;
    let current = result.page.clamp(1, last);

    let previous = if current <= 1 {
        page_item(messages::PREVIOUS.to_string(), None, Some("disabled"))
    } else {
        page_item(messages::PREVIOUS.to_string(), Some(current - 1), None)
    };

    let next = if current >= last {
        page_item(messages::NEXT.to_string(), None, Some("disabled"))
    } else {
        page_item(messages::NEXT.to_string(), Some(current + 1), None)
    };

    let numbers = page_window(current, last).map(|page| {
        let state = (page == current).then_some("active");
        page_item(page.to_string(), Some(page), state)
    });

    let list = el("ul")
        .class("pagination justify-content-center")
        .child(previous)
        .children(numbers)
        .child(next);

    vec![el("nav").child(list).into()]
}
