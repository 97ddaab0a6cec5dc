use std::collections::{HashMap, HashSet};

use crate::events::EventKind;
use crate::view::{self, Node};

/// Element IDs the dashboard reads and writes.
pub mod ids {
    pub const SEARCH_INPUT: &str = "searchInput";
    pub const SEARCH_BUTTON: &str = "searchButton";
    pub const CONTENT_TYPE: &str = "contentType";
    pub const SEARCH_RESULTS: &str = "searchResults";
    pub const POPULAR_CONTENT: &str = "popularContent";
    pub const PAGINATION: &str = "pagination";
    pub const LOADING: &str = "loading";
    pub const REFRESH_BUTTON: &str = "refreshButton";
    pub const TOTAL_CONTENT: &str = "totalContent";
    pub const VIDEO_COUNT: &str = "videoCount";
    pub const TEXT_COUNT: &str = "textCount";
    pub const PROVIDER_COUNT: &str = "providerCount";
    pub const MODAL_TITLE: &str = "modalTitle";
    pub const MODAL_LINK: &str = "modalLink";
    pub const MODAL_BODY: &str = "modalBody";
    pub const CONTENT_MODAL: &str = "contentModal";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Flex,
}

/// The document the dashboard renders into, addressed by element ID.
pub trait Page {
    fn set_text(&mut self, id: &str, text: &str);

    fn set_href(&mut self, id: &str, href: &str);

    fn replace_children(&mut self, id: &str, children: Vec<Node>);

    fn set_display(&mut self, id: &str, display: Display);

    /// Current value of an input or select element; empty when unset.
    fn input_value(&self, id: &str) -> String;

    /// Blocking user notification.
    fn alert(&mut self, message: &str);

    fn open_modal(&mut self, id: &str);

    /// Smooth-scroll the window back to the top.
    fn scroll_to_top(&mut self);

    fn bind(&mut self, id: &str, kind: EventKind);

    fn is_bound(&self, id: &str, kind: EventKind) -> bool;

    fn unbind_all(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub text: Option<String>,
    pub href: Option<String>,
    pub children: Vec<Node>,
    pub display: Option<Display>,
    pub value: String,
}

/// In-memory [`Page`]. Keeps element state by ID and records alerts,
/// modal opens in order, and counts scrolls.
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: HashMap<String, ElementState>,
    alerts: Vec<String>,
    opened_modals: Vec<String>,
    scrolls: usize,
    bindings: HashSet<(String, EventKind)>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, id: &str) -> &mut ElementState {
        self.elements.entry(id.to_string()).or_default()
    }

    pub fn set_input_value(&mut self, id: &str, value: &str) {
        self.entry(id).value = value.to_string();
    }

    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.text.as_deref())
    }

    pub fn href(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.href.as_deref())
    }

    pub fn children(&self, id: &str) -> &[Node] {
        self.element(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    pub fn display(&self, id: &str) -> Option<Display> {
        self.element(id).and_then(|e| e.display)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn opened_modals(&self) -> &[String] {
        &self.opened_modals
    }

    /// Number of scroll-to-top requests so far.
    pub fn scrolls(&self) -> usize {
        self.scrolls
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Serialized children of an element, or its text when it has no children.
    pub fn inner_html(&self, id: &str) -> String {
        match self.element(id) {
            Some(e) if !e.children.is_empty() => view::to_html(&e.children),
            Some(e) => e.text.clone().map(|t| view::text(t).to_html()).unwrap_or_default(),
            None => String::new(),
        }
    }
}

impl Page for MemoryPage {
    fn set_text(&mut self, id: &str, text: &str) {
        let element = self.entry(id);
        element.children.clear();
        element.text = Some(text.to_string());
    }

    fn set_href(&mut self, id: &str, href: &str) {
        self.entry(id).href = Some(href.to_string());
    }

    fn replace_children(&mut self, id: &str, children: Vec<Node>) {
        let element = self.entry(id);
        element.text = None;
        element.children = children;
    }

    fn set_display(&mut self, id: &str, display: Display) {
        self.entry(id).display = Some(display);
    }

    fn input_value(&self, id: &str) -> String {
        self.element(id).map(|e| e.value.clone()).unwrap_or_default()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn open_modal(&mut self, id: &str) {
        self.opened_modals.push(id.to_string());
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }

    fn bind(&mut self, id: &str, kind: EventKind) {
        self.bindings.insert((id.to_string(), kind));
    }

    fn is_bound(&self, id: &str, kind: EventKind) -> bool {
        self.bindings.contains(&(id.to_string(), kind))
    }

    fn unbind_all(&mut self) {
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::el;

    #[test]
    fn replacing_children_clears_text() {
        let mut page = MemoryPage::new();
        page.set_text(ids::SEARCH_RESULTS, "old");
        page.replace_children(ids::SEARCH_RESULTS, vec![el("div").text("new").into()]);

        assert_eq!(page.text(ids::SEARCH_RESULTS), None);
        assert_eq!(page.inner_html(ids::SEARCH_RESULTS), "<div>new</div>");
    }

    #[test]
    fn text_is_escaped_in_inner_html() {
        let mut page = MemoryPage::new();
        page.set_text(ids::MODAL_TITLE, "<b>bold</b>");
        assert_eq!(page.inner_html(ids::MODAL_TITLE), "&lt;b&gt;bold&lt;/b&gt;");
    }

    #[test]
    fn unbind_all_drops_every_listener() {
        let mut page = MemoryPage::new();
        page.bind(ids::SEARCH_BUTTON, EventKind::Click);
        page.bind(ids::SEARCH_INPUT, EventKind::KeyPress);
        assert!(page.is_bound(ids::SEARCH_INPUT, EventKind::KeyPress));
        assert!(!page.is_bound(ids::SEARCH_INPUT, EventKind::Click));

        page.unbind_all();
        assert_eq!(page.binding_count(), 0);
    }

    #[test]
    fn missing_input_reads_empty() {
        let page = MemoryPage::new();
        assert_eq!(page.input_value(ids::SEARCH_INPUT), "");
    }
}
