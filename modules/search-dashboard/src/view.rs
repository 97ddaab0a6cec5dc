//! Structured view nodes.
//!
//! Renderers build [`Node`] trees instead of markup strings. Text and
//! attribute values are escaped only when a tree is serialized with
//! [`Node::to_html`], so record fields can never inject markup.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::events::Action;

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub action: Option<Action>,
    pub children: Vec<Node>,
}

pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        classes: Vec::new(),
        attrs: Vec::new(),
        action: None,
        children: Vec::new(),
    }
}

pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    /// Add one or more space-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Every element in the tree (pre-order, including this one) matching `pred`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(pred, &mut found);
        found
    }

    fn walk<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Node::Element(e) = self {
            if pred(e) {
                found.push(e);
            }
            for c in &e.children {
                c.walk(pred, found);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&encode_text(t)),
            Node::Element(e) => {
                out.push('<');
                out.push_str(e.tag);
                if !e.classes.is_empty() {
                    let classes = e.classes.join(" ");
                    let _ = write!(out, " class=\"{}\"", encode_double_quoted_attribute(&classes));
                }
                for (name, value) in &e.attrs {
                    let _ = write!(out, " {name}=\"{}\"", encode_double_quoted_attribute(value));
                }
                match e.action {
                    Some(Action::ShowDetail(id)) => {
                        let _ = write!(
                            out,
                            " data-action=\"show-detail\" data-content-id=\"{id}\""
                        );
                    }
                    Some(Action::ChangePage(page)) => {
                        let _ = write!(out, " data-action=\"change-page\" data-page=\"{page}\"");
                    }
                    None => {}
                }
                out.push('>');
                if VOID_TAGS.contains(&e.tag) {
                    return;
                }
                for c in &e.children {
                    c.write_html(out);
                }
                let _ = write!(out, "</{}>", e.tag);
            }
        }
    }
}

pub fn to_html(nodes: &[Node]) -> String {
    nodes.iter().map(Node::to_html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_attributes_are_escaped() {
        let node: Node = el("p")
            .attr("title", "\"quoted\"")
            .text("<script>alert('x')</script>")
            .into();
        assert_eq!(
            node.to_html(),
            "<p title=\"&quot;quoted&quot;\">&lt;script&gt;alert('x')&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node: Node = el("div").child(el("hr")).text("after").into();
        assert_eq!(node.to_html(), "<div><hr>after</div>");
    }

    #[test]
    fn actions_render_as_data_attributes() {
        let node: Node = el("a")
            .class("page-link")
            .on_click(Action::ChangePage(3))
            .text("3")
            .into();
        assert_eq!(
            node.to_html(),
            "<a class=\"page-link\" data-action=\"change-page\" data-page=\"3\">3</a>"
        );
    }

    #[test]
    fn find_all_walks_descendants() {
        let node: Node = el("ul")
            .child(el("li").class("page-item active").text("1"))
            .child(el("li").class("page-item").text("2"))
            .into();
        let items = node.find_all(&|e| e.has_class("page-item"));
        assert_eq!(items.len(), 2);
        assert_eq!(node.find_all(&|e| e.has_class("active")).len(), 1);
        assert_eq!(node.text_content(), "12");
    }
}
