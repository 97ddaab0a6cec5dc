use crate::messages;
use crate::view::{el, Node};

fn alert_panel(variant: &str, icon: &str, message: &str) -> Node {
    el("div")
        .class("col-12 text-center")
        .child(
            el("div")
                .class("alert")
                .class(variant)
                .child(el("i").class(icon))
                .text(format!(" {message}")),
        )
        .into()
}

/// Shown instead of cards when a search matches nothing.
pub fn empty_state() -> Node {
    alert_panel("alert-info", "fas fa-info-circle", messages::NO_RESULTS)
}

pub fn error_panel(message: &str) -> Node {
    alert_panel("alert-danger", "fas fa-exclamation-triangle", message)
}
