use search_engine_client::ContentId;

/// What a rendered node does when the user clicks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowDetail(ContentId),
    ChangePage(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyPress,
}

/// An input event delivered by the page to [`crate::DashboardClient::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click { target: String },
    KeyPress { target: String, key: String },
    /// A click on a rendered node carrying an [`Action`], delegated to the
    /// container element that holds it.
    Activate { container: String, action: Action },
}

impl UiEvent {
    pub fn click(target: &str) -> Self {
        UiEvent::Click {
            target: target.to_string(),
        }
    }

    pub fn key_press(target: &str, key: &str) -> Self {
        UiEvent::KeyPress {
            target: target.to_string(),
            key: key.to_string(),
        }
    }

    pub fn activate(container: &str, action: Action) -> Self {
        UiEvent::Activate {
            container: container.to_string(),
            action,
        }
    }

    /// The element and event kind a listener must be bound to for this event to be handled.
    pub fn binding(&self) -> (&str, EventKind) {
        match self {
            UiEvent::Click { target } => (target, EventKind::Click),
            UiEvent::KeyPress { target, .. } => (target, EventKind::KeyPress),
            UiEvent::Activate { container, .. } => (container, EventKind::Click),
        }
    }
}
