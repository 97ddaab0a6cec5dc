pub mod client;
pub mod components;
pub mod config;
pub mod events;
pub mod format;
pub mod messages;
pub mod page;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;
pub mod view;

pub use client::{DashboardClient, DashboardOptions};
pub use config::{ConfigError, DashboardConfig};
pub use events::{Action, EventKind, UiEvent};
pub use page::{ids, Display, MemoryPage, Page};
pub use state::SearchState;
pub use traits::SearchApi;
