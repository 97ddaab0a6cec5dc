use std::cell::Cell;

use search_engine_client::{ContentFilter, SearchParams};

/// Query, filter and pagination for the search panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    page: u32,
    limit: u32,
    query: String,
    content_type: ContentFilter,
}

impl SearchState {
    /// `limit` below 1 is raised to 1.
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            query: String::new(),
            content_type: ContentFilter::All,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn content_type(&self) -> ContentFilter {
        self.content_type
    }

    /// Start a new search: replaces query and filter, back to page 1.
    pub fn begin_search(&mut self, query: &str, content_type: ContentFilter) {
        self.query = query.to_string();
        self.content_type = content_type;
        self.page = 1;
    }

    /// Move to `page`. Returns false and leaves the state alone for page 0.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == 0 {
            return false;
        }
        self.page = page;
        true
    }

    pub fn params(&self) -> SearchParams {
        SearchParams {
            query: self.query.clone(),
            content_type: self.content_type,
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Monotonic request tokens for one kind of fetch. Only the most recently
/// issued token is current; responses carrying an older one are stale.
#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: Cell<u64>,
}

impl RequestTokens {
    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.get() == token
    }
}
