use std::cell::{Ref, RefCell, RefMut};

use tracing::{debug, error, info, warn};

use search_engine_client::{ContentFilter, ContentId};

use crate::components::{
    error_panel, provider_count_text, render_detail_body, render_pagination, render_popular,
    render_search_results, safe_href, statistics_text,
};
use crate::events::{Action, EventKind, UiEvent};
use crate::messages;
use crate::page::{ids, Display, Page};
use crate::state::{RequestTokens, SearchState};
use crate::traits::SearchApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Results per search page.
    pub page_size: u32,
    /// Cards in the popular-content strip.
    pub popular_limit: u32,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            page_size: 10,
            popular_limit: 6,
        }
    }
}

/// Listeners registered by [`DashboardClient::init`].
const BINDINGS: &[(&str, EventKind)] = &[
    (ids::SEARCH_BUTTON, EventKind::Click),
    (ids::SEARCH_INPUT, EventKind::KeyPress),
    (ids::REFRESH_BUTTON, EventKind::Click),
    (ids::SEARCH_RESULTS, EventKind::Click),
    (ids::POPULAR_CONTENT, EventKind::Click),
    (ids::PAGINATION, EventKind::Click),
];

/// The dashboard component: owns the search state and the page, and turns
/// UI events into API calls and rendered views.
///
/// Entry points take `&self` and may be interleaved on one thread at their
/// await points. No `RefCell` borrow is held across an await.
pub struct DashboardClient<A, P> {
    api: A,
    page: RefCell<P>,
    state: RefCell<SearchState>,
    popular_limit: u32,
    search_tokens: RequestTokens,
    detail_tokens: RequestTokens,
}

impl<A: SearchApi, P: Page> DashboardClient<A, P> {
    pub fn new(api: A, page: P, options: DashboardOptions) -> Self {
        Self {
            api,
            page: RefCell::new(page),
            state: RefCell::new(SearchState::new(options.page_size)),
            popular_limit: options.popular_limit,
            search_tokens: RequestTokens::default(),
            detail_tokens: RequestTokens::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> Ref<'_, P> {
        self.page.borrow()
    }

    pub fn page_mut(&self) -> RefMut<'_, P> {
        self.page.borrow_mut()
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Bind listeners, then load statistics and popular content.
    pub async fn init(&self) {
        {
            let mut page = self.page.borrow_mut();
            for (id, kind) in BINDINGS {
                page.bind(id, *kind);
            }
        }
        info!(bindings = BINDINGS.len(), "Dashboard initialised");

        self.load_dashboard().await;
        self.load_popular_content().await;
    }

    /// Remove every listener bound by [`init`](Self::init).
    pub fn teardown(&self) {
        self.page.borrow_mut().unbind_all();
        debug!("Dashboard listeners unbound");
    }

    /// Route a UI event to its entry point. Returns false when nothing handled it,
    /// including events on elements with no bound listener.
    pub async fn dispatch(&self, event: UiEvent) -> bool {
        let (target, kind) = event.binding();
        if !self.page.borrow().is_bound(target, kind) {
            debug!(element = target, ?kind, "Ignoring event on unbound element");
            return false;
        }

        match event {
            UiEvent::Click { target } if target == ids::SEARCH_BUTTON => {
                self.perform_search().await;
            }
            UiEvent::KeyPress { target, key } if target == ids::SEARCH_INPUT && key == "Enter" => {
                self.perform_search().await;
            }
            UiEvent::Click { target } if target == ids::REFRESH_BUTTON => {
                self.refresh_content().await;
            }
            UiEvent::Activate {
                action: Action::ShowDetail(id),
                ..
            } => {
                self.show_content_detail(id).await;
            }
            UiEvent::Activate {
                container,
                action: Action::ChangePage(page),
            } if container == ids::PAGINATION => {
                self.change_page(page).await;
            }
            _ => return false,
        }
        true
    }

    pub async fn load_dashboard(&self) {
        match self.api.dashboard().await {
            Ok(data) => {
                let mut page = self.page.borrow_mut();
                for (id, text) in statistics_text(&data.statistics) {
                    page.set_text(id, &text);
                }
                let (id, text) = provider_count_text(data.providers.len());
                page.set_text(id, &text);
                info!(providers = data.providers.len(), "Dashboard statistics loaded");
            }
            Err(err) => error!(error = %err, "Failed to load dashboard"),
        }
    }

    pub async fn load_popular_content(&self) {
        match self.api.popular(self.popular_limit).await {
            Ok(contents) => {
                self.page
                    .borrow_mut()
                    .replace_children(ids::POPULAR_CONTENT, render_popular(&contents));
                info!(count = contents.len(), "Popular content loaded");
            }
            Err(err) => error!(error = %err, "Failed to load popular content"),
        }
    }

    /// Start a new search from the query input and type select.
    /// A blank query alerts the user, sends nothing and returns false.
    pub async fn perform_search(&self) -> bool {
        self.search_from_page(1).await
    }

    /// Like [`perform_search`](Self::perform_search), but request `page` of the
    /// new search directly. Page 0 falls back to page 1.
    pub async fn search_from_page(&self, page: u32) -> bool {
        let Some((query, content_type)) = self.read_search_inputs() else {
            return false;
        };

        {
            let mut state = self.state.borrow_mut();
            state.begin_search(&query, content_type);
            if !state.set_page(page) {
                warn!(page, "Ignoring invalid start page");
            }
        }
        self.execute_search().await;
        true
    }

    fn read_search_inputs(&self) -> Option<(String, ContentFilter)> {
        let (raw_query, raw_type) = {
            let page = self.page.borrow();
            (
                page.input_value(ids::SEARCH_INPUT),
                page.input_value(ids::CONTENT_TYPE),
            )
        };

        let query = raw_query.trim();
        if query.is_empty() {
            self.page.borrow_mut().alert(messages::EMPTY_QUERY);
            return None;
        }

        let content_type = raw_type.parse::<ContentFilter>().unwrap_or_else(|err| {
            warn!(error = %err, "Unknown content type, searching all");
            ContentFilter::All
        });
        Some((query.to_string(), content_type))
    }

    /// Run the search described by the current state and render the outcome.
    /// A response that is no longer the latest search is discarded.
    pub async fn execute_search(&self) {
        let token = self.search_tokens.issue();
        let params = self.state.borrow().params();
        let _loading = LoadingGuard::show(&self.page, Some((&self.search_tokens, token)));

        info!(
            query = %params.query,
            content_type = %params.content_type,
            page = params.page,
            limit = params.limit,
            "Executing search"
        );
        let outcome = self.api.search(&params).await;

        if !self.search_tokens.is_current(token) {
            debug!(token, "Discarding stale search response");
            return;
        }

        let mut page = self.page.borrow_mut();
        match outcome {
            Ok(result) => {
                if !result.is_consistent() {
                    warn!(
                        page = result.page,
                        total_pages = result.total_pages,
                        "Search result page is out of range"
                    );
                }
                info!(
                    results = result.contents.len(),
                    page = result.page,
                    total_pages = result.total_pages,
                    "Search completed"
                );
                page.replace_children(ids::SEARCH_RESULTS, render_search_results(&result));
                page.replace_children(ids::PAGINATION, render_pagination(&result));
            }
            Err(err) => {
                error!(error = %err, query = %params.query, "Search failed");
                let panel = error_panel(messages::SEARCH_FAILED);
                page.replace_children(ids::SEARCH_RESULTS, vec![panel]);
                page.replace_children(ids::PAGINATION, Vec::new());
            }
        }
    }

    /// Jump to `page` of the current search, then scroll back to the top.
    pub async fn change_page(&self, page: u32) {
        if !self.state.borrow_mut().set_page(page) {
            warn!(page, "Ignoring navigation to invalid page");
            return;
        }
        self.execute_search().await;
        self.page.borrow_mut().scroll_to_top();
    }

    /// Fetch one content record and open it in the modal.
    pub async fn show_content_detail(&self, id: ContentId) {
        let token = self.detail_tokens.issue();
        info!(content_id = id, "Loading content detail");
        let outcome = self.api.content(id).await;

        if !self.detail_tokens.is_current(token) {
            debug!(content_id = id, "Discarding stale detail response");
            return;
        }

        let mut page = self.page.borrow_mut();
        match outcome {
            Ok(detail) => {
                page.set_text(ids::MODAL_TITLE, &detail.content.summary.title);
                page.set_href(ids::MODAL_LINK, &safe_href(&detail.content.url));
                page.replace_children(ids::MODAL_BODY, render_detail_body(&detail));
                page.open_modal(ids::CONTENT_MODAL);
            }
            Err(err) => {
                error!(error = %err, content_id = id, "Failed to load content detail");
                page.alert(messages::DETAIL_FAILED);
            }
        }
    }

    /// Ask the backend to re-fetch providers, then reload statistics and
    /// popular content. The search panel is left as it is.
    pub async fn refresh_content(&self) {
        let outcome = {
            let _loading = LoadingGuard::show(&self.page, None);
            self.api.refresh_providers().await
        };

        match outcome {
            Ok(()) => {
                info!("Provider refresh succeeded");
                self.page.borrow_mut().alert(messages::REFRESH_SUCCEEDED);
                self.load_dashboard().await;
                self.load_popular_content().await;
            }
            Err(err) => {
                error!(error = %err, "Provider refresh failed");
                self.page.borrow_mut().alert(messages::REFRESH_FAILED);
            }
        }
    }
}

/// Shows the loading indicator for its lifetime. Dropping it hides the
/// indicator again unless a newer request of the same kind has taken over.
struct LoadingGuard<'a, P: Page> {
    page: &'a RefCell<P>,
    owner: Option<(&'a RequestTokens, u64)>,
}

impl<'a, P: Page> LoadingGuard<'a, P> {
    fn show(page: &'a RefCell<P>, owner: Option<(&'a RequestTokens, u64)>) -> Self {
        {
            let mut page = page.borrow_mut();
            page.set_display(ids::LOADING, Display::Block);
            page.set_display(ids::SEARCH_RESULTS, Display::None);
        }
        Self { page, owner }
    }
}

impl<P: Page> Drop for LoadingGuard<'_, P> {
    fn drop(&mut self) {
        if let Some((tokens, token)) = self.owner {
            if !tokens.is_current(token) {
                return;
            }
        }
        let mut page = self.page.borrow_mut();
        page.set_display(ids::LOADING, Display::None);
        page.set_display(ids::SEARCH_RESULTS, Display::Flex);
    }
}
