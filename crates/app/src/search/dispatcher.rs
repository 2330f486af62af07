use dioxus::prelude::*;
use shared_types::{AppError, NormalizedResults, SearchResponse};

/// Handle for one in-flight search. Settlements are matched against the
/// most recent ticket; anything older is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// State of the search query as of the latest dispatch. The result panel
/// is derived from this alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryLifecycle {
    #[default]
    Idle,
    Loading,
    SuccessWithData,
    SuccessEmpty,
    Error(AppError),
}

/// Request/response bookkeeping for the search widget.
///
/// Results survive later dispatches until a newer response replaces them,
/// but a failure of the latest dispatch outranks them. Responses arriving
/// out of order are discarded by sequence number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchDispatcher {
    latest: u64,
    loading: bool,
    settled: bool,
    term: String,
    results: NormalizedResults,
    error: Option<AppError>,
}

impl SearchDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search for `term`. The previous error no longer applies.
    pub fn begin(&mut self, term: impl Into<String>) -> Ticket {
        self.latest += 1;
        self.loading = true;
        self.term = term.into();
        self.error = None;
        Ticket(self.latest)
    }

    /// Apply a response. Returns `false` (and changes nothing) when a newer
    /// search has been started since `ticket` was issued.
    pub fn settle(&mut self, ticket: Ticket, result: Result<SearchResponse, AppError>) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(
                stale = ticket.0,
                latest = self.latest,
                "discarding out-of-order search response"
            );
            return false;
        }

        self.loading = false;
        self.settled = true;
        match result {
            Ok(response) => {
                self.results = response.normalize();
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(term = %self.term, error = %err, "search failed");
                self.error = Some(err);
            }
        }
        true
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Term of the most recent dispatch.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Normalized hits of the most recent successful response.
    pub fn results(&self) -> &NormalizedResults {
        &self.results
    }

    pub fn lifecycle(&self) -> QueryLifecycle {
        if self.loading {
            return QueryLifecycle::Loading;
        }
        if let Some(err) = &self.error {
            return QueryLifecycle::Error(err.clone());
        }
        match (self.settled, self.results.is_empty()) {
            (false, _) => QueryLifecycle::Idle,
            (true, true) => QueryLifecycle::SuccessEmpty,
            (true, false) => QueryLifecycle::SuccessWithData,
        }
    }
}

/// Reactive wrapper that sends searches through the `search_catalog`
/// server function.
#[derive(Clone, Copy, PartialEq)]
pub struct SearchQuery {
    state: Signal<SearchDispatcher>,
}

impl SearchQuery {
    /// Issue a search scoped to the catalog collections.
    pub fn search(&self, term: String) {
        let mut state = self.state;
        let ticket = state.write().begin(term.clone());
        spawn(async move {
            let result = server::api::search_catalog(term)
                .await
                .map_err(|e| AppError::from_server_error_or_internal(&e.to_string()));
            state.write().settle(ticket, result);
        });
    }

    pub fn state(&self) -> Signal<SearchDispatcher> {
        self.state
    }
}

pub fn use_search_dispatcher() -> SearchQuery {
    let state = use_signal(SearchDispatcher::new);
    SearchQuery { state }
}
