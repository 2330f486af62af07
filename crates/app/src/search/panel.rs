use shared_types::{NormalizedResults, SearchSettings};

use super::dispatcher::{QueryLifecycle, SearchDispatcher};

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Closed,
    Searching,
    Error(String),
    NoResults(String),
    Results(NormalizedResults),
}

/// Derive the panel from the widget state and the query lifecycle.
///
/// Previous results stay on screen while a newer search loads, but a failed
/// latest search replaces them. Not-found failures read as an empty result
/// rather than an error.
pub fn panel_view(
    open: bool,
    term: &str,
    settings: &SearchSettings,
    dispatcher: &SearchDispatcher,
) -> PanelView {
    if !open || !settings.accepts(term) {
        return PanelView::Closed;
    }

    let results = dispatcher.results();
    match dispatcher.lifecycle() {
        QueryLifecycle::Loading if !results.is_empty() => PanelView::Results(results.clone()),
        QueryLifecycle::Idle | QueryLifecycle::Loading => PanelView::Searching,
        QueryLifecycle::SuccessWithData => PanelView::Results(results.clone()),
        QueryLifecycle::SuccessEmpty => PanelView::NoResults(term.to_string()),
        QueryLifecycle::Error(err) if err.is_not_found() => PanelView::NoResults(term.to_string()),
        QueryLifecycle::Error(err) => PanelView::Error(err.message),
    }
}

pub fn no_results_message(term: &str) -> String {
    format!("No results found for \"{term}\"")
}

pub fn error_message(error: &str) -> String {
    format!("Error: {error}")
}
