use dioxus::prelude::*;
use shared_types::SearchResponse;

// ── Catalog search ─────────────────────────────────────

/// Search works and people. Terms shorter than the configured minimum are
/// rejected before the catalog is contacted.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn search_catalog(term: String) -> Result<SearchResponse, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::state::request_catalog;
    use shared_types::SearchInput;

    crate::config::search_settings()
        .check_term(&term, "term")
        .map_err(|e| e.into_server_fn_error())?;

    let catalog = request_catalog()?;
    catalog
        .search(&SearchInput::catalog(term))
        .await
        .map_err(|e| e.into_server_fn_error())
}
