use dioxus::prelude::*;
use shared_types::SearchSettings;

mod detail;
pub use detail::*;

mod search;
pub use search::*;

/// Search widget tuning loaded from `config.toml`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_search_settings() -> Result<SearchSettings, ServerFnError> {
    Ok(crate::config::search_settings())
}
