use serde::{Deserialize, Serialize};

use crate::{AppError, FeatureFlags};

/// Default GraphQL endpoint used when neither `config.toml` nor the
/// environment provide one.
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:4000/graphql";

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchSettings,
}

/// Connection settings for the remote catalog GraphQL service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "default_endpoint")]
    pub graphql_endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_GRAPHQL_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("nollywood-search/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Tuning for the search-as-you-type widget. Served to clients so the
/// widget and the server agree on the minimum term length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SearchSettings {
    /// Quiet period before a typed term is sent, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Terms shorter than this (in characters) never reach the catalog.
    #[serde(default = "default_min_term_len")]
    pub min_term_len: usize,
    /// Height cap of the result panel, in viewport-height units.
    #[serde(default = "default_max_panel_vh")]
    pub max_panel_vh: u8,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_term_len() -> usize {
    crate::search::MIN_TERM_LEN
}

fn default_max_panel_vh() -> u8 {
    70
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_term_len: default_min_term_len(),
            max_panel_vh: default_max_panel_vh(),
        }
    }
}

impl SearchSettings {
    /// Whether `term` is long enough to query. Counts characters, not bytes.
    pub fn accepts(&self, term: &str) -> bool {
        term.chars().count() >= self.min_term_len
    }

    /// `BadRequest` naming `field` when `term` is too short to query.
    pub fn check_term(&self, term: &str, field: &str) -> Result<(), AppError> {
        if self.accepts(term) {
            return Ok(());
        }
        Err(AppError::bad_request("Search term too short").with_field(
            field,
            format!("must be at least {} characters", self.min_term_len),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog.graphql_endpoint, DEFAULT_GRAPHQL_ENDPOINT);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.min_term_len, 2);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            telemetry = true

            [catalog]
            graphql_endpoint = "https://api.example.com/graphql"

            [search]
            debounce_ms = 150
            "#,
        )
        .unwrap();
        assert!(config.features.telemetry);
        assert!(!config.features.api_docs);
        assert_eq!(config.catalog.graphql_endpoint, "https://api.example.com/graphql");
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.min_term_len, 2);
        assert_eq!(config.search.max_panel_vh, 70);
    }

    #[test]
    fn accepts_counts_characters() {
        let settings = SearchSettings::default();
        assert!(!settings.accepts(""));
        assert!(!settings.accepts("a"));
        assert!(!settings.accepts("é"));
        assert!(settings.accepts("ab"));
        assert!(settings.accepts("éé"));
    }

    #[test]
    fn check_term_follows_configured_minimum() {
        let relaxed = SearchSettings {
            min_term_len: 1,
            ..SearchSettings::default()
        };
        assert!(relaxed.check_term("a", "q").is_ok());

        let strict = SearchSettings {
            min_term_len: 3,
            ..SearchSettings::default()
        };
        let err = strict.check_term("ab", "term").unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::BadRequest);
        assert_eq!(err.field_errors["term"], "must be at least 3 characters");
        assert!(strict.check_term("abc", "term").is_ok());
    }
}
