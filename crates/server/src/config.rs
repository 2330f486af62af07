use shared_types::{AppConfig, FeatureFlags, SearchSettings};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `catalog.graphql_endpoint`.
pub const ENDPOINT_ENV: &str = "CATALOG_GRAPHQL_ENDPOINT";

/// Parse config file contents, falling back to defaults when unparseable.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}; using defaults");
        AppConfig::default()
    })
}

/// Apply environment overrides on top of the file config.
pub fn apply_env_overrides(mut config: AppConfig, endpoint: Option<String>) -> AppConfig {
    if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
        config.catalog.graphql_endpoint = endpoint.trim().to_string();
    }
    config
}

/// Read `.env` and `config.toml` and store the result in the global
/// `OnceLock`. Safe to call multiple times; only the first call has effect.
///
/// A missing or partial file yields defaults for the missing settings.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not found ({e}); using defaults");
                AppConfig::default()
            }
        };
        let config = apply_env_overrides(config, std::env::var(ENDPOINT_ENV).ok());
        eprintln!(
            "[config] Catalog endpoint: {}, feature flags: {:?}",
            config.catalog.graphql_endpoint, config.features
        );
        config
    })
}

pub fn feature_flags() -> &'static FeatureFlags {
    &load_config().features
}

pub fn search_settings() -> SearchSettings {
    load_config().search
}
