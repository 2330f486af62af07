use serde::{Deserialize, Serialize};

/// Optional server integrations, read from the `[features]` table.
///
/// Every field defaults to `false`; a missing table turns everything off.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Serve the interactive OpenAPI reference at `/docs`.
    #[serde(default)]
    pub api_docs: bool,
}
