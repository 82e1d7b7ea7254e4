use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `trustgate.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrustgateConfigV1 {
    /// Optional schema string for tooling (`trustgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Engine identity stamped into every report as `model_used`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,

    /// Usage units charged per active policy (`tokens_used`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_per_policy: Option<u32>,

    /// Sensitivity assumed when the intent payload has none: `public`, `PII`, `PHI`, `PCI`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sensitivity: Option<String>,

    /// Frameworks assumed when the intent payload lists none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_frameworks: Option<Vec<String>>,
}
