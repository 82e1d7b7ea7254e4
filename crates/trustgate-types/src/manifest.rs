//! Manifest shapes on the wire.
//!
//! The input side (`ArchitectResult`, `IntentResult`) is deliberately permissive: every field is
//! optional because it is produced by an upstream generator. The output side
//! (`ArchitectureManifest`) is fully populated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Output of the architecture-generation stage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArchitectResult {
    #[serde(default)]
    pub manifest: Option<ManifestInput>,
}

/// Output of the intent-classification stage (only the fields the audit reads).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IntentResult {
    #[serde(default)]
    pub detected_sensitivity: Option<String>,
    /// Non-string entries are dropped, like unrecognized framework names.
    #[serde(default, deserialize_with = "lenient::string_items")]
    pub applicable_frameworks: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ManifestInput {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub services: Option<Vec<ServiceInput>>,
    #[serde(default)]
    pub networking: Option<NetworkingConfig>,
    #[serde(default)]
    pub security_config: Option<SecurityConfig>,
    #[serde(default)]
    pub estimated_monthly_cost: Option<f64>,
    #[serde(default)]
    pub diagram_ascii: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceInput {
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
}

/// Network controls. Absent or `null` flags read as disabled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkingConfig {
    #[serde(default, deserialize_with = "lenient::null_as_false")]
    pub vpc_enabled: bool,
    #[serde(default, deserialize_with = "lenient::null_as_false")]
    pub subnet_isolation: bool,
    #[serde(default, deserialize_with = "lenient::null_as_false")]
    pub private_endpoints: bool,

    /// Generator-specific keys, carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// Security controls. Absent or `null` flags read as disabled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SecurityConfig {
    #[serde(default, deserialize_with = "lenient::null_as_false")]
    pub encryption_at_rest: bool,
    #[serde(default, deserialize_with = "lenient::null_as_false")]
    pub encryption_in_transit: bool,
    #[serde(default, deserialize_with = "lenient::null_as_false")]
    pub audit_logging: bool,
    #[serde(default, deserialize_with = "lenient::null_as_false")]
    pub iam_policies: bool,

    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// The corrected manifest handed to the code-generation stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArchitectureManifest {
    pub project_name: String,
    pub description: String,
    pub services: Vec<CloudService>,
    pub networking: NetworkingConfig,
    pub security_config: SecurityConfig,
    pub estimated_monthly_cost: Option<f64>,
    pub diagram_ascii: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CloudService {
    pub service_name: String,
    pub service_id: String,
    pub role: String,
    pub region: String,
    pub plan: String,
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
    }

    pub fn string_items<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Option::<Vec<Value>>::deserialize(deserializer)?;
        Ok(items.map(|items| {
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect()
        }))
    }
}
