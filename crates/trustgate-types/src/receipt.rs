use crate::manifest::ArchitectureManifest;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable schema identifiers for emitted artifacts.
pub const SCHEMA_STAGE_RESULT_V1: &str = "trustgate.stage.v1";
pub const SCHEMA_CONFIG_V1: &str = "trustgate.config.v1";

/// Policy severity. Only `critical` and `warning` move the compliance score.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regulatory scope that selects which policies apply.
///
/// The upstream classifier's historic names are accepted as aliases.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Framework {
    #[serde(rename = "baseline", alias = "IBM_BASELINE")]
    Baseline,
    #[serde(rename = "health-data", alias = "HIPAA")]
    HealthData,
    #[serde(rename = "payment-data", alias = "PCI_DSS", alias = "PCI-DSS")]
    PaymentData,
    #[serde(rename = "EU-privacy", alias = "GDPR")]
    EuPrivacy,
}

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::Baseline,
        Framework::HealthData,
        Framework::PaymentData,
        Framework::EuPrivacy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Framework::Baseline => "baseline",
            Framework::HealthData => "health-data",
            Framework::PaymentData => "payment-data",
            Framework::EuPrivacy => "EU-privacy",
        }
    }

    /// Resolve a wire identifier (canonical or alias). Unknown identifiers yield `None`.
    pub fn parse(value: &str) -> Option<Framework> {
        match value.trim() {
            "baseline" | "IBM_BASELINE" => Some(Framework::Baseline),
            "health-data" | "HIPAA" => Some(Framework::HealthData),
            "payment-data" | "PCI_DSS" | "PCI-DSS" => Some(Framework::PaymentData),
            "EU-privacy" | "GDPR" => Some(Framework::EuPrivacy),
            _ => None,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of the data an architecture handles.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Sensitivity {
    #[default]
    #[serde(rename = "public")]
    Public,
    #[serde(rename = "PII")]
    Pii,
    #[serde(rename = "PHI")]
    Phi,
    #[serde(rename = "PCI")]
    Pci,
}

impl Sensitivity {
    pub fn as_str(self) -> &'static str {
        match self {
            Sensitivity::Public => "public",
            Sensitivity::Pii => "PII",
            Sensitivity::Phi => "PHI",
            Sensitivity::Pci => "PCI",
        }
    }

    /// Case-insensitive parse of a wire value.
    pub fn parse(value: &str) -> Option<Sensitivity> {
        match value.trim().to_ascii_lowercase().as_str() {
            "public" => Some(Sensitivity::Public),
            "pii" => Some(Sensitivity::Pii),
            "phi" => Some(Sensitivity::Phi),
            "pci" => Some(Sensitivity::Pci),
            _ => None,
        }
    }

    pub fn is_one_of(self, set: &[Sensitivity]) -> bool {
        set.contains(&self)
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of one governance audit call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Passed,
    Corrected,
    Failed,
}

impl StageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StageStatus::Passed => "passed",
            StageStatus::Corrected => "corrected",
            StageStatus::Failed => "failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyViolation {
    pub policy_id: String,
    pub policy_name: String,
    pub severity: Severity,
    pub framework: Framework,
    pub description: String,
    pub detected_issue: String,

    /// Set only once a correction has been applied for this violation.
    #[serde(default)]
    pub auto_correction: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GovernanceReport {
    pub status: StageStatus,
    pub violations_found: Vec<PolicyViolation>,
    pub violations_corrected: Vec<PolicyViolation>,
    pub final_compliance_score: f64,
    pub applicable_frameworks: Vec<Framework>,

    /// The only manifest downstream stages should consume.
    pub corrected_manifest: ArchitectureManifest,

    /// Engine identity that produced the report.
    pub model_used: String,
    /// Approximate usage counter (active policies × configured rate).
    pub tokens_used: u32,

    /// Policy ids still failing after correction. Diagnostic only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remaining_violations: Vec<String>,
}

/// The envelope returned to the pipeline driver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StageResult {
    pub stage_id: u32,
    pub stage_name: String,
    pub status: StageStatus,
    pub duration_ms: u64,

    /// Serialized as `{}` when the stage failed before a report existed.
    #[schemars(schema_with = "report_or_empty::schema")]
    #[serde(default, with = "report_or_empty")]
    pub result: Option<GovernanceReport>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

mod report_or_empty {
    use super::GovernanceReport;
    use serde::de::Error as _;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "anyOf": [
                generator.subschema_for::<GovernanceReport>(),
                { "type": "object", "maxProperties": 0 }
            ]
        })
    }

    pub fn serialize<S>(value: &Option<GovernanceReport>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(report) => report.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<GovernanceReport>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Null => Ok(None),
            Value::Object(map) if map.is_empty() => Ok(None),
            _ => GovernanceReport::deserialize(value)
                .map(Some)
                .map_err(D::Error::custom),
        }
    }
}
