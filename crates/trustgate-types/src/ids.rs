//! Stable identifiers for policies and the governance stage.
//!
//! `policy_id` is a dotted namespace: `<framework scope>.<rule>`.

// Policies: health-data
pub const POLICY_HEALTH_VPC_ISOLATION: &str = "health.vpc_isolation";
pub const POLICY_HEALTH_ENCRYPTION_AT_REST: &str = "health.encryption_at_rest";
pub const POLICY_HEALTH_AUDIT_LOGGING: &str = "health.audit_logging";

// Policies: baseline
pub const POLICY_BASELINE_ENCRYPTION_IN_TRANSIT: &str = "baseline.encryption_in_transit";
pub const POLICY_BASELINE_PRIVATE_ENDPOINTS: &str = "baseline.private_endpoints";
pub const POLICY_BASELINE_NO_PUBLIC_EXPOSURE: &str = "baseline.no_public_exposure";
pub const POLICY_BASELINE_IAM_POLICIES: &str = "baseline.iam_policies";

// Policies: EU-privacy
pub const POLICY_PRIVACY_EU_RESIDENCY: &str = "privacy.eu_residency";

// Stage
pub const STAGE_ID_GOVERNANCE: u32 = 3;
pub const STAGE_NAME_GOVERNANCE: &str = "Governance Guardrail";
