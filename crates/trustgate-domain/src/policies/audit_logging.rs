use crate::model::Manifest;
use crate::policy::Policy;
use trustgate_types::{ids, Framework, Sensitivity, Severity};

pub const POLICY: Policy = Policy {
    id: ids::POLICY_HEALTH_AUDIT_LOGGING,
    name: "Audit Logging Required for PHI Access",
    framework: Framework::HealthData,
    severity: Severity::Critical,
    description: "All access to PHI must be logged for audit trail compliance. Logging must be \
                  enabled at the infrastructure level.",
    correction_description: "Enabled infrastructure-level audit logging for all PHI access points.",
    check,
    correct,
};

fn check(manifest: &Manifest) -> bool {
    !(manifest.sensitivity() == Sensitivity::Phi && !manifest.security().audit_logging)
}

fn correct(mut manifest: Manifest) -> Manifest {
    manifest.security_mut().audit_logging = true;
    manifest
}
