use super::utils::HEALTH_OR_PAYMENT;
use crate::model::Manifest;
use crate::policy::Policy;
use trustgate_types::{ids, Framework, Severity};

pub const POLICY: Policy = Policy {
    id: ids::POLICY_BASELINE_PRIVATE_ENDPOINTS,
    name: "Private Endpoints for Sensitive Data",
    framework: Framework::Baseline,
    severity: Severity::Warning,
    description: "Services handling sensitive data (PHI, PCI, PII) should use private endpoints \
                  to avoid routing traffic over the public internet.",
    correction_description: "Configured private endpoints for all sensitive data services.",
    check,
    correct,
};

fn check(manifest: &Manifest) -> bool {
    !(manifest.sensitivity().is_one_of(HEALTH_OR_PAYMENT) && !manifest.networking().private_endpoints)
}

fn correct(mut manifest: Manifest) -> Manifest {
    manifest.networking_mut().private_endpoints = true;
    manifest
}
