use crate::model::Manifest;
use crate::policy::Policy;
use trustgate_types::{ids, Framework, Sensitivity, Severity};

/// Tier databases are moved to when they hold health data.
const DEDICATED_PLAN: &str = "dedicated";

pub const POLICY: Policy = Policy {
    id: ids::POLICY_HEALTH_ENCRYPTION_AT_REST,
    name: "Encryption at Rest Required for PHI",
    framework: Framework::HealthData,
    severity: Severity::Critical,
    description: "All protected health information must be encrypted at rest using AES-256 or \
                  equivalent. Database plan must be 'dedicated' tier minimum.",
    correction_description: "Enabled encryption at rest and upgraded database to dedicated tier \
                             for PHI compliance.",
    check,
    correct,
};

fn check(manifest: &Manifest) -> bool {
    !(manifest.has_database() && !manifest.security().encryption_at_rest)
}

// The plan upgrade goes beyond the flag this policy checks; it is part of the correction.
fn correct(mut manifest: Manifest) -> Manifest {
    manifest.security_mut().encryption_at_rest = true;
    if manifest.sensitivity() == Sensitivity::Phi {
        for db in manifest.databases_mut() {
            db.plan = Some(DEDICATED_PLAN.to_string());
        }
    }
    manifest
}
