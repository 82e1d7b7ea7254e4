use crate::model::Manifest;
use crate::policy::Policy;
use trustgate_types::{ids, Framework, Severity};

pub const POLICY: Policy = Policy {
    id: ids::POLICY_BASELINE_ENCRYPTION_IN_TRANSIT,
    name: "Encryption in Transit Required",
    framework: Framework::Baseline,
    severity: Severity::Critical,
    description: "All data in transit between services must be encrypted using TLS 1.2 or \
                  higher. This is a baseline requirement for every deployment.",
    correction_description: "Enabled TLS encryption for all service-to-service communication.",
    check,
    correct,
};

fn check(manifest: &Manifest) -> bool {
    manifest.security().encryption_in_transit
}

fn correct(mut manifest: Manifest) -> Manifest {
    manifest.security_mut().encryption_in_transit = true;
    manifest
}
