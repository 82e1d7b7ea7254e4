use super::utils::{isolate_network, HEALTH_OR_PERSONAL};
use crate::model::Manifest;
use crate::policy::Policy;
use trustgate_types::{ids, Framework, Severity};

pub const POLICY: Policy = Policy {
    id: ids::POLICY_HEALTH_VPC_ISOLATION,
    name: "Database VPC Isolation Required",
    framework: Framework::HealthData,
    severity: Severity::Critical,
    description: "All health and personal data stores must be isolated within a Virtual Private \
                  Cloud with private endpoints only. Public access is strictly prohibited.",
    correction_description: "Enabled VPC isolation and configured private endpoints for all \
                             database services.",
    check,
    correct,
};

fn check(manifest: &Manifest) -> bool {
    !(manifest.sensitivity().is_one_of(HEALTH_OR_PERSONAL) && !manifest.networking().vpc_enabled)
}

fn correct(manifest: Manifest) -> Manifest {
    isolate_network(manifest)
}
