use super::utils::{isolate_network, REGULATED};
use crate::model::Manifest;
use crate::policy::Policy;
use trustgate_types::{ids, Framework, Severity};

pub const POLICY: Policy = Policy {
    id: ids::POLICY_BASELINE_NO_PUBLIC_EXPOSURE,
    name: "No Public API Exposure for Sensitive Data",
    framework: Framework::Baseline,
    severity: Severity::Critical,
    description: "Services processing PHI, PII, or PCI data must not be publicly accessible. VPC \
                  and subnet isolation are mandatory.",
    correction_description: "Enabled VPC isolation and subnet segregation to prevent public API \
                             exposure.",
    check,
    correct,
};

fn check(manifest: &Manifest) -> bool {
    if !manifest.sensitivity().is_one_of(REGULATED) {
        return true;
    }
    let net = manifest.networking();
    net.vpc_enabled && net.subnet_isolation
}

fn correct(manifest: Manifest) -> Manifest {
    isolate_network(manifest)
}
