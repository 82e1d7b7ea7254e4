use super::utils::HEALTH_OR_PAYMENT;
use crate::model::Manifest;
use crate::policy::Policy;
use trustgate_types::{ids, Framework, Severity};

pub const POLICY: Policy = Policy {
    id: ids::POLICY_BASELINE_IAM_POLICIES,
    name: "IAM Policies Required for Enterprise Workloads",
    framework: Framework::Baseline,
    severity: Severity::Warning,
    description: "Enterprise workloads handling regulated data must have explicit IAM policies \
                  defined for role-based access control.",
    correction_description: "Added IAM role-based access control policies for all regulated \
                             data services.",
    check,
    correct,
};

fn check(manifest: &Manifest) -> bool {
    !(manifest.sensitivity().is_one_of(HEALTH_OR_PAYMENT) && !manifest.security().iam_policies)
}

fn correct(mut manifest: Manifest) -> Manifest {
    manifest.security_mut().iam_policies = true;
    manifest
}
