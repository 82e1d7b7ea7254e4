//! Fuzz target for the audit / correct / re-validate pipeline.
//!
//! Goal: For any well-formed manifest the built-in corrections converge: nothing remains
//! after correction and the input is left untouched.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_engine
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::json;
use trustgate_domain::{PolicyRegistry, evaluate};
use trustgate_intake::{IntakeDefaults, manifest_from_json};
use trustgate_types::StageStatus;

#[derive(Arbitrary, Debug)]
struct ServiceInput {
    role: String,
    region: Option<String>,
    plan: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct EngineInput {
    sensitivity: u8,
    frameworks: Vec<String>,
    services: Vec<ServiceInput>,
    vpc_enabled: bool,
    subnet_isolation: bool,
    private_endpoints: bool,
    encryption_at_rest: bool,
    encryption_in_transit: bool,
    audit_logging: bool,
    iam_policies: bool,
}

const SENSITIVITIES: [&str; 4] = ["public", "PII", "PHI", "PCI"];

fuzz_target!(|input: EngineInput| {
    if input.services.len() > 16 || input.frameworks.len() > 8 {
        return;
    }

    let services: Vec<_> = input
        .services
        .iter()
        .map(|s| json!({ "role": s.role, "region": s.region, "plan": s.plan }))
        .collect();
    let architect = json!({
        "manifest": {
            "services": services,
            "networking": {
                "vpc_enabled": input.vpc_enabled,
                "subnet_isolation": input.subnet_isolation,
                "private_endpoints": input.private_endpoints
            },
            "security_config": {
                "encryption_at_rest": input.encryption_at_rest,
                "encryption_in_transit": input.encryption_in_transit,
                "audit_logging": input.audit_logging,
                "iam_policies": input.iam_policies
            }
        }
    });
    let intent = json!({
        "detected_sensitivity": SENSITIVITIES[usize::from(input.sensitivity) % SENSITIVITIES.len()],
        "applicable_frameworks": input.frameworks
    });

    let Ok(manifest) = manifest_from_json(
        &architect.to_string(),
        &intent.to_string(),
        &IntakeDefaults::default(),
    ) else {
        return;
    };

    let before = manifest.clone();
    let policies = PolicyRegistry::builtin().select(&manifest.context.frameworks);
    let Ok(report) = evaluate(&manifest, &policies) else {
        return;
    };

    assert_eq!(manifest, before, "input manifest mutated");
    assert!(report.remaining.is_empty(), "corrections did not converge");
    assert_ne!(report.outcome.status, StageStatus::Failed);
});
