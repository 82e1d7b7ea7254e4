//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Framework selection (baseline always active, declaration order kept)
//! - Audit determinism and non-mutation of the input manifest
//! - Correction convergence and score bounds

use crate::engine::{audit, evaluate};
use crate::model::{AuditContext, Manifest, Service, ServiceRole};
use crate::policy::PolicyRegistry;
use crate::report::{
    compute_outcome, corrected_score, SeverityCounts, SCORE_CORRECTED_FLOOR, SCORE_FAILED,
    SCORE_PASSED,
};
use proptest::prelude::*;
use trustgate_types::{
    Framework, NetworkingConfig, PolicyViolation, SecurityConfig, Sensitivity, Severity,
    StageStatus,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_sensitivity() -> impl Strategy<Value = Sensitivity> {
    prop_oneof![
        Just(Sensitivity::Public),
        Just(Sensitivity::Pii),
        Just(Sensitivity::Phi),
        Just(Sensitivity::Pci),
    ]
}

/// Any subset of frameworks, possibly with duplicates, in arbitrary order.
fn arb_frameworks() -> impl Strategy<Value = Vec<Framework>> {
    prop::collection::vec(prop::sample::select(Framework::ALL.to_vec()), 0..6)
}

fn arb_role() -> impl Strategy<Value = ServiceRole> {
    prop_oneof![
        3 => Just(ServiceRole::Hosting),
        3 => Just(ServiceRole::Database),
        1 => Just(ServiceRole::Messaging),
        1 => Just(ServiceRole::Storage),
        1 => Just(ServiceRole::Other("cache".to_string())),
    ]
}

fn arb_region() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::sample::select(vec!["us-south", "us-east", "eu-gb", "eu-de", "eu-fr", "jp-tok"])
            .prop_map(str::to_string),
    )
}

fn arb_service() -> impl Strategy<Value = Service> {
    (
        prop::option::of("[a-z][a-z0-9-]{0,12}"),
        arb_role(),
        arb_region(),
        prop::option::of(prop::sample::select(vec!["lite", "standard", "dedicated"])),
    )
        .prop_map(|(name, role, region, plan)| Service {
            name,
            service_id: None,
            role,
            region,
            plan: plan.map(str::to_string),
        })
}

fn arb_networking() -> impl Strategy<Value = Option<NetworkingConfig>> {
    prop::option::of(any::<(bool, bool, bool)>().prop_map(|(vpc, subnet, endpoints)| {
        NetworkingConfig {
            vpc_enabled: vpc,
            subnet_isolation: subnet,
            private_endpoints: endpoints,
            ..NetworkingConfig::default()
        }
    }))
}

fn arb_security() -> impl Strategy<Value = Option<SecurityConfig>> {
    prop::option::of(
        any::<(bool, bool, bool, bool)>().prop_map(|(rest, transit, audit, iam)| {
            SecurityConfig {
                encryption_at_rest: rest,
                encryption_in_transit: transit,
                audit_logging: audit,
                iam_policies: iam,
                ..SecurityConfig::default()
            }
        }),
    )
}

fn arb_manifest() -> impl Strategy<Value = Manifest> {
    (
        prop::collection::vec(arb_service(), 0..5),
        arb_networking(),
        arb_security(),
        arb_sensitivity(),
        arb_frameworks(),
    )
        .prop_map(|(services, networking, security, sensitivity, frameworks)| {
            let mut deduped: Vec<Framework> = Vec::new();
            for fw in frameworks {
                if !deduped.contains(&fw) {
                    deduped.push(fw);
                }
            }
            Manifest {
                project_name: Some("prop".to_string()),
                services,
                networking,
                security,
                context: AuditContext {
                    sensitivity,
                    frameworks: deduped,
                },
                ..Manifest::default()
            }
        })
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Critical),
        Just(Severity::Warning),
        Just(Severity::Info),
    ]
}

fn violation(index: usize, severity: Severity) -> PolicyViolation {
    PolicyViolation {
        policy_id: format!("prop.policy_{index}"),
        policy_name: format!("Prop policy {index}"),
        severity,
        framework: Framework::Baseline,
        description: String::new(),
        detected_issue: String::new(),
        auto_correction: None,
    }
}

fn ids(violations: &[PolicyViolation]) -> Vec<String> {
    violations.iter().map(|v| v.policy_id.clone()).collect()
}

// ============================================================================
// Framework selection
// ============================================================================

proptest! {
    #[test]
    fn baseline_is_always_selected(frameworks in arb_frameworks()) {
        let registry = PolicyRegistry::builtin();
        let selected = registry.select(&frameworks);

        for policy in registry.list_all().iter().filter(|p| p.framework == Framework::Baseline) {
            prop_assert!(selected.iter().any(|s| s.id == policy.id), "{} missing", policy.id);
        }
    }

    #[test]
    fn selection_is_a_subsequence_of_declaration_order(frameworks in arb_frameworks()) {
        let registry = PolicyRegistry::builtin();
        let all: Vec<&str> = registry.list_all().iter().map(|p| p.id).collect();
        let selected: Vec<&str> = registry.select(&frameworks).iter().map(|p| p.id).collect();

        let mut cursor = 0usize;
        for id in &selected {
            let pos = all[cursor..].iter().position(|a| a == id);
            prop_assert!(pos.is_some(), "{id} out of order");
            cursor += pos.unwrap_or_default() + 1;
        }
    }

    #[test]
    fn request_order_does_not_change_selection(frameworks in arb_frameworks()) {
        let registry = PolicyRegistry::builtin();
        let mut reversed = frameworks.clone();
        reversed.reverse();

        let a: Vec<&str> = registry.select(&frameworks).iter().map(|p| p.id).collect();
        let b: Vec<&str> = registry.select(&reversed).iter().map(|p| p.id).collect();
        prop_assert_eq!(a, b);
    }
}

// ============================================================================
// Audit and correction
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_deterministic(m in arb_manifest()) {
        let policies = PolicyRegistry::builtin().select(&m.context.frameworks);

        let first = evaluate(&m, &policies).expect("evaluate");
        let second = evaluate(&m, &policies).expect("evaluate");

        prop_assert_eq!(ids(&first.violations_found), ids(&second.violations_found));
        prop_assert_eq!(first.outcome, second.outcome);
        prop_assert_eq!(first.corrected_manifest, second.corrected_manifest);
    }

    #[test]
    fn input_manifest_is_never_mutated(m in arb_manifest()) {
        let before = m.clone();
        let policies = PolicyRegistry::builtin().select(&m.context.frameworks);

        let _ = evaluate(&m, &policies).expect("evaluate");
        prop_assert_eq!(m, before);
    }

    #[test]
    fn corrected_manifest_is_clean_on_reaudit(m in arb_manifest()) {
        let policies = PolicyRegistry::builtin().select(&m.context.frameworks);

        let report = evaluate(&m, &policies).expect("evaluate");
        prop_assert!(report.remaining.is_empty());
        prop_assert!(audit(&report.corrected_manifest, &policies).is_empty());
        prop_assert_ne!(report.outcome.status, StageStatus::Failed);
    }

    #[test]
    fn clean_manifest_stays_clean_and_untouched(m in arb_manifest()) {
        let policies = PolicyRegistry::builtin().select(&m.context.frameworks);
        let corrected = evaluate(&m, &policies).expect("evaluate").corrected_manifest;

        let again = evaluate(&corrected, &policies).expect("evaluate");
        prop_assert_eq!(again.outcome.status, StageStatus::Passed);
        prop_assert_eq!(again.outcome.score, SCORE_PASSED);
        prop_assert_eq!(again.corrected_manifest, corrected);
    }

    #[test]
    fn violations_follow_policy_order(m in arb_manifest()) {
        let policies = PolicyRegistry::builtin().select(&m.context.frameworks);
        let order: Vec<&str> = policies.iter().map(|p| p.id).collect();

        let report = evaluate(&m, &policies).expect("evaluate");
        let positions: Vec<usize> = report
            .violations_found
            .iter()
            .filter_map(|v| order.iter().position(|id| *id == v.policy_id))
            .collect();

        prop_assert_eq!(positions.len(), report.violations_found.len());
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(
            ids(&report.violations_found),
            ids(&report.violations_corrected)
        );
    }
}

// ============================================================================
// Scoring
// ============================================================================

proptest! {
    #[test]
    fn corrected_score_is_bounded(severities in prop::collection::vec(arb_severity(), 1..40)) {
        let found: Vec<PolicyViolation> = severities
            .iter()
            .enumerate()
            .map(|(i, s)| violation(i, *s))
            .collect();

        let outcome = compute_outcome(&found, &found, &[]);
        prop_assert_eq!(outcome.status, StageStatus::Corrected);
        prop_assert!(outcome.score >= SCORE_CORRECTED_FLOOR);
        prop_assert!(outcome.score <= SCORE_PASSED);
    }

    #[test]
    fn more_violations_never_score_higher(
        severities in prop::collection::vec(arb_severity(), 0..20),
        extra in prop::collection::vec(arb_severity(), 0..10),
    ) {
        let base: Vec<PolicyViolation> = severities
            .iter()
            .enumerate()
            .map(|(i, s)| violation(i, *s))
            .collect();
        let mut superset = base.clone();
        superset.extend(
            extra
                .iter()
                .enumerate()
                .map(|(i, s)| violation(severities.len() + i, *s)),
        );

        let lower = corrected_score(&SeverityCounts::from_violations(&superset));
        let upper = corrected_score(&SeverityCounts::from_violations(&base));
        prop_assert!(lower <= upper);
    }

    #[test]
    fn any_remaining_violation_fails(
        severities in prop::collection::vec(arb_severity(), 1..10),
        remaining in prop::collection::vec("[a-z]{1,8}\\.[a-z_]{1,12}", 1..4),
    ) {
        let found: Vec<PolicyViolation> = severities
            .iter()
            .enumerate()
            .map(|(i, s)| violation(i, *s))
            .collect();

        let outcome = compute_outcome(&found, &found, &remaining);
        prop_assert_eq!(outcome.status, StageStatus::Failed);
        prop_assert_eq!(outcome.score, SCORE_FAILED);
    }
}
