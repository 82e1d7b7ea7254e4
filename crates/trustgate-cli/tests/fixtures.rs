//! End-to-end CLI integration tests using golden fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - `architect.json` and `intent.json`: the upstream stage payloads
//! - `expected.stage.json`: the expected stage result (`duration_ms` normalized to 0)
//!
//! These tests run `trustgate audit` against each fixture and verify:
//! 1. Exit code matches the stage status (0 = passed/corrected, 2 = failed)
//! 2. JSON output matches expected (ignoring duration)

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use trustgate_test_util::{normalize_nondeterministic, normalized_pretty};

/// Helper to get a Command for the trustgate binary.
/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn trustgate_cmd() -> Command {
    Command::cargo_bin("trustgate").expect("trustgate binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("trustgate-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Every fixture directory that has an expected stage result.
fn fixture_names() -> Vec<String> {
    let mut names: Vec<String> = walkdir::WalkDir::new(fixtures_dir())
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir() && e.path().join("expected.stage.json").exists())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Run `trustgate audit` against a fixture and return (exit code, stage json).
fn run_audit_on_fixture(fixture_name: &str) -> (i32, Value) {
    let fixture_path = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let stage_path = temp_dir.path().join("stage.json");

    let output = trustgate_cmd()
        .current_dir(temp_dir.path())
        .arg("audit")
        .arg("--architect")
        .arg(fixture_path.join("architect.json"))
        .arg("--intent")
        .arg(fixture_path.join("intent.json"))
        .arg("--out")
        .arg(&stage_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);
    (exit_code, read_json(&stage_path))
}

fn read_json(path: &Path) -> Value {
    let content = std::fs::read_to_string(path).expect("Failed to read stage result");
    serde_json::from_str(&content).expect("Failed to parse stage result JSON")
}

fn load_expected(fixture_name: &str) -> Value {
    read_json(&fixtures_dir().join(fixture_name).join("expected.stage.json"))
}

fn assert_stages_match(actual: Value, expected: Value, fixture_name: &str) {
    let actual_pretty = normalized_pretty(&actual.to_string()).expect("re-encode actual stage");
    let expected_pretty =
        normalized_pretty(&expected.to_string()).expect("re-encode expected stage");

    assert_eq!(
        normalize_nondeterministic(actual),
        normalize_nondeterministic(expected),
        "Stage result mismatch for fixture '{}'.\n\nActual:\n{}\n\nExpected:\n{}",
        fixture_name,
        actual_pretty,
        expected_pretty
    );
}

fn expected_exit_code(stage: &Value) -> i32 {
    match stage["status"].as_str() {
        Some("failed") => 2,
        _ => 0,
    }
}

// ============================================================================
// Fixture tests
// ============================================================================

#[test]
fn fixtures_are_present() {
    let names = fixture_names();
    for required in [
        "clean_public",
        "health_phi",
        "eu_residency",
        "payment_no_manifest",
        "unknown_sensitivity",
    ] {
        assert!(
            names.iter().any(|n| n == required),
            "missing fixture {required}"
        );
    }
}

#[test]
fn all_fixtures_match_golden_stage_results() {
    for name in fixture_names() {
        let (exit_code, stage) = run_audit_on_fixture(&name);
        let expected = load_expected(&name);

        assert_eq!(
            exit_code,
            expected_exit_code(&expected),
            "unexpected exit code for fixture '{name}'"
        );
        assert_stages_match(stage, expected, &name);
    }
}

#[test]
fn fixture_clean_public_passes() {
    let (exit_code, stage) = run_audit_on_fixture("clean_public");
    assert_eq!(exit_code, 0);
    assert_eq!(stage["status"], "passed");
    assert_eq!(stage["result"]["final_compliance_score"], 100.0);
    assert_eq!(stage["result"]["violations_found"], Value::Array(Vec::new()));
}

#[test]
fn fixture_health_phi_is_corrected() {
    let (exit_code, stage) = run_audit_on_fixture("health_phi");
    assert_eq!(exit_code, 0);
    assert_eq!(stage["status"], "corrected");

    let manifest = &stage["result"]["corrected_manifest"];
    assert_eq!(manifest["networking"]["vpc_enabled"], true);
    assert_eq!(manifest["networking"]["load_balancer"], "alb");
    assert_eq!(manifest["services"][1]["plan"], "dedicated");
    assert_eq!(manifest["security_config"]["audit_logging"], true);
}

#[test]
fn fixture_unknown_sensitivity_fails_with_empty_result() {
    let (exit_code, stage) = run_audit_on_fixture("unknown_sensitivity");
    assert_eq!(exit_code, 2);
    assert_eq!(stage["status"], "failed");
    assert_eq!(stage["result"], serde_json::json!({}));
    assert!(
        stage["error"]
            .as_str()
            .expect("error string")
            .contains("unrecognized data sensitivity 'SECRET'")
    );
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn missing_payload_file_exits_1_and_still_writes_stage() {
    let temp_dir = TempDir::new().expect("temp dir");
    let stage_path = temp_dir.path().join("out").join("stage.json");
    let intent = fixtures_dir().join("clean_public").join("intent.json");

    trustgate_cmd()
        .current_dir(temp_dir.path())
        .arg("audit")
        .arg("--architect")
        .arg(temp_dir.path().join("does-not-exist.json"))
        .arg("--intent")
        .arg(&intent)
        .arg("--out")
        .arg(&stage_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read architect payload"));

    let stage = read_json(&stage_path);
    assert_eq!(stage["status"], "failed");
    assert_eq!(stage["stage_id"], 3);
    assert_eq!(stage["result"], serde_json::json!({}));
}

#[test]
fn invalid_config_exits_1() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = temp_dir.path().join("trustgate.toml");
    std::fs::write(&config, "default_sensitivity = \"classified\"\n").expect("write config");
    let fixture = fixtures_dir().join("clean_public");

    trustgate_cmd()
        .current_dir(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .arg("audit")
        .arg("--architect")
        .arg(fixture.join("architect.json"))
        .arg("--intent")
        .arg(fixture.join("intent.json"))
        .arg("--out")
        .arg(temp_dir.path().join("stage.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid default_sensitivity"));
}

#[test]
fn provenance_overrides_reach_the_report() {
    let temp_dir = TempDir::new().expect("temp dir");
    let stage_path = temp_dir.path().join("stage.json");
    let fixture = fixtures_dir().join("clean_public");

    trustgate_cmd()
        .current_dir(temp_dir.path())
        .arg("--model-used")
        .arg("kb-test")
        .arg("--usage-per-policy")
        .arg("3")
        .arg("audit")
        .arg("--architect")
        .arg(fixture.join("architect.json"))
        .arg("--intent")
        .arg(fixture.join("intent.json"))
        .arg("--out")
        .arg(&stage_path)
        .assert()
        .success();

    let stage = read_json(&stage_path);
    assert_eq!(stage["result"]["model_used"], "kb-test");
    assert_eq!(stage["result"]["tokens_used"], 12);
}

// ============================================================================
// Rendering from a written stage result
// ============================================================================

#[test]
fn audit_writes_markdown_when_requested() {
    let temp_dir = TempDir::new().expect("temp dir");
    let fixture = fixtures_dir().join("eu_residency");
    let md_path = temp_dir.path().join("comment.md");

    trustgate_cmd()
        .current_dir(temp_dir.path())
        .arg("audit")
        .arg("--architect")
        .arg(fixture.join("architect.json"))
        .arg("--intent")
        .arg(fixture.join("intent.json"))
        .arg("--out")
        .arg(temp_dir.path().join("stage.json"))
        .arg("--write-markdown")
        .arg("--markdown-out")
        .arg(&md_path)
        .assert()
        .success();

    let md = std::fs::read_to_string(&md_path).expect("markdown written");
    assert!(md.contains("Status: **CORRECTED**"));
    assert!(md.contains("Compliance score: 92.0"));
    assert!(md.contains("privacy.eu_residency"));
}

#[test]
fn md_renders_expected_stage() {
    let stage = fixtures_dir()
        .join("health_phi")
        .join("expected.stage.json");

    trustgate_cmd()
        .arg("md")
        .arg("--stage")
        .arg(&stage)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Trustgate governance report"))
        .stdout(predicate::str::contains("Compliance score: 62.0"))
        .stdout(predicate::str::contains("Frameworks: health-data, baseline"))
        .stdout(predicate::str::contains("6 found / 6 corrected"));
}

#[test]
fn annotations_respect_max() {
    let stage = fixtures_dir()
        .join("health_phi")
        .join("expected.stage.json");

    let output = trustgate_cmd()
        .arg("annotations")
        .arg("--stage")
        .arg(&stage)
        .arg("--max")
        .arg("2")
        .output()
        .expect("run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "::error title=health.vpc_isolation::[health-data] Database VPC Isolation Required: Policy 'Database VPC Isolation Required' failed validation on the proposed architecture.",
            "::error title=health.encryption_at_rest::[health-data] Encryption at Rest Required for PHI: Policy 'Encryption at Rest Required for PHI' failed validation on the proposed architecture.",
        ]
    );
}

#[test]
fn md_on_missing_stage_fails() {
    trustgate_cmd()
        .arg("md")
        .arg("--stage")
        .arg("definitely/not/here.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read stage result"));
}
