//! Developer tasks (schema generation, fixture conformance, policy table lint).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};
use trustgate_domain::PolicyRegistry;
use trustgate_test_util::normalize_nondeterministic;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return parent.to_path_buf();
    }
    manifest_dir
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_stage_schema() -> schemars::Schema {
    schema_for!(trustgate_types::StageResult)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(trustgate_settings::TrustgateConfigV1)
}

const STAGE_SCHEMA_FILE: &str = "trustgate.stage.v1.json";

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: STAGE_SCHEMA_FILE,
            generate: generate_stage_schema,
        },
        SchemaSpec {
            filename: "trustgate.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate golden stage results against the stage schema");
    eprintln!("  policy-lint       Validate policy ids and documentation in the registry");
}

/// Policy ids look like `<family>.<snake_case_name>`.
fn is_valid_policy_id(id: &str) -> bool {
    let Some((family, name)) = id.split_once('.') else {
        return false;
    };
    let token = |s: &str| {
        let mut chars = s.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    };
    token(family) && token(name)
}

/// Compile the generated stage schema with `$id` removed.
///
/// The jsonschema crate tries to resolve `$id` as a URI; ours is a logical identifier.
fn compile_stage_schema() -> anyhow::Result<jsonschema::Validator> {
    let mut schema_value =
        serde_json::to_value(generate_stage_schema()).context("Failed to encode stage schema")?;
    if let Some(obj) = schema_value.as_object_mut() {
        obj.remove("$id");
    }
    jsonschema::draft7::new(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

/// Validate every golden `expected.stage.json` against the stage schema.
///
/// This checks:
/// 1. Schema validation of the normalized golden file
/// 2. `duration_ms` is already normalized to zero
/// 3. Reported violation ids exist in the built-in registry
fn conform() -> anyhow::Result<()> {
    let compiled = compile_stage_schema()?;
    println!("✓ {} schema compiles", STAGE_SCHEMA_FILE);

    let dir = fixtures_dir();
    if !dir.exists() {
        bail!("tests/fixtures/ not found at {}", dir.display());
    }

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    entries.sort();

    for fixture_dir in entries {
        let golden = fixture_dir.join("expected.stage.json");
        if !golden.exists() {
            continue;
        }
        let name = fixture_name(&fixture_dir);

        let content = fs::read_to_string(&golden)
            .with_context(|| format!("Failed to read {}", golden.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", golden.display()))?;

        if normalize_nondeterministic(value.clone()) != value {
            errors.push(format!("{}: duration_ms is not normalized to 0", name));
        }

        for err in compiled.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", name, err));
        }

        errors.extend(unknown_policy_ids(&value).map(|id| format!("{}: unknown policy id '{}'", name, id)));

        fixture_count += 1;
        println!("  ✓ {} validates", name);
    }

    if fixture_count == 0 {
        bail!("No golden stage results found in {}", dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} fixtures pass conformance checks!", fixture_count);
    Ok(())
}

fn fixture_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn unknown_policy_ids(stage: &serde_json::Value) -> impl Iterator<Item = String> + '_ {
    let registry = PolicyRegistry::builtin();
    let result = stage.get("result");

    let listed = ["violations_found", "violations_corrected"]
        .into_iter()
        .filter_map(move |key| result.and_then(|r| r.get(key)).and_then(|v| v.as_array()))
        .flatten()
        .filter_map(|v| v.get("policy_id").and_then(|id| id.as_str()));
    let remaining = result
        .and_then(|r| r.get("remaining_violations"))
        .and_then(|v| v.as_array())
        .into_iter()
        .flatten()
        .filter_map(|id| id.as_str());

    listed
        .chain(remaining)
        .filter(move |id| registry.get(id).is_none())
        .map(str::to_string)
}

/// Validate that every registered policy has a well-formed, unique id and full documentation.
fn policy_lint() -> anyhow::Result<()> {
    let policies = PolicyRegistry::builtin().list_all();
    let mut errors = Vec::new();
    let mut seen: Vec<&str> = Vec::new();

    for policy in policies {
        if !is_valid_policy_id(policy.id) {
            errors.push(format!("Policy id '{}' is not <family>.<snake_case>", policy.id));
        }
        if seen.contains(&policy.id) {
            errors.push(format!("Policy id '{}' is registered twice", policy.id));
        }
        seen.push(policy.id);

        if policy.name.is_empty() {
            errors.push(format!("Policy '{}' has empty name", policy.id));
        }
        if policy.description.is_empty() {
            errors.push(format!("Policy '{}' has empty description", policy.id));
        }
        if policy.correction_description.is_empty() {
            errors.push(format!("Policy '{}' has empty correction description", policy.id));
        }
    }

    if errors.is_empty() {
        println!("✓ {} policies are well-formed", policies.len());
        println!("\n✓ All policy lint checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Policy lint failed with {} errors", errors.len())
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "policy-lint" => policy_lint(),
        "print-schema-ids" => {
            println!("{}", trustgate_types::SCHEMA_STAGE_RESULT_V1);
            println!("{}", trustgate_types::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
