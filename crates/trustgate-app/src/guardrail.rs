//! The governance stage boundary: payloads in, stage result out. Never fails.

use anyhow::Context;
use time::OffsetDateTime;
use trustgate_domain::model::Manifest;
use trustgate_domain::report::SeverityCounts;
use trustgate_domain::{assemble, evaluate, PolicyRegistry};
use trustgate_settings::{EngineSettings, Overrides, TrustgateConfigV1};
use trustgate_types::ids::{STAGE_ID_GOVERNANCE, STAGE_NAME_GOVERNANCE};
use trustgate_types::{ArchitectResult, GovernanceReport, IntentResult, StageResult, StageStatus};

/// Parse `trustgate.toml` text (empty means defaults) and apply CLI overrides.
pub fn resolve_settings(config_text: &str, overrides: Overrides) -> anyhow::Result<EngineSettings> {
    let cfg = if config_text.trim().is_empty() {
        TrustgateConfigV1::default()
    } else {
        trustgate_settings::parse_config_toml(config_text).context("parse config")?
    };

    let resolved = trustgate_settings::resolve_config(cfg, overrides).context("resolve config")?;
    Ok(resolved.effective)
}

/// Run the governance stage over raw upstream JSON payloads.
pub fn run_guardrail(
    architect_json: &str,
    intent_json: &str,
    settings: &EngineSettings,
) -> StageResult {
    let started_at = OffsetDateTime::now_utc();

    let outcome =
        trustgate_intake::manifest_from_json(architect_json, intent_json, &settings.defaults)
            .context("parse stage inputs")
            .and_then(|manifest| govern(&manifest, settings));

    finish(started_at, outcome)
}

/// Run the governance stage over already-decoded payloads.
pub fn run_guardrail_values(
    architect: ArchitectResult,
    intent: &IntentResult,
    settings: &EngineSettings,
) -> StageResult {
    let started_at = OffsetDateTime::now_utc();

    let outcome = trustgate_intake::build_manifest(architect, intent, &settings.defaults)
        .context("parse stage inputs")
        .and_then(|manifest| govern(&manifest, settings));

    finish(started_at, outcome)
}

/// Stage result for a call that never produced a report.
pub fn failed_stage_result(duration_ms: u64, error: impl Into<String>) -> StageResult {
    StageResult {
        stage_id: STAGE_ID_GOVERNANCE,
        stage_name: STAGE_NAME_GOVERNANCE.to_string(),
        status: StageStatus::Failed,
        duration_ms,
        result: None,
        error: Some(error.into()),
    }
}

fn govern(
    manifest: &Manifest,
    settings: &EngineSettings,
) -> anyhow::Result<(GovernanceReport, SeverityCounts)> {
    let policies = PolicyRegistry::builtin().select(&manifest.context.frameworks);
    let report = evaluate(manifest, &policies).context("evaluate policies")?;
    let counts = report.counts;
    Ok((assemble(report, &settings.provenance), counts))
}

fn finish(
    started_at: OffsetDateTime,
    outcome: anyhow::Result<(GovernanceReport, SeverityCounts)>,
) -> StageResult {
    let finished_at = OffsetDateTime::now_utc();
    let duration_ms = (finished_at - started_at).whole_milliseconds().max(0) as u64;

    match outcome {
        Ok((report, counts)) => {
            tracing::info!(
                status = %report.status.as_str(),
                score = report.final_compliance_score,
                found = report.violations_found.len(),
                corrected = report.violations_corrected.len(),
                critical = counts.critical,
                warning = counts.warning,
                info = counts.info,
                duration_ms,
                "governance stage complete"
            );
            StageResult {
                stage_id: STAGE_ID_GOVERNANCE,
                stage_name: STAGE_NAME_GOVERNANCE.to_string(),
                status: report.status,
                duration_ms,
                result: Some(report),
                error: None,
            }
        }
        Err(err) => {
            let message = format!("{err:#}");
            tracing::error!(error = %message, duration_ms, "governance stage failed");
            failed_stage_result(duration_ms, message)
        }
    }
}
