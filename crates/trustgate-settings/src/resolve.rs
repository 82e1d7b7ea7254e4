use crate::model::TrustgateConfigV1;
use anyhow::Context;
use trustgate_domain::Provenance;
use trustgate_intake::IntakeDefaults;
use trustgate_types::{Framework, SCHEMA_CONFIG_V1, Sensitivity};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub model_used: Option<String>,
    pub usage_per_policy: Option<u32>,
}

/// Everything the stage boundary needs besides the payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineSettings {
    pub provenance: Provenance,
    pub defaults: IntakeDefaults,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EngineSettings,
}

pub fn resolve_config(
    cfg: TrustgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut effective = EngineSettings::default();

    if let Some(model_used) = overrides.model_used.or(cfg.model_used) {
        let model_used = model_used.trim();
        if model_used.is_empty() {
            anyhow::bail!("model_used must not be empty");
        }
        effective.provenance.model_used = model_used.to_string();
    }

    if let Some(rate) = overrides.usage_per_policy.or(cfg.usage_per_policy) {
        if rate == 0 {
            anyhow::bail!("usage_per_policy must be greater than zero");
        }
        effective.provenance.usage_per_policy = rate;
    }

    if let Some(s) = cfg.default_sensitivity.as_deref() {
        effective.defaults.sensitivity =
            parse_sensitivity(s).context("invalid default_sensitivity")?;
    }

    if let Some(frameworks) = cfg.default_frameworks.as_deref() {
        effective.defaults.frameworks =
            parse_frameworks(frameworks).context("invalid default_frameworks")?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_sensitivity(v: &str) -> anyhow::Result<Sensitivity> {
    Sensitivity::parse(v)
        .ok_or_else(|| anyhow::anyhow!("unknown sensitivity: {v} (expected public|PII|PHI|PCI)"))
}

fn parse_frameworks(values: &[String]) -> anyhow::Result<Vec<Framework>> {
    let mut out = Vec::with_capacity(values.len());
    for v in values {
        let fw = Framework::parse(v).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown framework: {v} (expected baseline|health-data|payment-data|EU-privacy)"
            )
        })?;
        if !out.contains(&fw) {
            out.push(fw);
        }
    }
    Ok(out)
}
