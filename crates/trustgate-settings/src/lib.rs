//! Config parsing and engine settings resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::TrustgateConfigV1;
pub use resolve::{EngineSettings, Overrides, ResolvedConfig};

/// Parse `trustgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<TrustgateConfigV1> {
    let cfg: TrustgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings used by the stage boundary (config + CLI overrides).
pub fn resolve_config(
    cfg: TrustgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
