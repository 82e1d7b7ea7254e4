//! Intake adapters: turn upstream stage payloads into the typed domain manifest.
//!
//! Everything here is IO-free. Reading payloads from disk is the caller's job.

#![forbid(unsafe_code)]

mod convert;
mod error;

use trustgate_domain::model::Manifest;
use trustgate_types::{ArchitectResult, Framework, IntentResult, Sensitivity};

pub use error::IntakeError;

/// Fuzz-friendly API for testing parsing robustness.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as an architect payload.
    pub fn parse_architect_payload(text: &str) -> Result<(), IntakeError> {
        let _ = parse_architect(text)?;
        Ok(())
    }

    /// Parse arbitrary text as an intent payload.
    pub fn parse_intent_payload(text: &str) -> Result<(), IntakeError> {
        let _ = parse_intent(text)?;
        Ok(())
    }

    /// Run the whole intake path with default settings.
    ///
    /// Returns `Ok(...)` when both payloads are well-formed, `Err(...)` otherwise.
    /// **Never panics** on any input.
    pub fn build_from_text(architect: &str, intent: &str) -> Result<(), IntakeError> {
        let _ = manifest_from_json(architect, intent, &IntakeDefaults::default())?;
        Ok(())
    }
}

/// Values applied when the intent payload leaves a field out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntakeDefaults {
    pub sensitivity: Sensitivity,
    pub frameworks: Vec<Framework>,
}

impl Default for IntakeDefaults {
    fn default() -> Self {
        Self {
            sensitivity: Sensitivity::Public,
            frameworks: vec![Framework::Baseline],
        }
    }
}

pub fn parse_architect(text: &str) -> Result<ArchitectResult, IntakeError> {
    serde_json::from_str(text).map_err(|source| IntakeError::InvalidJson {
        payload: "architect",
        source,
    })
}

pub fn parse_intent(text: &str) -> Result<IntentResult, IntakeError> {
    serde_json::from_str(text).map_err(|source| IntakeError::InvalidJson {
        payload: "intent",
        source,
    })
}

/// Build the audited manifest from already-decoded payloads.
///
/// A missing `manifest` key yields an empty manifest; the assembler fills defaults later.
pub fn build_manifest(
    architect: ArchitectResult,
    intent: &IntentResult,
    defaults: &IntakeDefaults,
) -> Result<Manifest, IntakeError> {
    let context = convert::to_context(intent, defaults)?;
    let input = architect.manifest.unwrap_or_else(|| {
        tracing::debug!("architect payload carries no manifest");
        Default::default()
    });
    Ok(convert::to_manifest(input, context))
}

/// [`parse_architect`] + [`parse_intent`] + [`build_manifest`].
pub fn manifest_from_json(
    architect: &str,
    intent: &str,
    defaults: &IntakeDefaults,
) -> Result<Manifest, IntakeError> {
    let architect = parse_architect(architect)?;
    let intent = parse_intent(intent)?;
    build_manifest(architect, &intent, defaults)
}
