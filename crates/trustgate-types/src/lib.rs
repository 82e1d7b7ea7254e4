//! Stable DTOs and IDs used across the trustgate workspace.
//!
//! This crate is intentionally boring:
//! - the input contract produced by the upstream classification and architecture stages
//! - the stage result / governance report handed to the code-generation stage
//! - compliance enums (severity, framework, sensitivity, status)
//! - stable string IDs for policies and the governance stage

#![forbid(unsafe_code)]

pub mod ids;
pub mod manifest;
pub mod receipt;

pub use manifest::{
    ArchitectResult, ArchitectureManifest, CloudService, IntentResult, ManifestInput,
    NetworkingConfig, SecurityConfig, ServiceInput,
};
pub use receipt::{
    Framework, GovernanceReport, PolicyViolation, Sensitivity, Severity, StageResult, StageStatus,
    SCHEMA_CONFIG_V1, SCHEMA_STAGE_RESULT_V1,
};
