//! Use case orchestration for trustgate.
//!
//! This crate provides the application layer: use cases that coordinate the intake, domain,
//! settings, and render layers. It is intentionally thin and delegates heavy lifting to the
//! appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod guardrail;
mod render;
mod report;

pub use explain::{
    format_explanation, format_not_found, format_policy_list, list_policies, run_explain,
    ExplainOutput,
};
pub use guardrail::{
    failed_stage_result, resolve_settings, run_guardrail, run_guardrail_values,
};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_stage_json, serialize_stage, stage_exit_code, to_renderable};
