//! Pure compliance policy evaluation (no IO).
//!
//! Input: a typed manifest with its audit context attached elsewhere.
//! Output: violations found and corrected, the corrected manifest, status and score.

#![forbid(unsafe_code)]

pub mod assemble;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod error;
mod policies;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use assemble::{assemble, Provenance};
pub use engine::{audit, correct, evaluate, revalidate, Correction};
pub use error::EngineError;
pub use policy::{get_policies_for_frameworks, resolve_frameworks, Policy, PolicyRegistry};
