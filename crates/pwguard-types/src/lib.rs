//! Stable DTOs and IDs used across the pwguard workspace.
//!
//! This crate is intentionally boring:
//! - the violation code enum and its wire codes
//! - stable check IDs and policy limits
//! - data types for the emitted report
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod limits;
pub mod receipt;
mod violation;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    Finding, PolicyData, PolicyReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
pub use violation::ViolationCode;
