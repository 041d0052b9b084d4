//! Use case orchestration for pwguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod policy;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use policy::{ConfigFormat, PolicyInput, PolicyOutput, run_policy};
pub use render::{render_field_errors, render_markdown, to_renderable, write_report};
pub use report::{parse_report_json, serialize_report};
