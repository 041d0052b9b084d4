use crate::ViolationCode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for pwguard reports.
pub const SCHEMA_REPORT_V1: &str = "pwguard.report.v1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub check_id: String,
    pub code: ViolationCode,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Rule-specific structured payload (thresholds only, never the candidate).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Pwguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct PolicyData {
    pub profile: String,

    /// Length of the candidate in characters. The candidate itself is never recorded.
    pub candidate_length: u32,
    pub rules_evaluated: u32,
    pub violations_total: u32,
}

/// A generic receipt/envelope.
///
/// Keeping this generic allows callers to embed their own data while still enforcing a stable outer
/// shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = PolicyData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    /// Violated rules in evaluation order.
    pub violations: Vec<ViolationCode>,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type PolicyReport = ReportEnvelope<PolicyData>;
