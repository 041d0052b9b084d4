//! The `check` use case: evaluate a candidate against the resolved policy and produce a report.

use anyhow::Context;
use pwguard_domain::report::DomainReport;
use pwguard_settings::{Overrides, ResolvedPolicy};
use pwguard_types::{PolicyReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use std::fmt;
use time::OffsetDateTime;

use crate::policy::{ConfigFormat, resolve};

/// Input for the check use case.
#[derive(Clone)]
pub struct CheckInput<'a> {
    /// Settings contents (empty string if not found).
    pub config_text: &'a str,
    pub config_format: ConfigFormat,
    /// CLI overrides.
    pub overrides: Overrides,
    /// The password under evaluation. Never logged or recorded.
    pub candidate: &'a str,
}

impl fmt::Debug for CheckInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckInput")
            .field("config_text", &self.config_text)
            .field("config_format", &self.config_format)
            .field("overrides", &self.overrides)
            .field("candidate", &"<redacted>")
            .finish()
    }
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: PolicyReport,
    /// The resolved policy used.
    pub resolved: ResolvedPolicy,
}

/// Run the check use case: parse settings, resolve the policy, evaluate, produce a report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve(input.config_text, input.config_format, input.overrides)?;

    let DomainReport {
        verdict,
        violations,
        findings,
        data,
    } = pwguard_domain::evaluate(&resolved.effective, input.candidate)
        .context("evaluate policy")?;

    tracing::debug!(
        profile = %data.profile,
        rules_evaluated = data.rules_evaluated,
        violations = data.violations_total,
        "password checked"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "pwguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        violations,
        findings,
        data,
    };

    Ok(CheckOutput { report, resolved })
}

/// Map verdict to exit code: 0 = pass, 2 = violations.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
