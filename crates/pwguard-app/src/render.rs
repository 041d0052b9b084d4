//! Render use cases: field errors and Markdown from in-memory reports.

use anyhow::Context;
use camino::Utf8Path;
use pwguard_render::{RenderableData, RenderableFinding, RenderableReport, RenderableVerdict};
use pwguard_types::{Finding, PolicyReport, Verdict};

pub fn to_renderable(report: &PolicyReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            rules_evaluated: report.data.rules_evaluated,
            violations_total: report.data.violations_total,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        check_id: f.check_id.clone(),
        code: f.code.code().to_string(),
        message: f.message.clone(),
        help: f.help.clone(),
    }
}

pub fn render_markdown(report: &PolicyReport) -> String {
    pwguard_render::render_markdown(&to_renderable(report))
}

pub fn render_field_errors(report: &PolicyReport, field: &str) -> Vec<String> {
    pwguard_render::render_field_errors(&to_renderable(report), field)
}

/// Write report bytes to `path`, creating parent directories as needed.
pub fn write_report(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {path}"))
}
