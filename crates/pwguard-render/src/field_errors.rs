use crate::RenderableReport;

/// Render violations as field-level errors, one line per violation.
///
/// Format:
/// `{field}: {code}: {message}`
pub fn render_field_errors(report: &RenderableReport, field: &str) -> Vec<String> {
    report
        .findings
        .iter()
        .map(|f| {
            let message = f.message.replace(['\r', '\n'], " ");
            format!("{field}: {}: {message}", f.code)
        })
        .collect()
}
