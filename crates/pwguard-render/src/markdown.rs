use crate::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Password policy report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Rules evaluated: {}, violations: {}\n\n",
        verdict, report.data.profile, report.data.rules_evaluated, report.data.violations_total
    ));

    if report.findings.is_empty() {
        out.push_str("All enabled rules passed.\n");
        return out;
    }

    out.push_str("## Violations\n\n");

    for f in &report.findings {
        out.push_str(&format!(
            "- [ ] `{}` / `{}`: {}\n",
            f.check_id, f.code, f.message
        ));
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding};

    #[test]
    fn renders_passing_report() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Pass,
            findings: Vec::new(),
            data: RenderableData {
                profile: "standard".to_string(),
                rules_evaluated: 7,
                violations_total: 0,
            },
        };

        insta::assert_snapshot!(render_markdown(&report), @r"
        # Password policy report

        - Verdict: **PASS**
        - Profile: `standard`
        - Rules evaluated: 7, violations: 0

        All enabled rules passed.
        ");
    }

    #[test]
    fn renders_violations_with_help() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Fail,
            findings: vec![
                RenderableFinding {
                    check_id: "password.length".to_string(),
                    code: "too_short".to_string(),
                    message: "Must be at least 8 characters".to_string(),
                    help: Some("Choose a longer password or passphrase.".to_string()),
                },
                RenderableFinding {
                    check_id: "password.require_symbol".to_string(),
                    code: "no_symbols".to_string(),
                    message: "Must contain a symbol".to_string(),
                    help: None,
                },
            ],
            data: RenderableData {
                profile: "default".to_string(),
                rules_evaluated: 3,
                violations_total: 2,
            },
        };

        insta::assert_snapshot!(render_markdown(&report), @r"
        # Password policy report

        - Verdict: **FAIL**
        - Profile: `default`
        - Rules evaluated: 3, violations: 2

        ## Violations

        - [ ] `password.length` / `too_short`: Must be at least 8 characters
          - help: Choose a longer password or passphrase.
        - [ ] `password.require_symbol` / `no_symbols`: Must contain a symbol
        ");
    }
}
