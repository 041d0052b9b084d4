use anyhow::Context;
use pwguard_types::{PolicyReport, SCHEMA_REPORT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<PolicyReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse pwguard v1 report")
}

pub fn serialize_report(report: &PolicyReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CheckInput, ConfigFormat, run_check};
    use pwguard_settings::Overrides;

    fn sample_report() -> PolicyReport {
        run_check(CheckInput {
            config_text: "profile = \"standard\"\n",
            config_format: ConfigFormat::Toml,
            overrides: Overrides::default(),
            candidate: "abcd",
        })
        .expect("run_check")
        .report
    }

    #[test]
    fn serialized_report_parses_back() {
        let report = sample_report();
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed, report);
    }

    #[test]
    fn rejects_foreign_schema() {
        let err = parse_report_json(r#"{"schema": "acme.report.v1"}"#).expect_err("schema");
        assert!(err.to_string().contains("unknown report schema"));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_report_json("{not json").expect_err("json");
        assert_eq!(err.to_string(), "parse report json");
    }
}
