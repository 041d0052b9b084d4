//! Developer tasks (schema generation, contract conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use pwguard_app::{CheckInput, ConfigFormat, run_check};
use pwguard_settings::Overrides;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(PathBuf::from)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(pwguard_types::PolicyReport)
}

fn generate_settings_schema() -> schemars::Schema {
    schema_for!(pwguard_settings::PolicySettingsV1)
}

fn generate_payload_schema() -> schemars::Schema {
    schema_for!(pwguard_settings::PolicySettingsPayload)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "pwguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "pwguard.settings.v1.json",
            generate: generate_settings_schema,
        },
        SchemaSpec {
            filename: "pwguard.settings-payload.v1.json",
            generate: generate_payload_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Validate `instance` against `schema`, returning every error message.
fn schema_errors(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> anyhow::Result<Vec<String>> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))?;
    Ok(validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect())
}

/// Generate real reports and validate them against the generated report schema.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("schema to json")?;
    let mut errors = Vec::new();

    for (profile, candidate) in [
        ("default", "longenough"),
        ("standard", "aaaa"),
        ("strict", "qwerty12"),
    ] {
        let output = run_check(CheckInput {
            config_text: "",
            config_format: ConfigFormat::Toml,
            overrides: Overrides {
                profile: Some(profile.to_string()),
                minimum_character_length: None,
            },
            candidate,
        })?;
        let instance = serde_json::to_value(&output.report).context("report to json")?;
        for err in schema_errors(&schema, &instance)? {
            errors.push(format!("{profile}: {err}"));
        }
    }

    let settings_schema =
        serde_json::to_value(generate_settings_schema()).context("schema to json")?;
    let loose = serde_json::json!({
        "minimum_character_length": "12",
        "require_number_characters": "true",
        "max_repeats": "",
        "allow_login_suspension": 1
    });
    errors.extend(schema_errors(&settings_schema, &loose)?);

    if errors.is_empty() {
        println!("✓ reports and settings conform to their schemas");
        return Ok(());
    }
    for err in &errors {
        eprintln!("  - {err}");
    }
    bail!("Conformance failed with {} errors", errors.len())
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    use pwguard_types::explain;

    let mut errors = Vec::new();
    for id in explain::all_check_ids().iter().chain(explain::all_codes()) {
        match explain::lookup_explanation(id) {
            Some(exp) if exp.title.is_empty() || exp.description.is_empty() => {
                errors.push(format!("'{id}' has an empty explanation"));
            }
            Some(_) => {}
            None => errors.push(format!("'{id}' has no explanation")),
        }
    }
    for code in pwguard_types::ViolationCode::ALL {
        if !explain::all_codes().contains(&code.code()) {
            errors.push(format!("code '{code}' is missing from the explain registry"));
        }
    }

    if errors.is_empty() {
        println!("✓ All explain coverage checks passed!");
        return Ok(());
    }
    for error in &errors {
        eprintln!("  - {error}");
    }
    bail!("Explain coverage failed with {} errors", errors.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  schema            Generate JSON schemas from Rust types to schemas/");
    eprintln!("  conform           Validate generated reports against the report schema");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(String::as_str).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "schema" | "emit-schemas" => emit_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
