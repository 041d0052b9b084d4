//! CLI entry point for pwguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `pwguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use pwguard_app::{
    CheckInput, ConfigFormat, ExplainOutput, PolicyInput, format_explanation, format_not_found,
    render_field_errors, render_markdown, run_check, run_explain, run_policy, serialize_report,
    verdict_exit_code, write_report,
};
use pwguard_settings::Overrides;
use std::io::BufRead;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the candidate when `--password-stdin` is not given.
const PASSWORD_ENV: &str = "PWGUARD_PASSWORD";

#[derive(Parser, Debug)]
#[command(
    name = "pwguard",
    version,
    about = "Password policy validation for account settings"
)]
struct Cli {
    /// Path to pwguard settings (TOML, or a JSON settings payload with a .json extension).
    #[arg(long, env = "PWGUARD_CONFIG", default_value = "pwguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|standard|strict).
    #[arg(long)]
    profile: Option<String>,

    /// Override the minimum password length.
    #[arg(long)]
    min_length: Option<u32>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG applies otherwise.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a password against the resolved policy.
    Check {
        /// Read the password from the first line of stdin instead of PWGUARD_PASSWORD.
        #[arg(long)]
        password_stdin: bool,

        /// Form field name used in field-error output.
        #[arg(long, default_value = "password")]
        field: String,

        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Output format on stdout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "password.max_sequence") or code (e.g., "sequence") to explain.
        identifier: String,
    },

    /// Print the resolved policy as a settings payload (JSON).
    Policy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Md,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.cmd {
        Commands::Check {
            password_stdin,
            field,
            report_out,
            format,
        } => cmd_check(&cli, *password_stdin, field, report_out.as_deref(), *format),
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::Policy => cmd_policy(&cli),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("pwguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        minimum_character_length: cli.min_length,
    }
}

/// Load settings text if present; a missing file is allowed (defaults apply).
fn load_config(path: &Utf8Path) -> anyhow::Result<(String, ConfigFormat)> {
    let format = match path.extension() {
        Some("json") => ConfigFormat::Json,
        _ => ConfigFormat::Toml,
    };
    if !path.exists() {
        tracing::debug!(%path, "no settings file; using defaults");
        return Ok((String::new(), format));
    }
    let text = std::fs::read_to_string(path).with_context(|| format!("read settings: {path}"))?;
    Ok((text, format))
}

fn read_candidate(password_stdin: bool) -> anyhow::Result<String> {
    if password_stdin {
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read password from stdin")?;
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        return Ok(trimmed.to_string());
    }

    std::env::var(PASSWORD_ENV)
        .with_context(|| format!("no password given; pass --password-stdin or set {PASSWORD_ENV}"))
}

fn cmd_check(
    cli: &Cli,
    password_stdin: bool,
    field: &str,
    report_out: Option<&Utf8Path>,
    format: OutputFormat,
) -> anyhow::Result<i32> {
    let (config_text, config_format) = load_config(&cli.config)?;
    let candidate = read_candidate(password_stdin)?;

    let output = run_check(CheckInput {
        config_text: &config_text,
        config_format,
        overrides: overrides(cli),
        candidate: &candidate,
    })?;
    let report = &output.report;

    if let Some(path) = report_out {
        let bytes = serialize_report(report)?;
        write_report(path, &bytes).context("write report json")?;
    }

    match format {
        OutputFormat::Text => {
            let lines = render_field_errors(report, field);
            if lines.is_empty() {
                println!("{field}: ok (profile {})", report.data.profile);
            }
            for line in lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let bytes = serialize_report(report)?;
            println!("{}", String::from_utf8_lossy(&bytes));
        }
        OutputFormat::Md => print!("{}", render_markdown(report)),
    }

    Ok(verdict_exit_code(report.verdict))
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            Ok(1)
        }
    }
}

fn cmd_policy(cli: &Cli) -> anyhow::Result<i32> {
    let (config_text, config_format) = load_config(&cli.config)?;
    let output = run_policy(PolicyInput {
        config_text: &config_text,
        config_format,
        overrides: overrides(cli),
    })?;
    let json = serde_json::to_string_pretty(&output.payload).context("serialize payload")?;
    println!("{json}");
    Ok(0)
}
