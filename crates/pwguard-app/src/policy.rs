//! The `policy` use case: resolve settings and emit the settings payload.

use anyhow::Context;
use pwguard_settings::{
    Overrides, PolicySettingsPayload, PolicySettingsV1, ResolvedPolicy, to_settings_payload,
};

/// Encoding of the settings text handed to a use case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `pwguard.toml`.
    #[default]
    Toml,
    /// A settings-update payload as stored by the account settings endpoint.
    Json,
}

/// Input for the policy use case.
#[derive(Clone, Debug)]
pub struct PolicyInput<'a> {
    /// Settings contents (empty string if not found).
    pub config_text: &'a str,
    pub config_format: ConfigFormat,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct PolicyOutput {
    pub profile: String,
    pub payload: PolicySettingsPayload,
}

pub fn run_policy(input: PolicyInput<'_>) -> anyhow::Result<PolicyOutput> {
    let resolved = resolve(input.config_text, input.config_format, input.overrides)?;
    Ok(PolicyOutput {
        payload: to_settings_payload(&resolved.effective.config),
        profile: resolved.effective.profile,
    })
}

/// Parse and resolve settings text. Empty text means defaults apply.
pub(crate) fn resolve(
    config_text: &str,
    format: ConfigFormat,
    overrides: Overrides,
) -> anyhow::Result<ResolvedPolicy> {
    let settings = if config_text.trim().is_empty() {
        PolicySettingsV1::default()
    } else {
        match format {
            ConfigFormat::Toml => pwguard_settings::parse_settings_toml(config_text),
            ConfigFormat::Json => pwguard_settings::parse_settings_json(config_text),
        }
        .context("parse settings")?
    };

    pwguard_settings::resolve_settings(settings, overrides).context("resolve settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_emit_default_payload() {
        let out = run_policy(PolicyInput {
            config_text: "",
            config_format: ConfigFormat::Toml,
            overrides: Overrides::default(),
        })
        .expect("run_policy");

        assert_eq!(out.profile, "default");
        assert_eq!(out.payload.minimum_character_length, 8);
        assert_eq!(out.payload.max_repeats, None);
    }

    #[test]
    fn json_payload_is_accepted() {
        let out = run_policy(PolicyInput {
            config_text: r#"{"profile": "standard", "minimum_character_length": "12"}"#,
            config_format: ConfigFormat::Json,
            overrides: Overrides::default(),
        })
        .expect("run_policy");

        assert_eq!(out.profile, "standard");
        assert_eq!(out.payload.minimum_character_length, 12);
        assert_eq!(out.payload.max_sequence, Some(3));
    }

    #[test]
    fn malformed_settings_report_the_stage() {
        let err = run_policy(PolicyInput {
            config_text: "minimum_character_length = [",
            config_format: ConfigFormat::Toml,
            overrides: Overrides::default(),
        })
        .expect_err("malformed toml");
        assert_eq!(err.to_string(), "parse settings");
    }
}
