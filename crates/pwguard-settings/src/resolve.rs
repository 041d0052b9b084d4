use crate::coerce::{LooseBool, LooseInt};
use crate::model::{PolicySettingsV1, SCHEMA_SETTINGS_V1};
use crate::presets::{self, DEFAULT_PROFILE, PROFILES};
use anyhow::Context;
use pwguard_domain::EffectivePolicy;
use pwguard_types::limits::{
    MAX_CHARACTER_LENGTH, MAX_LOGIN_ATTEMPTS, MIN_CHARACTER_LENGTH, MIN_LOGIN_ATTEMPTS,
};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub minimum_character_length: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedPolicy {
    pub effective: EffectivePolicy,
}

pub fn resolve_settings(
    settings: PolicySettingsV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedPolicy> {
    if let Some(schema) = settings.schema.as_deref()
        && schema != SCHEMA_SETTINGS_V1
    {
        anyhow::bail!("unsupported settings schema: {schema} (expected {SCHEMA_SETTINGS_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(settings.profile.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected one of {})",
            PROFILES.join("|")
        )
    })?;
    let cfg = &mut effective.config;

    if let Some(n) = int_field(&settings.minimum_character_length, "minimum_character_length")? {
        cfg.minimum_character_length = clamp(
            "minimum_character_length",
            n,
            MIN_CHARACTER_LENGTH,
            MAX_CHARACTER_LENGTH,
        );
    }
    if let Some(n) = int_field(&settings.maximum_login_attempts, "maximum_login_attempts")? {
        cfg.maximum_login_attempts =
            clamp("maximum_login_attempts", n, MIN_LOGIN_ATTEMPTS, MAX_LOGIN_ATTEMPTS);
    }

    if let Some(v) = &settings.max_repeats {
        cfg.max_repeats = threshold(v, "max_repeats")?;
    }
    if let Some(v) = &settings.max_sequence {
        cfg.max_sequence = threshold(v, "max_sequence")?;
    }

    if let Some(b) = bool_field(&settings.disallow_common_passwords, "disallow_common_passwords")? {
        cfg.disallow_common_passwords = b;
    }
    if let Some(b) = bool_field(&settings.require_number_characters, "require_number_characters")? {
        cfg.require_number_characters = b;
    }
    if let Some(b) = bool_field(&settings.require_symbol_characters, "require_symbol_characters")? {
        cfg.require_symbol_characters = b;
    }
    if let Some(b) = bool_field(&settings.allow_login_suspension, "allow_login_suspension")? {
        cfg.allow_login_suspension = b;
    }

    if let Some(n) = overrides.minimum_character_length {
        cfg.minimum_character_length = clamp(
            "minimum_character_length",
            i64::from(n),
            MIN_CHARACTER_LENGTH,
            MAX_CHARACTER_LENGTH,
        );
    }

    effective
        .config
        .check()
        .context("resolved policy is malformed")?;

    tracing::debug!(
        profile = %effective.profile,
        rules_enabled = effective.config.rules_enabled(),
        "resolved password policy"
    );

    Ok(ResolvedPolicy { effective })
}

fn int_field(value: &Option<LooseInt>, field: &str) -> anyhow::Result<Option<i64>> {
    match value {
        Some(v) => v.coerce().with_context(|| format!("invalid {field}")),
        None => Ok(None),
    }
}

fn bool_field(value: &Option<LooseBool>, field: &str) -> anyhow::Result<Option<bool>> {
    value
        .as_ref()
        .map(|v| v.coerce().with_context(|| format!("invalid {field}")))
        .transpose()
}

/// An optional rule threshold. `null` or empty disables the rule; zero or negative is rejected.
fn threshold(value: &Option<LooseInt>, field: &str) -> anyhow::Result<Option<u32>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let Some(n) = value.coerce().with_context(|| format!("invalid {field}"))? else {
        return Ok(None);
    };
    if n < 1 {
        anyhow::bail!("invalid {field}: must be at least 1, got {n}");
    }
    Ok(Some(u32::try_from(n).unwrap_or(u32::MAX)))
}

fn clamp(field: &str, value: i64, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(i64::from(min), i64::from(max));
    if clamped != value {
        tracing::warn!(field, value, clamped, "setting outside allowed range; clamped");
    }
    // In range after the clamp above.
    clamped as u32
}
