//! Policy settings parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves settings provided as strings.
//! Stored account settings are loosely typed (`"true"`, `"1"`, `"12"`); coercion into the strongly
//! typed [`pwguard_domain::PolicyConfig`] happens here, once.

#![forbid(unsafe_code)]

mod coerce;
mod model;
mod payload;
mod presets;
mod resolve;

pub use coerce::{LooseBool, LooseInt};
pub use model::{PolicySettingsV1, SCHEMA_SETTINGS_V1};
pub use payload::{PolicySettingsPayload, to_settings_payload};
pub use presets::{DEFAULT_PROFILE, PROFILES};
pub use resolve::{Overrides, ResolvedPolicy};

/// Parse `pwguard.toml` (or equivalent) into a typed model.
pub fn parse_settings_toml(input: &str) -> anyhow::Result<PolicySettingsV1> {
    let settings: PolicySettingsV1 = toml::from_str(input)?;
    Ok(settings)
}

/// Parse a settings-update payload (JSON object) into a typed model.
pub fn parse_settings_json(input: &str) -> anyhow::Result<PolicySettingsV1> {
    let settings: PolicySettingsV1 = serde_json::from_str(input)?;
    Ok(settings)
}

/// Resolve the effective policy used by the validator (profile + settings + overrides).
pub fn resolve_settings(
    settings: PolicySettingsV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedPolicy> {
    resolve::resolve_settings(settings, overrides)
}
