use pwguard_domain::PolicyConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The strongly typed settings-update payload.
///
/// Disabled thresholds are written as `null` rather than a default value, so the payload keeps
/// them disabled whatever profile it is later resolved against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicySettingsPayload {
    pub minimum_character_length: u32,
    pub require_number_characters: bool,
    pub require_symbol_characters: bool,
    #[serde(default)]
    pub max_repeats: Option<u32>,
    #[serde(default)]
    pub max_sequence: Option<u32>,
    pub disallow_common_passwords: bool,
    pub maximum_login_attempts: u32,
    pub allow_login_suspension: bool,
}

pub fn to_settings_payload(cfg: &PolicyConfig) -> PolicySettingsPayload {
    PolicySettingsPayload {
        minimum_character_length: cfg.minimum_character_length,
        require_number_characters: cfg.require_number_characters,
        require_symbol_characters: cfg.require_symbol_characters,
        max_repeats: cfg.max_repeats,
        max_sequence: cfg.max_sequence,
        disallow_common_passwords: cfg.disallow_common_passwords,
        maximum_login_attempts: cfg.maximum_login_attempts,
        allow_login_suspension: cfg.allow_login_suspension,
    }
}
