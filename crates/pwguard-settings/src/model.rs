use crate::coerce::{LooseBool, LooseInt, nullable};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_SETTINGS_V1: &str = "pwguard.settings.v1";

/// Password policy settings schema v1.
///
/// This is a *user-facing* model mirroring the settings-update payload. It is intentionally
/// permissive: values may arrive in the loosely typed forms the settings store keeps.
/// A missing field keeps the profile's value. For `max_repeats` and `max_sequence`, an explicit
/// `null` or an empty string disables the rule.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicySettingsV1 {
    /// Optional schema string for tooling (`pwguard.settings.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Starting profile: `default`, `standard` or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_character_length: Option<LooseInt>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_number_characters: Option<LooseBool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_symbol_characters: Option<LooseBool>,

    /// Maximum consecutive identical characters. `null` disables the rule.
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_repeats: Option<Option<LooseInt>>,

    /// Maximum run taken from the alphabet or a keyboard row. `null` disables the rule.
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_sequence: Option<Option<LooseInt>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallow_common_passwords: Option<LooseBool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_login_attempts: Option<LooseInt>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_login_suspension: Option<LooseBool>,
}
