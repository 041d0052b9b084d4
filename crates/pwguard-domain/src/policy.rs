use pwguard_types::limits::{
    DEFAULT_CHARACTER_LENGTH, DEFAULT_LOGIN_ATTEMPTS, MAX_CHARACTER_LENGTH, MAX_LOGIN_ATTEMPTS,
    MIN_CHARACTER_LENGTH, MIN_LOGIN_ATTEMPTS,
};
use thiserror::Error;

/// Password policy for one account.
///
/// `None` thresholds mean the rule is disabled. Values are expected to be inside their domains;
/// the settings loader clamps them before they reach the validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyConfig {
    pub minimum_character_length: u32,
    pub max_repeats: Option<u32>,
    pub max_sequence: Option<u32>,
    pub disallow_common_passwords: bool,
    pub require_number_characters: bool,
    pub require_symbol_characters: bool,
    /// Lockout threshold enforced by the login flow. Carried, never read by the validator.
    pub maximum_login_attempts: u32,
    pub allow_login_suspension: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            minimum_character_length: DEFAULT_CHARACTER_LENGTH,
            max_repeats: None,
            max_sequence: None,
            disallow_common_passwords: false,
            require_number_characters: false,
            require_symbol_characters: false,
            maximum_login_attempts: DEFAULT_LOGIN_ATTEMPTS,
            allow_login_suspension: false,
        }
    }
}

/// A structurally malformed configuration. This is a caller bug, not a validation outcome.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidConfig {
    #[error("minimum_character_length {value} is outside {min}..={max}")]
    MinimumLengthOutOfRange { value: u32, min: u32, max: u32 },

    #[error("maximum_login_attempts {value} is outside {min}..={max}")]
    LoginAttemptsOutOfRange { value: u32, min: u32, max: u32 },

    #[error("{field} must be at least 1 when set")]
    ZeroThreshold { field: &'static str },
}

impl PolicyConfig {
    /// Verify every field is inside its domain, lockout settings included.
    pub fn check(&self) -> Result<(), InvalidConfig> {
        self.check_rules()?;
        if !(MIN_LOGIN_ATTEMPTS..=MAX_LOGIN_ATTEMPTS).contains(&self.maximum_login_attempts) {
            return Err(InvalidConfig::LoginAttemptsOutOfRange {
                value: self.maximum_login_attempts,
                min: MIN_LOGIN_ATTEMPTS,
                max: MAX_LOGIN_ATTEMPTS,
            });
        }
        Ok(())
    }

    /// Verify the fields `validate` reads. Lockout settings are not consulted.
    pub fn check_rules(&self) -> Result<(), InvalidConfig> {
        if !(MIN_CHARACTER_LENGTH..=MAX_CHARACTER_LENGTH).contains(&self.minimum_character_length)
        {
            return Err(InvalidConfig::MinimumLengthOutOfRange {
                value: self.minimum_character_length,
                min: MIN_CHARACTER_LENGTH,
                max: MAX_CHARACTER_LENGTH,
            });
        }
        if self.max_repeats == Some(0) {
            return Err(InvalidConfig::ZeroThreshold {
                field: "max_repeats",
            });
        }
        if self.max_sequence == Some(0) {
            return Err(InvalidConfig::ZeroThreshold {
                field: "max_sequence",
            });
        }
        Ok(())
    }

    /// Number of rules `validate` runs under this policy. Both length bounds always run.
    pub fn rules_enabled(&self) -> u32 {
        2 + u32::from(self.max_repeats.is_some())
            + u32::from(self.max_sequence.is_some())
            + u32::from(self.disallow_common_passwords)
            + u32::from(self.require_number_characters)
            + u32::from(self.require_symbol_characters)
    }
}

/// A policy together with the profile it was resolved from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectivePolicy {
    pub profile: String,
    pub config: PolicyConfig,
}

impl EffectivePolicy {
    pub fn new(profile: impl Into<String>, config: PolicyConfig) -> Self {
        Self {
            profile: profile.into(),
            config,
        }
    }
}
