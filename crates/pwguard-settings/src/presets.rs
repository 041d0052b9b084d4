use pwguard_domain::{EffectivePolicy, PolicyConfig};

pub const DEFAULT_PROFILE: &str = "default";

/// Known profile names, in increasing strictness.
pub const PROFILES: &[&str] = &["default", "standard", "strict"];

/// Preset profiles are opinionated starting points.
///
/// Keep these small and readable. Anything account-specific belongs in settings.
pub fn preset(profile: &str) -> Option<EffectivePolicy> {
    match profile {
        "default" => Some(EffectivePolicy::new("default", PolicyConfig::default())),
        "standard" => Some(EffectivePolicy::new("standard", standard_config())),
        "strict" => Some(EffectivePolicy::new("strict", strict_config())),
        _ => None,
    }
}

fn standard_config() -> PolicyConfig {
    PolicyConfig {
        minimum_character_length: 8,
        max_repeats: Some(2),
        max_sequence: Some(3),
        disallow_common_passwords: true,
        require_number_characters: true,
        require_symbol_characters: true,
        ..PolicyConfig::default()
    }
}

fn strict_config() -> PolicyConfig {
    PolicyConfig {
        minimum_character_length: 12,
        maximum_login_attempts: 5,
        allow_login_suspension: true,
        ..standard_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_profile_resolves_to_a_valid_policy() {
        for name in PROFILES {
            let policy = preset(name).expect("listed profile");
            assert_eq!(policy.profile, *name);
            assert_eq!(policy.config.check(), Ok(()));
        }
    }

    #[test]
    fn unknown_profile_has_no_preset() {
        assert!(preset("lenient").is_none());
    }

    #[test]
    fn default_profile_enables_only_length_rules() {
        let policy = preset(DEFAULT_PROFILE).expect("default profile");
        assert_eq!(policy.config, PolicyConfig::default());
        assert_eq!(policy.config.rules_enabled(), 2);
    }
}
