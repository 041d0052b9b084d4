use crate::policy::{EffectivePolicy, PolicyConfig};

pub fn policy(config: PolicyConfig) -> EffectivePolicy {
    EffectivePolicy::new("test", config)
}

/// Every optional rule enabled with small thresholds.
pub fn full_config() -> PolicyConfig {
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

pub fn full_policy() -> EffectivePolicy {
    policy(full_config())
}

pub fn config_with_repeats(max_repeats: u32) -> PolicyConfig {
    PolicyConfig {
        minimum_character_length: 3,
        max_repeats: Some(max_repeats),
        ..PolicyConfig::default()
    }
}

pub fn config_with_sequence(max_sequence: u32) -> PolicyConfig {
    PolicyConfig {
        minimum_character_length: 3,
        max_sequence: Some(max_sequence),
        ..PolicyConfig::default()
    }
}
