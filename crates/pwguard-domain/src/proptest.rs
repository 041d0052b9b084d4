//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Violation ordering determinism
//! - Disabled rules never emitting
//! - Arbitrary Unicode input never panicking

use crate::engine::{evaluate, validate};
use crate::policy::{EffectivePolicy, PolicyConfig};
use crate::tables::sequences;
use pwguard_types::{ViolationCode, limits};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for well-formed policy configurations.
fn arb_config() -> impl Strategy<Value = PolicyConfig> {
    (
        limits::MIN_CHARACTER_LENGTH..=limits::MAX_CHARACTER_LENGTH,
        prop::option::of(1u32..10),
        prop::option::of(1u32..30),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        limits::MIN_LOGIN_ATTEMPTS..=limits::MAX_LOGIN_ATTEMPTS,
        any::<bool>(),
    )
        .prop_map(
            |(min_len, repeats, sequence, common, number, symbol, attempts, suspension)| {
                PolicyConfig {
                    minimum_character_length: min_len,
                    max_repeats: repeats,
                    max_sequence: sequence,
                    disallow_common_passwords: common,
                    require_number_characters: number,
                    require_symbol_characters: symbol,
                    maximum_login_attempts: attempts,
                    allow_login_suspension: suspension,
                }
            },
        )
}

/// Strategy for candidate passwords: printable ASCII, arbitrary Unicode, and long inputs.
fn arb_candidate() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[ -~]{0,40}").unwrap(),
        any::<String>(),
        prop::string::string_regex("[a-z]{250,270}").unwrap(),
    ]
}

/// Strategy for a slice of a known sequence, at least `len` characters long.
fn arb_sequence_slice(len: usize) -> impl Strategy<Value = String> {
    (0..sequences().len()).prop_flat_map(move |idx| {
        let seq: Vec<char> = sequences()[idx].chars().collect();
        let max_start = seq.len().saturating_sub(len);
        (0..=max_start).prop_map(move |start| seq[start..start + len].iter().collect())
    })
}

/// A policy with every optional rule switched off.
fn minimal_config(min_len: u32) -> PolicyConfig {
    PolicyConfig {
        minimum_character_length: min_len,
        ..PolicyConfig::default()
    }
}

// ============================================================================
// Invariants
// ============================================================================

proptest! {
    #[test]
    fn validate_never_panics_and_never_errors_on_valid_config(
        cfg in arb_config(),
        candidate in arb_candidate(),
    ) {
        prop_assert!(validate(&cfg, &candidate).is_ok());
    }

    #[test]
    fn violations_follow_rule_order_without_duplicates(
        cfg in arb_config(),
        candidate in arb_candidate(),
    ) {
        let out = validate(&cfg, &candidate).unwrap();
        let expected: Vec<ViolationCode> = ViolationCode::ALL
            .into_iter()
            .filter(|code| out.contains(code))
            .collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn validate_is_deterministic(cfg in arb_config(), candidate in arb_candidate()) {
        prop_assert_eq!(validate(&cfg, &candidate).unwrap(), validate(&cfg, &candidate).unwrap());
    }

    #[test]
    fn disabled_rules_never_emit(
        min_len in limits::MIN_CHARACTER_LENGTH..=limits::MAX_CHARACTER_LENGTH,
        candidate in arb_candidate(),
    ) {
        let out = validate(&minimal_config(min_len), &candidate).unwrap();
        for code in out {
            prop_assert!(matches!(code, ViolationCode::TooShort | ViolationCode::TooLong));
        }
    }

    #[test]
    fn too_short_iff_below_minimum(
        cfg in arb_config(),
        candidate in arb_candidate(),
    ) {
        let out = validate(&cfg, &candidate).unwrap();
        let len = candidate.chars().count();
        prop_assert_eq!(
            out.contains(&ViolationCode::TooShort),
            len < cfg.minimum_character_length as usize
        );
        prop_assert_eq!(out.contains(&ViolationCode::TooLong), len > 255);
    }

    #[test]
    fn runs_longer_than_threshold_are_always_detected(
        max_repeats in 1u32..8,
        c in any::<char>(),
        prefix in "[a-z]{0,5}",
    ) {
        let cfg = PolicyConfig {
            minimum_character_length: 3,
            max_repeats: Some(max_repeats),
            ..PolicyConfig::default()
        };
        let candidate = format!("{prefix}{}", c.to_string().repeat(max_repeats as usize + 1));
        let out = validate(&cfg, &candidate).unwrap();
        prop_assert!(out.contains(&ViolationCode::RepeatedCharacters));
    }

    #[test]
    fn embedded_sequence_slices_are_always_detected(
        (max_sequence, slice) in (1usize..10).prop_flat_map(|m| (Just(m), arb_sequence_slice(m + 1))),
        prefix in "[A-Z]{0,4}",
        suffix in "[A-Z]{0,4}",
    ) {
        let cfg = PolicyConfig {
            minimum_character_length: 3,
            max_sequence: Some(max_sequence as u32),
            ..PolicyConfig::default()
        };
        let candidate = format!("{prefix}{slice}{suffix}");
        let out = validate(&cfg, &candidate).unwrap();
        prop_assert!(out.contains(&ViolationCode::SequenceDetected));
    }

    #[test]
    fn report_matches_validate(cfg in arb_config(), candidate in arb_candidate()) {
        let policy = EffectivePolicy::new("prop", cfg.clone());
        let report = evaluate(&policy, &candidate).unwrap();
        prop_assert_eq!(&report.violations, &validate(&cfg, &candidate).unwrap());
        prop_assert_eq!(report.data.violations_total as usize, report.findings.len());
        prop_assert_eq!(report.data.rules_evaluated, cfg.rules_enabled());
    }
}
