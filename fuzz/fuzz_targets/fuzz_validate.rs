//! Fuzz target for the password validator.
//!
//! Goal: `validate` should **never panic** on any candidate under any well-formed policy, and its
//! output must follow rule order without duplicates.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pwguard_domain::{PolicyConfig, validate};

#[derive(Arbitrary, Debug)]
struct Input {
    minimum_character_length: u8,
    max_repeats: Option<u32>,
    max_sequence: Option<u32>,
    disallow_common_passwords: bool,
    require_number_characters: bool,
    require_symbol_characters: bool,
    candidate: String,
}

fuzz_target!(|input: Input| {
    let cfg = PolicyConfig {
        minimum_character_length: u32::from(input.minimum_character_length).clamp(3, 255),
        max_repeats: input.max_repeats.map(|n| n.max(1)),
        max_sequence: input.max_sequence.map(|n| n.max(1)),
        disallow_common_passwords: input.disallow_common_passwords,
        require_number_characters: input.require_number_characters,
        require_symbol_characters: input.require_symbol_characters,
        ..PolicyConfig::default()
    };

    let out = validate(&cfg, &input.candidate).expect("policy is well formed");
    assert!(out.windows(2).all(|w| w[0] < w[1]));
});
