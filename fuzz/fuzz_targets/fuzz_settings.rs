//! Fuzz target for settings parsing and resolution.
//!
//! Goal: parsing and resolving arbitrary settings text should **never panic**, and anything that
//! resolves must be a policy the validator accepts.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_settings
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use pwguard_settings::{Overrides, parse_settings_json, parse_settings_toml, resolve_settings};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for parsed in [parse_settings_toml(text), parse_settings_json(text)] {
        if let Ok(settings) = parsed
            && let Ok(resolved) = resolve_settings(settings, Overrides::default())
        {
            assert!(resolved.effective.config.check().is_ok());
        }
    }
});
