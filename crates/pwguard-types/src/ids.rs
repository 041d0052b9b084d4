//! Stable identifiers for checks and violation codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator and doubles as the
//! field-level error key attached to the password input.

// Checks
pub const CHECK_PASSWORD_LENGTH: &str = "password.length";
pub const CHECK_PASSWORD_MAX_REPEATS: &str = "password.max_repeats";
pub const CHECK_PASSWORD_MAX_SEQUENCE: &str = "password.max_sequence";
pub const CHECK_PASSWORD_COMMON: &str = "password.common";
pub const CHECK_PASSWORD_REQUIRE_NUMBER: &str = "password.require_number";
pub const CHECK_PASSWORD_REQUIRE_SYMBOL: &str = "password.require_symbol";

// Codes: password.length
pub const CODE_TOO_SHORT: &str = "too_short";
pub const CODE_TOO_LONG: &str = "too_long";

// Codes: password.max_repeats
pub const CODE_REPEATED: &str = "repeated";

// Codes: password.max_sequence
pub const CODE_SEQUENCE: &str = "sequence";

// Codes: password.common
pub const CODE_COMMON: &str = "common";

// Codes: password.require_number
pub const CODE_NO_DIGITS: &str = "no_digits";

// Codes: password.require_symbol
pub const CODE_NO_SYMBOLS: &str = "no_symbols";
