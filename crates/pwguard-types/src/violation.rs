use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One rule a candidate password failed.
///
/// Variants are declared in rule-evaluation order; `Ord` follows that order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ViolationCode {
    #[serde(rename = "too_short")]
    TooShort,
    #[serde(rename = "too_long")]
    TooLong,
    #[serde(rename = "repeated")]
    RepeatedCharacters,
    #[serde(rename = "sequence")]
    SequenceDetected,
    #[serde(rename = "common")]
    CommonPassword,
    #[serde(rename = "no_digits")]
    MissingDigit,
    #[serde(rename = "no_symbols")]
    MissingSymbol,
}

impl ViolationCode {
    /// Every code, in rule-evaluation order.
    pub const ALL: [ViolationCode; 7] = [
        ViolationCode::TooShort,
        ViolationCode::TooLong,
        ViolationCode::RepeatedCharacters,
        ViolationCode::SequenceDetected,
        ViolationCode::CommonPassword,
        ViolationCode::MissingDigit,
        ViolationCode::MissingSymbol,
    ];

    /// Field-level error key (`too_short`, `no_symbols`, ...).
    pub fn code(self) -> &'static str {
        match self {
            ViolationCode::TooShort => ids::CODE_TOO_SHORT,
            ViolationCode::TooLong => ids::CODE_TOO_LONG,
            ViolationCode::RepeatedCharacters => ids::CODE_REPEATED,
            ViolationCode::SequenceDetected => ids::CODE_SEQUENCE,
            ViolationCode::CommonPassword => ids::CODE_COMMON,
            ViolationCode::MissingDigit => ids::CODE_NO_DIGITS,
            ViolationCode::MissingSymbol => ids::CODE_NO_SYMBOLS,
        }
    }

    /// Dotted check namespace the code belongs to.
    pub fn check_id(self) -> &'static str {
        match self {
            ViolationCode::TooShort | ViolationCode::TooLong => ids::CHECK_PASSWORD_LENGTH,
            ViolationCode::RepeatedCharacters => ids::CHECK_PASSWORD_MAX_REPEATS,
            ViolationCode::SequenceDetected => ids::CHECK_PASSWORD_MAX_SEQUENCE,
            ViolationCode::CommonPassword => ids::CHECK_PASSWORD_COMMON,
            ViolationCode::MissingDigit => ids::CHECK_PASSWORD_REQUIRE_NUMBER,
            ViolationCode::MissingSymbol => ids::CHECK_PASSWORD_REQUIRE_SYMBOL,
        }
    }

    pub fn from_code(code: &str) -> Option<ViolationCode> {
        ViolationCode::ALL.into_iter().find(|v| v.code() == code)
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
