//! Explain registry for checks and codes.
//!
//! Maps check IDs and violation codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to pick a password that passes.
    pub remediation: &'static str,
    /// Before/after password examples.
    pub examples: ExamplePair,
}

/// Before and after password examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A password that would be rejected.
    pub before: &'static str,
    /// A password that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_PASSWORD_LENGTH => Some(explain_length()),
        ids::CHECK_PASSWORD_MAX_REPEATS => Some(explain_max_repeats()),
        ids::CHECK_PASSWORD_MAX_SEQUENCE => Some(explain_max_sequence()),
        ids::CHECK_PASSWORD_COMMON => Some(explain_common()),
        ids::CHECK_PASSWORD_REQUIRE_NUMBER => Some(explain_require_number()),
        ids::CHECK_PASSWORD_REQUIRE_SYMBOL => Some(explain_require_symbol()),

        // Codes
        ids::CODE_TOO_SHORT => Some(explain_too_short()),
        ids::CODE_TOO_LONG => Some(explain_too_long()),
        ids::CODE_REPEATED => Some(explain_max_repeats()),
        ids::CODE_SEQUENCE => Some(explain_max_sequence()),
        ids::CODE_COMMON => Some(explain_common()),
        ids::CODE_NO_DIGITS => Some(explain_require_number()),
        ids::CODE_NO_SYMBOLS => Some(explain_require_symbol()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_PASSWORD_LENGTH,
        ids::CHECK_PASSWORD_MAX_REPEATS,
        ids::CHECK_PASSWORD_MAX_SEQUENCE,
        ids::CHECK_PASSWORD_COMMON,
        ids::CHECK_PASSWORD_REQUIRE_NUMBER,
        ids::CHECK_PASSWORD_REQUIRE_SYMBOL,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_TOO_SHORT,
        ids::CODE_TOO_LONG,
        ids::CODE_REPEATED,
        ids::CODE_SEQUENCE,
        ids::CODE_COMMON,
        ids::CODE_NO_DIGITS,
        ids::CODE_NO_SYMBOLS,
    ]
}

// --- Check-level explanations ---

fn explain_length() -> Explanation {
    Explanation {
        title: "Password Length",
        description: "\
Rejects passwords shorter than the account's `minimum_character_length` or longer than
255 characters.

The minimum is configurable between 3 and 255 characters (default 8). The 255-character
ceiling is fixed and applies regardless of the configured minimum. Length is counted in
characters, not bytes.",
        remediation: "\
Choose a password at least as long as the configured minimum. Passphrases made of
several unrelated words reach the minimum easily and are easier to remember.",
        examples: ExamplePair {
            before: "hunter2",
            after: "correct horse battery staple",
        },
    }
}

fn explain_too_short() -> Explanation {
    let mut exp = explain_length();
    exp.title = "Password Too Short";
    exp
}

fn explain_too_long() -> Explanation {
    let mut exp = explain_length();
    exp.title = "Password Too Long";
    exp.remediation = "\
Keep the password at or under 255 characters. Password managers can be told to generate
a shorter value.";
    exp
}

fn explain_max_repeats() -> Explanation {
    Explanation {
        title: "Repeated Characters",
        description: "\
Rejects passwords that repeat the same character more than `max_repeats` times in a row.

With `max_repeats = 2`, `aab` is accepted but `aaab` is rejected. Only consecutive
repeats count; the same character appearing in separate places is fine.",
        remediation: "\
Break up runs of the same character with other characters, or choose a different
password.",
        examples: ExamplePair {
            before: "zzzz9!mango",
            after: "z9z!mango",
        },
    }
}

fn explain_max_sequence() -> Explanation {
    Explanation {
        title: "Character Sequences",
        description: "\
Rejects passwords containing a run of more than `max_sequence` characters taken in order
from the alphabet or a keyboard row, forwards or backwards.

The known sequences are:
- abcdefghijklmnopqrstuvwxyz
- `1234567890-=
- qwertyuiop[]\\
- asdfghjkl;'
- zxcvbnm,./

Matching is case-sensitive.",
        remediation: "\
Avoid walking along a keyboard row or the alphabet. Mix characters from different
rows and positions.",
        examples: ExamplePair {
            before: "xqwertyz",
            after: "xqwezr8!",
        },
    }
}

fn explain_common() -> Explanation {
    Explanation {
        title: "Common Passwords",
        description: "\
Rejects passwords that appear in a curated list of the most frequently used passwords.

The comparison ignores case, so `Password` and `PASSWORD` are rejected as well.",
        remediation: "\
Pick a password that is not a dictionary word or a well-known favourite. A password
manager can generate one for you.",
        examples: ExamplePair {
            before: "password",
            after: "Xq7!zT2r",
        },
    }
}

fn explain_require_number() -> Explanation {
    Explanation {
        title: "Require a Number",
        description: "\
Rejects passwords that do not contain at least one decimal digit (0-9).",
        remediation: "\
Add at least one digit anywhere in the password.",
        examples: ExamplePair {
            before: "Abcdefgh",
            after: "Abcdefg1",
        },
    }
}

fn explain_require_symbol() -> Explanation {
    Explanation {
        title: "Require a Symbol",
        description: "\
Rejects passwords that do not contain at least one symbol from a fixed list:

    ! @ # $ % ^ & * ( ) _ + - = [ ] { } | ; : ' \" < > , . ? /

Other punctuation, such as backtick, tilde, backslash or non-ASCII symbols, does not
satisfy this rule.",
        remediation: "\
Add at least one symbol from the list above.",
        examples: ExamplePair {
            before: "Abcdefg1",
            after: "Abc!efg1",
        },
    }
}
