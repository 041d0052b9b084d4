use crate::policy::PolicyConfig;
use pwguard_types::limits::MAX_CHARACTER_LENGTH;
use pwguard_types::{Finding, ViolationCode};
use serde_json::{Value, json};

/// Build the default English finding for one violation.
///
/// Messages and data are parameterised by the policy thresholds only.
pub fn finding_for(code: ViolationCode, cfg: &PolicyConfig) -> Finding {
    let (message, help, data) = match code {
        ViolationCode::TooShort => (
            format!(
                "Must be at least {} characters",
                cfg.minimum_character_length
            ),
            "Choose a longer password or passphrase.",
            json!({ "minimum_character_length": cfg.minimum_character_length }),
        ),
        ViolationCode::TooLong => (
            format!("Can't exceed {} characters", MAX_CHARACTER_LENGTH),
            "Shorten the password.",
            json!({ "maximum_character_length": MAX_CHARACTER_LENGTH }),
        ),
        ViolationCode::RepeatedCharacters => (
            format!(
                "Can't have the same character more than {} times in a row",
                threshold(cfg.max_repeats)
            ),
            "Break up runs of the same character.",
            json!({ "max_repeats": cfg.max_repeats }),
        ),
        ViolationCode::SequenceDetected => (
            format!(
                "Can't include a run of more than {} characters (e.g. abcdef)",
                threshold(cfg.max_sequence)
            ),
            "Avoid alphabet runs and walks along a keyboard row.",
            json!({ "max_sequence": cfg.max_sequence }),
        ),
        ViolationCode::CommonPassword => (
            "Can't use a common password (e.g. \"password\")".to_string(),
            "Pick a password that is not on common password lists.",
            Value::Null,
        ),
        ViolationCode::MissingDigit => (
            "Must contain a number".to_string(),
            "Add at least one digit (0-9).",
            Value::Null,
        ),
        ViolationCode::MissingSymbol => (
            "Must contain a symbol".to_string(),
            "Add at least one of ! @ # $ % ^ & * ( ) _ + - = [ ] { } | ; : ' \" < > , . ? /",
            Value::Null,
        ),
    };

    Finding {
        check_id: code.check_id().to_string(),
        code,
        message,
        help: Some(help.to_string()),
        data,
    }
}

fn threshold(value: Option<u32>) -> u32 {
    value.unwrap_or_default()
}
