use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A boolean as stored by account settings: a real bool, `0`/`1`, or a string form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum LooseBool {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl LooseBool {
    pub fn coerce(&self) -> anyhow::Result<bool> {
        match self {
            LooseBool::Bool(b) => Ok(*b),
            LooseBool::Int(0) => Ok(false),
            LooseBool::Int(1) => Ok(true),
            LooseBool::Int(other) => anyhow::bail!("expected 0 or 1, got {other}"),
            LooseBool::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(true),
                "false" | "0" | "off" | "no" | "" => Ok(false),
                other => anyhow::bail!("expected a boolean, got {other:?}"),
            },
        }
    }
}

impl From<bool> for LooseBool {
    fn from(value: bool) -> Self {
        LooseBool::Bool(value)
    }
}

/// An integer as stored by account settings: a number or a numeric string.
///
/// An empty string means "not set".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Text(String),
}

impl LooseInt {
    pub fn coerce(&self) -> anyhow::Result<Option<i64>> {
        match self {
            LooseInt::Int(n) => Ok(Some(*n)),
            LooseInt::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Ok(None);
                }
                s.parse::<i64>()
                    .map(Some)
                    .map_err(|_| anyhow::anyhow!("expected an integer, got {s:?}"))
            }
        }
    }
}

impl From<i64> for LooseInt {
    fn from(value: i64) -> Self {
        LooseInt::Int(value)
    }
}

/// Keep an explicit `null` distinct from a missing field.
///
/// Pair with `#[serde(default)]`: missing is `None`, `null` is `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_bool_accepts_stored_forms() {
        for truthy in [
            LooseBool::Bool(true),
            LooseBool::Int(1),
            LooseBool::Text("true".into()),
            LooseBool::Text("1".into()),
            LooseBool::Text(" Yes ".into()),
        ] {
            assert!(truthy.coerce().unwrap(), "{truthy:?}");
        }
        for falsy in [
            LooseBool::Bool(false),
            LooseBool::Int(0),
            LooseBool::Text("false".into()),
            LooseBool::Text("0".into()),
            LooseBool::Text(String::new()),
        ] {
            assert!(!falsy.coerce().unwrap(), "{falsy:?}");
        }
    }

    #[test]
    fn loose_bool_rejects_garbage() {
        assert!(LooseBool::Int(2).coerce().is_err());
        assert!(LooseBool::Text("maybe".into()).coerce().is_err());
    }

    #[test]
    fn loose_int_parses_numbers_and_strings() {
        assert_eq!(LooseInt::Int(12).coerce().unwrap(), Some(12));
        assert_eq!(LooseInt::Text("12".into()).coerce().unwrap(), Some(12));
        assert_eq!(LooseInt::Text(" -3 ".into()).coerce().unwrap(), Some(-3));
        assert_eq!(LooseInt::Text(String::new()).coerce().unwrap(), None);
        assert!(LooseInt::Text("twelve".into()).coerce().is_err());
    }

    #[test]
    fn untagged_deserialization_picks_the_right_variant() {
        let b: LooseBool = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(b, LooseBool::Text("1".into()));
        let b: LooseBool = serde_json::from_str("true").unwrap();
        assert_eq!(b, LooseBool::Bool(true));
        let n: LooseInt = serde_json::from_str("7").unwrap();
        assert_eq!(n, LooseInt::Int(7));
    }
}
