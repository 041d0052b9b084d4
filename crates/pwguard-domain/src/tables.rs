//! Process-wide lookup tables. Built once on first use and never mutated.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Alphabet and keyboard rows, forwards. Reversals are added when the table is built.
const BASE_SEQUENCES: [&str; 5] = [
    "abcdefghijklmnopqrstuvwxyz",
    "`1234567890-=",
    "qwertyuiop[]\\",
    "asdfghjkl;'",
    "zxcvbnm,./",
];

static SEQUENCES: LazyLock<Vec<String>> = LazyLock::new(|| {
    let forward = BASE_SEQUENCES.iter().map(|s| s.to_string());
    let reversed = BASE_SEQUENCES.iter().map(|s| s.chars().rev().collect());
    forward.chain(reversed).collect()
});

/// Length of the longest sequence entry. No longer window can match.
pub const LONGEST_SEQUENCE: usize = 26;

const COMMON_PASSWORDS: [&str; 100] = [
    "123456", "password", "12345678", "qwerty", "123456789", "12345", "1234", "111111",
    "1234567", "dragon", "123123", "baseball", "abc123", "football", "monkey", "letmein",
    "696969", "shadow", "master", "666666", "qwertyuiop", "123321", "mustang", "1234567890",
    "michael", "654321", "superman", "1qaz2wsx", "7777777", "121212", "000000", "qazwsx",
    "123qwe", "killer", "trustno1", "jordan", "jennifer", "zxcvbnm", "asdfgh", "hunter",
    "buster", "soccer", "harley", "batman", "andrew", "tigger", "sunshine", "iloveyou",
    "2000", "charlie", "robert", "thomas", "hockey", "ranger", "daniel", "starwars",
    "klaster", "112233", "george", "computer", "michelle", "jessica", "pepper", "1111",
    "zxcvbn", "555555", "11111111", "131313", "freedom", "777777", "pass", "maggie",
    "159753", "aaaaaa", "ginger", "princess", "joshua", "cheese", "amanda", "summer",
    "love", "ashley", "nicole", "chelsea", "biteme", "matthew", "access", "yankees",
    "987654321", "dallas", "austin", "thunder", "taylor", "matrix", "welcome", "password1",
    "admin", "qwerty123", "passw0rd", "hello",
];

static COMMON_PASSWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_PASSWORDS.into_iter().collect());

/// The ten known sequences: five base runs and their reversals.
pub fn sequences() -> &'static [String] {
    &SEQUENCES
}

/// True if `window` appears verbatim inside any known sequence (case-sensitive).
pub fn in_any_sequence(window: &str) -> bool {
    sequences().iter().any(|s| s.contains(window))
}

/// Case-insensitive membership in the common password list.
pub fn is_common_password(candidate: &str) -> bool {
    COMMON_PASSWORD_SET.contains(candidate.to_lowercase().as_str())
}
