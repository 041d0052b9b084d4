//! Policy bounds shared by the settings loader and the validator.

/// Smallest configurable `minimum_character_length`.
pub const MIN_CHARACTER_LENGTH: u32 = 3;
/// Fixed ceiling on password length. Not configurable upward.
pub const MAX_CHARACTER_LENGTH: u32 = 255;
pub const DEFAULT_CHARACTER_LENGTH: u32 = 8;

pub const MIN_LOGIN_ATTEMPTS: u32 = 3;
pub const MAX_LOGIN_ATTEMPTS: u32 = 20;
pub const DEFAULT_LOGIN_ATTEMPTS: u32 = 10;
