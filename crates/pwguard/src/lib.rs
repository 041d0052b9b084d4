//! Public facade for embedding the pwguard validator.
//!
//! ```
//! use pwguard::{PolicyConfig, ViolationCode, validate};
//!
//! let cfg = PolicyConfig {
//!     require_number_characters: true,
//!     ..PolicyConfig::default()
//! };
//! assert_eq!(validate(&cfg, "longenough").unwrap(), vec![ViolationCode::MissingDigit]);
//! ```

#![forbid(unsafe_code)]

pub use pwguard_domain::report::DomainReport;
pub use pwguard_domain::{
    EffectivePolicy, InvalidConfig, PolicyConfig, ViolationCode, evaluate, validate,
};
