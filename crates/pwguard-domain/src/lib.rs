//! Pure policy evaluation (no IO).
//!
//! Input: a policy configuration resolved elsewhere and a candidate password.
//! Output: violated rules in evaluation order, or a report with findings + verdict.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;
pub mod tables;

mod engine;
mod findings;
pub mod checks;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, validate};
pub use policy::{EffectivePolicy, InvalidConfig, PolicyConfig};
pub use pwguard_types::ViolationCode;
