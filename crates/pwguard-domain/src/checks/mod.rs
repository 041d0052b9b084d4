use crate::model::Candidate;
use crate::policy::PolicyConfig;
use pwguard_types::ViolationCode;

mod common;
mod length;
mod max_repeats;
mod max_sequence;
mod require_number;
mod require_symbol;


pub use require_symbol::SYMBOLS;

/// Run every rule in evaluation order. Rules never short-circuit each other.
pub fn run_all(cfg: &PolicyConfig, candidate: &Candidate<'_>, out: &mut Vec<ViolationCode>) {
    length::run(cfg, candidate, out);
    max_repeats::run(cfg, candidate, out);
    max_sequence::run(cfg, candidate, out);
    common::run(cfg, candidate, out);
    require_number::run(cfg, candidate, out);
    require_symbol::run(cfg, candidate, out);
}
