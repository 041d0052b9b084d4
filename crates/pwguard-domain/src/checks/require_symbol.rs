use crate::model::Candidate;
use crate::policy::PolicyConfig;
use pwguard_types::ViolationCode;

/// Fixed allowlist of characters that satisfy the symbol requirement.
///
/// Backtick, tilde, backslash and non-ASCII punctuation are not in it.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:'\"<>,.?/";

pub fn run(cfg: &PolicyConfig, candidate: &Candidate<'_>, out: &mut Vec<ViolationCode>) {
    if !cfg.require_symbol_characters {
        return;
    }

    if !candidate.as_str().chars().any(|c| SYMBOLS.contains(c)) {
        out.push(ViolationCode::MissingSymbol);
    }
}
