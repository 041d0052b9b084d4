use crate::model::Candidate;
use crate::policy::PolicyConfig;
use pwguard_types::ViolationCode;

pub fn run(cfg: &PolicyConfig, candidate: &Candidate<'_>, out: &mut Vec<ViolationCode>) {
    if !cfg.require_number_characters {
        return;
    }

    // ASCII 0-9 only; other Unicode digits do not count.
    if !candidate.as_str().chars().any(|c| c.is_ascii_digit()) {
        out.push(ViolationCode::MissingDigit);
    }
}
