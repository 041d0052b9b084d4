use crate::model::Candidate;
use crate::policy::PolicyConfig;
use pwguard_types::ViolationCode;
use pwguard_types::limits::MAX_CHARACTER_LENGTH;

pub fn run(cfg: &PolicyConfig, candidate: &Candidate<'_>, out: &mut Vec<ViolationCode>) {
    let len = candidate.char_len();

    if len < cfg.minimum_character_length as usize {
        out.push(ViolationCode::TooShort);
    }

    // The ceiling is fixed; the configured minimum never raises or lowers it.
    if len > MAX_CHARACTER_LENGTH as usize {
        out.push(ViolationCode::TooLong);
    }
}
