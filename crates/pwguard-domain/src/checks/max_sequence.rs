use crate::model::Candidate;
use crate::policy::PolicyConfig;
use crate::tables::{LONGEST_SEQUENCE, in_any_sequence};
use pwguard_types::ViolationCode;

pub fn run(cfg: &PolicyConfig, candidate: &Candidate<'_>, out: &mut Vec<ViolationCode>) {
    let Some(max_sequence) = cfg.max_sequence else {
        return;
    };

    let window = (max_sequence as usize).saturating_add(1);
    if window > LONGEST_SEQUENCE {
        return;
    }

    if candidate.windows(window).any(in_any_sequence) {
        out.push(ViolationCode::SequenceDetected);
    }
}
