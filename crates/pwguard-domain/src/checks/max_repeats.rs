use crate::model::Candidate;
use crate::policy::PolicyConfig;
use pwguard_types::ViolationCode;

pub fn run(cfg: &PolicyConfig, candidate: &Candidate<'_>, out: &mut Vec<ViolationCode>) {
    let Some(max_repeats) = cfg.max_repeats else {
        return;
    };

    if longest_run(candidate.as_str()) > max_repeats as usize {
        out.push(ViolationCode::RepeatedCharacters);
    }
}

/// Length of the longest run of one repeated character.
fn longest_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev = None;

    for c in text.chars() {
        if prev == Some(c) {
            current += 1;
        } else {
            current = 1;
            prev = Some(c);
        }
        longest = longest.max(current);
    }

    longest
}
