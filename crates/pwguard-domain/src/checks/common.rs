use crate::model::Candidate;
use crate::policy::PolicyConfig;
use crate::tables::is_common_password;
use pwguard_types::ViolationCode;

pub fn run(cfg: &PolicyConfig, candidate: &Candidate<'_>, out: &mut Vec<ViolationCode>) {
    if !cfg.disallow_common_passwords {
        return;
    }

    if is_common_password(candidate.as_str()) {
        out.push(ViolationCode::CommonPassword);
    }
}
