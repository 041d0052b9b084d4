use crate::checks;
use crate::findings::finding_for;
use crate::model::Candidate;
use crate::policy::{EffectivePolicy, InvalidConfig, PolicyConfig};
use crate::report::DomainReport;
use pwguard_types::{PolicyData, Verdict, ViolationCode};

/// Judge `candidate` against `cfg`.
///
/// Returns every violated rule in evaluation order; an empty list means the candidate is
/// acceptable. Fails only when `cfg` itself is malformed.
pub fn validate(cfg: &PolicyConfig, candidate: &str) -> Result<Vec<ViolationCode>, InvalidConfig> {
    cfg.check_rules()?;

    let candidate = Candidate::new(candidate);
    let mut out = Vec::new();
    checks::run_all(cfg, &candidate, &mut out);

    debug_assert!(
        out.windows(2).all(|w| w[0] < w[1]),
        "violations must follow rule order without duplicates"
    );

    Ok(out)
}

/// Judge `candidate` and build a report with one finding per violation.
///
/// The report never contains the candidate itself, only its length.
pub fn evaluate(policy: &EffectivePolicy, candidate: &str) -> Result<DomainReport, InvalidConfig> {
    let violations = validate(&policy.config, candidate)?;

    let findings = violations
        .iter()
        .map(|v| finding_for(*v, &policy.config))
        .collect::<Vec<_>>();

    let verdict = if violations.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let data = PolicyData {
        profile: policy.profile.clone(),
        candidate_length: u32::try_from(candidate.chars().count()).unwrap_or(u32::MAX),
        rules_evaluated: policy.config.rules_enabled(),
        violations_total: u32::try_from(violations.len()).unwrap_or(u32::MAX),
    };

    Ok(DomainReport {
        verdict,
        violations,
        findings,
        data,
    })
}
