use pwguard_types::{Finding, PolicyData, Verdict, ViolationCode};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// Violated rules in evaluation order.
    pub violations: Vec<ViolationCode>,
    /// One finding per violation, same order.
    pub findings: Vec<Finding>,
    pub data: PolicyData,
}
