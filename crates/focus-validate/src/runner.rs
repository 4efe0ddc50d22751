//! Validation runner: stage sequencing and policy dispatch.
//!
//! Stages run strictly in order: presence, numeric domain, cross-field
//! rules. Fail-fast stops at the first violation anywhere; aggregate runs
//! every stage to completion and concatenates findings in stage order. The
//! runner never mutates the record and holds no state between calls, so any
//! number of threads may validate distinct records concurrently.

use focus_model::{FocusRecord, ValidationPolicy, Verdict, Violation};
use focus_standards::StandardsError;
use tracing::debug;

use crate::{numeric, presence, rules};

/// Validate one record under the given policy.
pub fn validate(record: &FocusRecord, policy: ValidationPolicy) -> Verdict {
    let mut violations = Vec::new();

    run_stage(&mut violations, policy, || presence::check(record, policy));
    run_stage(&mut violations, policy, || numeric::check(record, policy));
    run_stage(&mut violations, policy, || rules::check(record, policy));

    if !violations.is_empty() {
        debug!(
            count = violations.len(),
            first = %violations[0].kind,
            "record failed validation"
        );
    }
    Verdict::from_violations(violations)
}

/// Append a stage's findings unless fail-fast already has its answer.
fn run_stage<F>(violations: &mut Vec<Violation>, policy: ValidationPolicy, stage: F)
where
    F: FnOnce() -> Vec<Violation>,
{
    if policy == ValidationPolicy::FailFast && !violations.is_empty() {
        return;
    }
    violations.extend(stage());
}

/// Startup-time invariant check over every compiled table the engine reads.
///
/// # Errors
///
/// Propagates a [`StandardsError`] for a malformed mandatory-field, numeric,
/// or currency table, or a duplicate kind in the rule table. Any error is a
/// deployment defect and should abort the process.
pub fn verify_engine() -> Result<(), StandardsError> {
    focus_standards::verify_tables()?;
    rules::verify_rule_kinds()
}
