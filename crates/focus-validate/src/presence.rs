//! Field-presence stage.
//!
//! A mandatory field is missing if and only if it equals its type's zero
//! value. The table is walked in schema declaration order, so the first
//! violation reported under fail-fast is stable across runs.

use focus_model::{FocusRecord, ValidationPolicy, Violation, ViolationKind};
use focus_standards::MANDATORY_FIELDS;

/// Check the mandatory-field table against a record.
///
/// Returns the first missing field under [`ValidationPolicy::FailFast`], all
/// missing fields under [`ValidationPolicy::Aggregate`].
pub fn check(record: &FocusRecord, policy: ValidationPolicy) -> Vec<Violation> {
    let mut violations = Vec::new();
    for field in MANDATORY_FIELDS {
        if (field.is_set)(record) {
            continue;
        }
        violations.push(Violation::for_field(
            ViolationKind::MissingMandatoryField,
            field.name,
            format!("mandatory field {} is not set", field.name),
        ));
        if policy == ValidationPolicy::FailFast {
            break;
        }
    }
    violations
}
