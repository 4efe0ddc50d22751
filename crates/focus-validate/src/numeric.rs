//! Numeric-domain stage.
//!
//! Rejects IEEE 754 NaN and infinities in monetary and quantity fields.
//! This stage runs before any cross-field comparison: a NaN fed into a
//! comparison evaluates false and would silently mask the real defect.

use focus_model::{FocusRecord, ValidationPolicy, Violation, ViolationKind};
use focus_standards::{COST_TOLERANCE, NUMERIC_FIELDS};

/// Check every monetary/quantity field for a finite value.
pub fn check(record: &FocusRecord, policy: ValidationPolicy) -> Vec<Violation> {
    let mut violations = Vec::new();
    for field in NUMERIC_FIELDS {
        let value = (field.value)(record);
        let violation = if value.is_nan() {
            Some(Violation::for_field(
                ViolationKind::ValueNotANumber,
                field.name,
                format!("{} cannot be NaN", field.name),
            ))
        } else if value.is_infinite() {
            Some(Violation::for_field(
                ViolationKind::ValueInfinite,
                field.name,
                format!("{} cannot be infinite, got {value}", field.name),
            ))
        } else {
            None
        };
        if let Some(violation) = violation {
            violations.push(violation);
            if policy == ValidationPolicy::FailFast {
                break;
            }
        }
    }
    violations
}

/// Tolerance-based equality for derived-value checks.
///
/// True when `actual` is within [`COST_TOLERANCE`] relative error of
/// `expected`. Exactly at the threshold passes; exact equality is
/// intentionally not required, to absorb float rounding in upstream
/// pipelines. `expected` must be non-zero; callers skip the comparison when
/// there is no meaningful product to verify.
pub fn within_tolerance(actual: f64, expected: f64) -> bool {
    ((actual - expected) / expected).abs() <= COST_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_and_near_match_pass() {
        assert!(within_tolerance(100.0, 100.0));
        // 5e-5 relative error, half the tolerance
        assert!(within_tolerance(100.005, 100.0));
    }

    #[test]
    fn errors_beyond_tolerance_fail() {
        // 2e-4 relative error, double the tolerance
        assert!(!within_tolerance(100.02, 100.0));
        assert!(!within_tolerance(50.0, 100.0));
    }

    #[test]
    fn relative_error_exactly_at_threshold_passes() {
        // 10001.0 - 10000.0 is exactly 1.0, and 1.0 / 10000.0 rounds to
        // the same f64 as the 1e-4 tolerance constant, so these sit on
        // the threshold itself rather than bracketing it.
        assert!(within_tolerance(10001.0, 10000.0));
        assert!(within_tolerance(9999.0, 10000.0));
    }

    #[test]
    fn one_ulp_beyond_threshold_fails() {
        assert!(!within_tolerance(10001.0_f64.next_up(), 10000.0));
        assert!(!within_tolerance(9999.0_f64.next_down(), 10000.0));
    }

    #[test]
    fn tolerance_is_symmetric_around_expected() {
        assert!(within_tolerance(99.995, 100.0));
        assert!(within_tolerance(-99.995, -100.0));
        assert!(!within_tolerance(-50.0, -100.0));
    }
}
