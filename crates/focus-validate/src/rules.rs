//! Cross-field rule set.
//!
//! A fixed, ordered table of named invariants over the full record. Each
//! rule is a pure predicate returning at most one violation; the table is
//! read-only after process startup and its declaration order is the verdict
//! order. Adding a rule is a schema-evolution step: append to the table,
//! never reuse a retired kind.

use focus_model::{
    ChargeCategory, FocusRecord, ValidationPolicy, Violation, ViolationKind,
};
use focus_standards::{
    StandardsError, has_capacity_reservation_id, has_capacity_reservation_status,
    has_commitment_discount_id, has_commitment_discount_status, hierarchy_rules_apply,
    is_valid_currency,
};

use crate::numeric::within_tolerance;

/// One named invariant: a stable kind paired with its pure predicate.
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: ViolationKind,
    pub check: fn(&FocusRecord) -> Option<Violation>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// The cross-field rule table, in declaration order.
pub const RULES: &[Rule] = &[
    Rule {
        kind: ViolationKind::InvalidCurrency,
        check: currency_valid,
    },
    Rule {
        kind: ViolationKind::EffectiveExceedsList,
        check: effective_within_list,
    },
    Rule {
        kind: ViolationKind::EffectiveExceedsBilled,
        check: effective_within_billed,
    },
    Rule {
        kind: ViolationKind::ContractedCostMismatch,
        check: contracted_cost_consistent,
    },
    Rule {
        kind: ViolationKind::UsageQuantityRequired,
        check: usage_quantity_positive,
    },
    Rule {
        kind: ViolationKind::ConsumedUnitRequired,
        check: consumed_unit_present,
    },
    Rule {
        kind: ViolationKind::PricingUnitRequired,
        check: pricing_unit_present,
    },
    Rule {
        kind: ViolationKind::CommitmentDiscountIdWithoutStatus,
        check: commitment_discount_id_has_status,
    },
    Rule {
        kind: ViolationKind::CommitmentDiscountStatusWithoutId,
        check: commitment_discount_status_has_id,
    },
    Rule {
        kind: ViolationKind::CapacityReservationIdWithoutStatus,
        check: capacity_reservation_id_has_status,
    },
    Rule {
        kind: ViolationKind::CapacityReservationStatusWithoutId,
        check: capacity_reservation_status_has_id,
    },
    Rule {
        kind: ViolationKind::AllocationMethodWithoutResource,
        check: allocation_method_has_resource,
    },
];

/// Run the rule table against a record.
///
/// Under fail-fast the first firing rule ends the pass; under aggregate
/// every rule runs and the violations keep declaration order.
pub fn check(record: &FocusRecord, policy: ValidationPolicy) -> Vec<Violation> {
    let mut violations = Vec::new();
    for rule in RULES {
        if let Some(violation) = (rule.check)(record) {
            debug_assert_eq!(violation.kind, rule.kind);
            violations.push(violation);
            if policy == ValidationPolicy::FailFast {
                break;
            }
        }
    }
    violations
}

/// Verify rule-table invariants at process startup: every kind appears at
/// most once. A duplicate would make kind identity ambiguous for callers.
pub fn verify_rule_kinds() -> Result<(), StandardsError> {
    let mut seen = std::collections::BTreeSet::new();
    for rule in RULES {
        if !seen.insert(rule.kind.as_str()) {
            return Err(StandardsError::DuplicateRuleKind {
                kind: rule.kind.to_string(),
            });
        }
    }
    Ok(())
}

fn currency_valid(record: &FocusRecord) -> Option<Violation> {
    // Absence is the presence stage's finding, not a bad code.
    if record.billing_currency.is_empty() || is_valid_currency(&record.billing_currency) {
        return None;
    }
    Some(Violation::for_field(
        ViolationKind::InvalidCurrency,
        "BillingCurrency",
        format!(
            "BillingCurrency {:?} is not an ISO 4217 currency code",
            record.billing_currency
        ),
    ))
}

fn effective_within_list(record: &FocusRecord) -> Option<Violation> {
    if !hierarchy_rules_apply(record) || record.effective_cost <= record.list_cost {
        return None;
    }
    Some(Violation::cross_field(
        ViolationKind::EffectiveExceedsList,
        format!(
            "EffectiveCost {} exceeds ListCost {}",
            record.effective_cost, record.list_cost
        ),
    ))
}

fn effective_within_billed(record: &FocusRecord) -> Option<Violation> {
    if !hierarchy_rules_apply(record) || record.effective_cost <= record.billed_cost {
        return None;
    }
    Some(Violation::cross_field(
        ViolationKind::EffectiveExceedsBilled,
        format!(
            "EffectiveCost {} exceeds BilledCost {}",
            record.effective_cost, record.billed_cost
        ),
    ))
}

fn contracted_cost_consistent(record: &FocusRecord) -> Option<Violation> {
    if !hierarchy_rules_apply(record) {
        return None;
    }
    // No meaningful product to verify when either multiplicand is zero.
    if record.contracted_unit_price == 0.0 || record.pricing_quantity == 0.0 {
        return None;
    }
    let product = record.contracted_unit_price * record.pricing_quantity;
    if within_tolerance(record.contracted_cost, product) {
        return None;
    }
    Some(Violation::cross_field(
        ViolationKind::ContractedCostMismatch,
        format!(
            "ContractedCost {} does not match ContractedUnitPrice {} x PricingQuantity {} = {}",
            record.contracted_cost, record.contracted_unit_price, record.pricing_quantity, product
        ),
    ))
}

fn usage_quantity_positive(record: &FocusRecord) -> Option<Violation> {
    if record.charge_category != ChargeCategory::Usage || record.consumed_quantity > 0.0 {
        return None;
    }
    Some(Violation::for_field(
        ViolationKind::UsageQuantityRequired,
        "ConsumedQuantity",
        format!(
            "USAGE charge requires a positive ConsumedQuantity, got {}",
            record.consumed_quantity
        ),
    ))
}

fn consumed_unit_present(record: &FocusRecord) -> Option<Violation> {
    if record.consumed_quantity <= 0.0 || !record.consumed_unit.is_empty() {
        return None;
    }
    Some(Violation::for_field(
        ViolationKind::ConsumedUnitRequired,
        "ConsumedUnit",
        format!(
            "ConsumedQuantity {} requires a ConsumedUnit",
            record.consumed_quantity
        ),
    ))
}

fn pricing_unit_present(record: &FocusRecord) -> Option<Violation> {
    if record.pricing_quantity <= 0.0 || !record.pricing_unit.is_empty() {
        return None;
    }
    Some(Violation::for_field(
        ViolationKind::PricingUnitRequired,
        "PricingUnit",
        format!(
            "PricingQuantity {} requires a PricingUnit",
            record.pricing_quantity
        ),
    ))
}

fn commitment_discount_id_has_status(record: &FocusRecord) -> Option<Violation> {
    if !has_commitment_discount_id(record) || has_commitment_discount_status(record) {
        return None;
    }
    // A purchased commitment has no consumption yet, so no status applies.
    if record.charge_category == ChargeCategory::Purchase {
        return None;
    }
    Some(Violation::cross_field(
        ViolationKind::CommitmentDiscountIdWithoutStatus,
        format!(
            "CommitmentDiscountId {:?} requires a CommitmentDiscountStatus",
            record.commitment_discount_id
        ),
    ))
}

fn commitment_discount_status_has_id(record: &FocusRecord) -> Option<Violation> {
    if !has_commitment_discount_status(record) || has_commitment_discount_id(record) {
        return None;
    }
    Some(Violation::cross_field(
        ViolationKind::CommitmentDiscountStatusWithoutId,
        format!(
            "CommitmentDiscountStatus {} requires a CommitmentDiscountId",
            record.commitment_discount_status
        ),
    ))
}

fn capacity_reservation_id_has_status(record: &FocusRecord) -> Option<Violation> {
    if !has_capacity_reservation_id(record) || has_capacity_reservation_status(record) {
        return None;
    }
    Some(Violation::cross_field(
        ViolationKind::CapacityReservationIdWithoutStatus,
        format!(
            "CapacityReservationId {:?} requires a CapacityReservationStatus",
            record.capacity_reservation_id
        ),
    ))
}

fn capacity_reservation_status_has_id(record: &FocusRecord) -> Option<Violation> {
    if !has_capacity_reservation_status(record) || has_capacity_reservation_id(record) {
        return None;
    }
    Some(Violation::cross_field(
        ViolationKind::CapacityReservationStatusWithoutId,
        format!(
            "CapacityReservationStatus {} requires a CapacityReservationId",
            record.capacity_reservation_status
        ),
    ))
}

fn allocation_method_has_resource(record: &FocusRecord) -> Option<Violation> {
    // One-directional: a resource tagged for future allocation is valid
    // without a method.
    if record.allocation_method.is_empty() || !record.allocated_resource_id.is_empty() {
        return None;
    }
    Some(Violation::cross_field(
        ViolationKind::AllocationMethodWithoutResource,
        format!(
            "AllocationMethod {:?} requires an AllocatedResourceId",
            record.allocation_method
        ),
    ))
}
