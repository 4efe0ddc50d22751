//! Property tests for verdict determinism and policy agreement.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use focus_model::{
    ChargeCategory, ChargeClass, CommitmentDiscountStatus, FocusRecord, ValidationPolicy,
};
use focus_validate::validate;

fn arb_money() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-150.0),
        Just(0.005),
        Just(42.5),
        Just(100.0),
        Just(150.0),
        Just(1.0e9),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn arb_quantity() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(1.0),
        Just(50.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
    ]
}

fn arb_text(choices: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::sample::select(choices).prop_map(str::to_string)
}

prop_compose! {
    fn arb_record()(
        identity in (
            arb_text(&["", "Example Cloud"]),
            arb_text(&["", "billing-001"]),
            arb_text(&["", "USD", "usd", "EUR", "ZZZ"]),
        ),
        charge_category in prop_oneof![
            Just(ChargeCategory::Unspecified),
            Just(ChargeCategory::Usage),
            Just(ChargeCategory::Purchase),
            Just(ChargeCategory::Tax),
        ],
        charge_class in prop_oneof![
            Just(ChargeClass::Unspecified),
            Just(ChargeClass::Regular),
            Just(ChargeClass::Correction),
        ],
        costs in (arb_money(), arb_money(), arb_money(), arb_money(), arb_money()),
        quantities in (arb_quantity(), arb_quantity()),
        units in (arb_text(&["", "Hours"]), arb_text(&["", "Hours"])),
        commitment in (
            arb_text(&["", "cd-1"]),
            prop_oneof![
                Just(CommitmentDiscountStatus::Unspecified),
                Just(CommitmentDiscountStatus::Used),
            ],
        ),
        allocation in (arb_text(&["", "proportional"]), arb_text(&["", "res-1"])),
        periods_set in any::<bool>(),
    ) -> FocusRecord {
        let (provider_name, billing_account_id, billing_currency) = identity;
        let (billed_cost, effective_cost, list_cost, contracted_cost, contracted_unit_price) =
            costs;
        let (pricing_quantity, consumed_quantity) = quantities;
        let (consumed_unit, pricing_unit) = units;
        let (commitment_discount_id, commitment_discount_status) = commitment;
        let (allocation_method, allocated_resource_id) = allocation;
        let period = |set: bool| {
            set.then(|| Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap())
        };
        FocusRecord {
            provider_name,
            publisher_name: "Example Cloud".to_string(),
            invoice_issuer_name: "Example Cloud".to_string(),
            billing_account_id,
            billing_currency,
            billing_period_start: period(periods_set),
            billing_period_end: period(periods_set),
            charge_period_start: period(periods_set),
            charge_period_end: period(periods_set),
            charge_category,
            charge_class,
            charge_frequency: focus_model::ChargeFrequency::UsageBased,
            charge_description: "generated".to_string(),
            billed_cost,
            effective_cost,
            list_cost,
            contracted_cost,
            contracted_unit_price,
            pricing_quantity,
            consumed_quantity,
            consumed_unit,
            pricing_unit,
            commitment_discount_id,
            commitment_discount_status,
            allocation_method,
            allocated_resource_id,
            service_category: "Compute".to_string(),
            service_name: "Virtual Machines".to_string(),
            ..FocusRecord::default()
        }
    }
}

proptest! {
    /// Same record, same policy, same verdict: the engine is a pure
    /// function of record state.
    #[test]
    fn validation_is_deterministic(record in arb_record()) {
        for policy in [ValidationPolicy::FailFast, ValidationPolicy::Aggregate] {
            let first = validate(&record, policy);
            let second = validate(&record, policy);
            prop_assert_eq!(first, second);
        }
    }

    /// The fail-fast violation is always the head of the aggregate list.
    #[test]
    fn fail_fast_is_prefix_of_aggregate(record in arb_record()) {
        let fast = validate(&record, ValidationPolicy::FailFast);
        let full = validate(&record, ValidationPolicy::Aggregate);
        prop_assert_eq!(fast.is_valid(), full.is_valid());
        if let (Some(first_fast), Some(first_full)) = (fast.first(), full.first()) {
            prop_assert_eq!(first_fast, first_full);
        }
    }

    /// Fail-fast surfaces at most one violation.
    #[test]
    fn fail_fast_yields_at_most_one_violation(record in arb_record()) {
        let fast = validate(&record, ValidationPolicy::FailFast);
        prop_assert!(fast.violations().len() <= 1);
    }

    /// Corrections never trip the cost-hierarchy rules, whatever the
    /// numeric relationship between list, effective, and billed cost.
    #[test]
    fn corrections_are_exempt_from_cost_hierarchy(mut record in arb_record()) {
        use focus_model::ViolationKind;
        record.charge_class = ChargeClass::Correction;
        let full = validate(&record, ValidationPolicy::Aggregate);
        for violation in full.violations() {
            prop_assert_ne!(violation.kind, ViolationKind::EffectiveExceedsList);
            prop_assert_ne!(violation.kind, ViolationKind::EffectiveExceedsBilled);
            prop_assert_ne!(violation.kind, ViolationKind::ContractedCostMismatch);
        }
    }
}
