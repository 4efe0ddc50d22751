//! Tests for fluent record construction and finalize-time validation.

use chrono::{TimeZone, Utc};
use focus_model::{
    ChargeCategory, ChargeClass, ChargeFrequency, CommitmentDiscountStatus, ValidationPolicy,
    ViolationKind,
};
use focus_validate::{RecordBuilder, validate};

fn builder_with_valid_usage() -> RecordBuilder {
    RecordBuilder::new()
        .provider("Example Cloud", "Example Cloud", "Example Cloud")
        .billing_account("billing-001", "Primary")
        .billing_period(
            Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap(),
        )
        .charge_period(
            Utc.with_ymd_and_hms(2025, 7, 14, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 7, 15, 0, 0, 0).unwrap(),
        )
        .charge(
            ChargeCategory::Usage,
            ChargeClass::Regular,
            ChargeFrequency::UsageBased,
            "Virtual machine usage",
        )
        .costs(100.0, 90.0, 100.0, 90.0)
        .currency("USD")
        .service("Compute", "Virtual Machines", "Virtual Machines")
        .usage(1.0, "Hours")
}

#[test]
fn finalize_returns_completed_record() {
    let record = builder_with_valid_usage()
        .tag("team", "platform")
        .finalize()
        .expect("valid record");
    assert_eq!(record.provider_name, "Example Cloud");
    assert_eq!(record.tags.get("team").map(String::as_str), Some("platform"));
    assert!(validate(&record, ValidationPolicy::Aggregate).is_valid());
}

#[test]
fn finalize_surfaces_first_violation() {
    let violation = builder_with_valid_usage()
        .currency("usd")
        .finalize()
        .expect_err("lowercase currency must fail");
    assert_eq!(violation.kind, ViolationKind::InvalidCurrency);
}

#[test]
fn finalize_reports_missing_mandatory_field() {
    let violation = RecordBuilder::new()
        .finalize()
        .expect_err("empty record must fail");
    assert_eq!(violation.kind, ViolationKind::MissingMandatoryField);
    assert_eq!(violation.field.as_deref(), Some("ProviderName"));
}

#[test]
fn setter_order_does_not_change_the_verdict() {
    let forward = builder_with_valid_usage().finalize().expect("valid");
    let reordered = RecordBuilder::new()
        .usage(1.0, "Hours")
        .service("Compute", "Virtual Machines", "Virtual Machines")
        .currency("USD")
        .costs(100.0, 90.0, 100.0, 90.0)
        .charge(
            ChargeCategory::Usage,
            ChargeClass::Regular,
            ChargeFrequency::UsageBased,
            "Virtual machine usage",
        )
        .charge_period(
            Utc.with_ymd_and_hms(2025, 7, 14, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 7, 15, 0, 0, 0).unwrap(),
        )
        .billing_period(
            Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap(),
        )
        .billing_account("billing-001", "Primary")
        .provider("Example Cloud", "Example Cloud", "Example Cloud")
        .finalize()
        .expect("valid in any order");
    assert_eq!(forward, reordered);
}

#[test]
fn setters_do_not_validate_eagerly() {
    // A transiently inconsistent pair is fine until finalize.
    let violation = builder_with_valid_usage()
        .commitment_discount("cd-1", "1yr reserved", "Spend", "Reservation",
            CommitmentDiscountStatus::Unspecified)
        .finalize()
        .expect_err("id without status fails only at finalize");
    assert_eq!(violation.kind, ViolationKind::CommitmentDiscountIdWithoutStatus);
}
