//! Tests for the JSON validation-report payload.

use focus_model::{FocusRecord, ValidationPolicy, Verdict};
use focus_validate::{build_report, validate};

#[test]
fn report_counts_invalid_records() {
    let invalid = validate(&FocusRecord::default(), ValidationPolicy::Aggregate);
    let verdicts = vec![Verdict::Valid, invalid, Verdict::Valid];
    let payload = build_report(ValidationPolicy::Aggregate, &verdicts);
    assert_eq!(payload.record_count, 3);
    assert_eq!(payload.invalid_count, 1);
    assert!(payload.records[0].valid);
    assert!(!payload.records[1].valid);
    assert_eq!(payload.records[1].index, 1);
    assert_eq!(payload.records[1].error_count, payload.records[1].violations.len());
}

#[test]
fn report_serializes_with_schema_header() {
    let payload = build_report(ValidationPolicy::FailFast, &[Verdict::Valid]);
    let json = serde_json::to_value(&payload).expect("serialize payload");
    assert_eq!(json["schema"], "focus-conformance.validation-report");
    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["policy"], "fail-fast");
    assert_eq!(json["records"][0]["valid"], true);
}
