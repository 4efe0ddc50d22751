//! Violation model: stable failure identities and validation verdicts.
//!
//! Every named invariant maps to exactly one [`ViolationKind`] variant.
//! Callers branch on kind equality, never on message text; messages may be
//! reworded without breaking anyone. Kinds are additive across schema
//! versions and are never reused for a different semantic meaning.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity carried on the report payload so downstream tooling can filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Stable, comparable identifier for one specific business-rule failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// A mandatory field is at its zero value.
    MissingMandatoryField,
    /// A monetary or quantity field is IEEE 754 NaN.
    ValueNotANumber,
    /// A monetary or quantity field is +/- infinity.
    ValueInfinite,
    /// BillingCurrency is not an ISO 4217 alphabetic code.
    InvalidCurrency,
    /// EffectiveCost exceeds ListCost on a non-correction charge.
    EffectiveExceedsList,
    /// EffectiveCost exceeds BilledCost on a non-correction charge.
    EffectiveExceedsBilled,
    /// ContractedCost disagrees with ContractedUnitPrice x PricingQuantity.
    ContractedCostMismatch,
    /// A USAGE charge has no positive ConsumedQuantity.
    UsageQuantityRequired,
    /// Positive ConsumedQuantity without a ConsumedUnit.
    ConsumedUnitRequired,
    /// Positive PricingQuantity without a PricingUnit.
    PricingUnitRequired,
    /// CommitmentDiscountId set without a CommitmentDiscountStatus.
    CommitmentDiscountIdWithoutStatus,
    /// CommitmentDiscountStatus set without a CommitmentDiscountId.
    CommitmentDiscountStatusWithoutId,
    /// CapacityReservationId set without a CapacityReservationStatus.
    CapacityReservationIdWithoutStatus,
    /// CapacityReservationStatus set without a CapacityReservationId.
    CapacityReservationStatusWithoutId,
    /// AllocationMethod set without an AllocatedResourceId.
    AllocationMethodWithoutResource,
}

impl ViolationKind {
    /// Canonical kebab-case identifier, matching the serde wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingMandatoryField => "missing-mandatory-field",
            ViolationKind::ValueNotANumber => "value-not-a-number",
            ViolationKind::ValueInfinite => "value-infinite",
            ViolationKind::InvalidCurrency => "invalid-currency",
            ViolationKind::EffectiveExceedsList => "effective-exceeds-list",
            ViolationKind::EffectiveExceedsBilled => "effective-exceeds-billed",
            ViolationKind::ContractedCostMismatch => "contracted-cost-mismatch",
            ViolationKind::UsageQuantityRequired => "usage-quantity-required",
            ViolationKind::ConsumedUnitRequired => "consumed-unit-required",
            ViolationKind::PricingUnitRequired => "pricing-unit-required",
            ViolationKind::CommitmentDiscountIdWithoutStatus => {
                "commitment-discount-id-without-status"
            }
            ViolationKind::CommitmentDiscountStatusWithoutId => {
                "commitment-discount-status-without-id"
            }
            ViolationKind::CapacityReservationIdWithoutStatus => {
                "capacity-reservation-id-without-status"
            }
            ViolationKind::CapacityReservationStatusWithoutId => {
                "capacity-reservation-status-without-id"
            }
            ViolationKind::AllocationMethodWithoutResource => {
                "allocation-method-without-resource"
            }
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One business-rule failure found during validation.
///
/// Compare by `kind`; render with `message`. The optional `field` names the
/// offending FOCUS column for presence and numeric-domain violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: Severity,
    /// FOCUS column name, when the failure is attributable to one field.
    pub field: Option<String>,
    /// Human-readable description carrying the offending values.
    pub message: String,
}

impl Violation {
    /// Error-severity violation attributed to a single field.
    pub fn for_field(kind: ViolationKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Error-severity violation spanning multiple fields.
    pub fn cross_field(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            field: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Execution policy for a validation pass.
///
/// Fail-fast is the default: it is cheaper for latency-sensitive real-time
/// checks. Aggregate trades latency for completeness in batch data-quality
/// sweeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    #[default]
    FailFast,
    Aggregate,
}

/// Outcome of one validation pass over one record.
///
/// The violation list is non-empty and ordered by stage (presence, numeric
/// domain, cross-field) then rule-declaration order, deterministically for a
/// given record and policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "verdict", content = "violations")]
pub enum Verdict {
    Valid,
    Invalid(Vec<Violation>),
}

impl Verdict {
    /// Build a verdict from collected violations; empty means valid.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Verdict::Valid
        } else {
            Verdict::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Violations in verdict order, empty for a valid record.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Verdict::Valid => &[],
            Verdict::Invalid(violations) => violations,
        }
    }

    pub fn error_count(&self) -> usize {
        self.violations()
            .iter()
            .filter(|violation| violation.severity == Severity::Error)
            .count()
    }

    /// First violation in verdict order, if any.
    pub fn first(&self) -> Option<&Violation> {
        self.violations().first()
    }
}
