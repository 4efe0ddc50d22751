//! Type-safe enumerations for FOCUS categorical columns.
//!
//! These enums provide compile-time type safety for FOCUS concepts that are
//! represented as controlled string values on the wire. Every enum carries an
//! `Unspecified` sentinel as its default: the schema has no separate "unset"
//! bit, so the sentinel *is* the zero value the presence checker tests for.
//!
//! # FOCUS Reference
//!
//! - Charge category / class: FOCUS v1.1 columns ChargeCategory, ChargeClass
//! - Charge frequency: FOCUS v1.1 column ChargeFrequency
//! - Commitment discount status: FOCUS v1.1 column CommitmentDiscountStatus

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nature of a charge per the FOCUS ChargeCategory column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeCategory {
    /// Zero-value sentinel; a mandatory field left at this value is missing.
    #[default]
    Unspecified,
    /// Consumption-based charge for services actually used.
    Usage,
    /// Up-front purchase, including commitment purchases not yet consumed.
    Purchase,
    /// Tax line item applied by the provider.
    Tax,
    /// Credit applied against earlier charges.
    Credit,
    /// Refund of a previously billed amount.
    Refund,
    /// Catch-all adjustment that fits none of the above.
    Adjustment,
}

impl ChargeCategory {
    /// Canonical column value as it appears in FOCUS datasets.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeCategory::Unspecified => "UNSPECIFIED",
            ChargeCategory::Usage => "USAGE",
            ChargeCategory::Purchase => "PURCHASE",
            ChargeCategory::Tax => "TAX",
            ChargeCategory::Credit => "CREDIT",
            ChargeCategory::Refund => "REFUND",
            ChargeCategory::Adjustment => "ADJUSTMENT",
        }
    }
}

impl fmt::Display for ChargeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChargeCategory {
    type Err = String;

    /// Parse a category value case-insensitively, as found in exported data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USAGE" => Ok(ChargeCategory::Usage),
            "PURCHASE" => Ok(ChargeCategory::Purchase),
            "TAX" => Ok(ChargeCategory::Tax),
            "CREDIT" => Ok(ChargeCategory::Credit),
            "REFUND" => Ok(ChargeCategory::Refund),
            "ADJUSTMENT" => Ok(ChargeCategory::Adjustment),
            other => Err(format!("unknown charge category: {other}")),
        }
    }
}

/// Regular charge vs. retroactive correction, per the FOCUS ChargeClass column.
///
/// Corrections are exempt from the cost-hierarchy rules: a retroactive
/// adjustment may legitimately invert the normal list/effective/billed
/// ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeClass {
    #[default]
    Unspecified,
    Regular,
    Correction,
}

impl ChargeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeClass::Unspecified => "UNSPECIFIED",
            ChargeClass::Regular => "REGULAR",
            ChargeClass::Correction => "CORRECTION",
        }
    }

    /// True when cost-hierarchy and derived-cost rules must be skipped.
    pub fn is_correction(&self) -> bool {
        matches!(self, ChargeClass::Correction)
    }
}

impl fmt::Display for ChargeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Billing cadence of a charge per the FOCUS ChargeFrequency column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeFrequency {
    #[default]
    Unspecified,
    OneTime,
    Recurring,
    UsageBased,
}

impl ChargeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeFrequency::Unspecified => "UNSPECIFIED",
            ChargeFrequency::OneTime => "ONE_TIME",
            ChargeFrequency::Recurring => "RECURRING",
            ChargeFrequency::UsageBased => "USAGE_BASED",
        }
    }
}

impl fmt::Display for ChargeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pricing model under which a charge was priced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingCategory {
    #[default]
    Unspecified,
    Standard,
    Dynamic,
    Committed,
    Other,
}

impl PricingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingCategory::Unspecified => "UNSPECIFIED",
            PricingCategory::Standard => "STANDARD",
            PricingCategory::Dynamic => "DYNAMIC",
            PricingCategory::Committed => "COMMITTED",
            PricingCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for PricingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a commitment discount was consumed or sat idle for the charge
/// period. Only meaningful once the commitment is being drawn down, which is
/// why a PURCHASE charge may carry a discount id without a status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommitmentDiscountStatus {
    #[default]
    Unspecified,
    Used,
    Unused,
}

impl CommitmentDiscountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitmentDiscountStatus::Unspecified => "UNSPECIFIED",
            CommitmentDiscountStatus::Used => "USED",
            CommitmentDiscountStatus::Unused => "UNUSED",
        }
    }
}

impl fmt::Display for CommitmentDiscountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Consumption state of a capacity reservation for the charge period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityReservationStatus {
    #[default]
    Unspecified,
    Used,
    Unused,
}

impl CapacityReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityReservationStatus::Unspecified => "UNSPECIFIED",
            CapacityReservationStatus::Used => "USED",
            CapacityReservationStatus::Unused => "UNUSED",
        }
    }
}

impl fmt::Display for CapacityReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
