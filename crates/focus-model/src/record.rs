//! The populated FOCUS cost record.
//!
//! A `FocusRecord` is a flat collection of named fields describing one cloud
//! cost line item or contractual commitment. Absence is represented by each
//! type's zero value (empty string, `None` timestamp, `0.0`, `Unspecified`
//! sentinel); there is no separate "unset" bit. Records are plain data: the
//! validation engine never mutates them and holds no reference past a call.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{
    CapacityReservationStatus, ChargeCategory, ChargeClass, ChargeFrequency,
    CommitmentDiscountStatus, PricingCategory,
};

/// One FOCUS cost line item, fields named after the FOCUS v1.1 columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FocusRecord {
    // Identity
    pub provider_name: String,
    pub publisher_name: String,
    pub invoice_issuer_name: String,
    pub billing_account_id: String,
    pub billing_account_name: String,
    pub sub_account_id: String,
    pub sub_account_name: String,

    // Billing and charge periods
    pub billing_period_start: Option<DateTime<Utc>>,
    pub billing_period_end: Option<DateTime<Utc>>,
    pub charge_period_start: Option<DateTime<Utc>>,
    pub charge_period_end: Option<DateTime<Utc>>,

    // Charge classification
    pub charge_category: ChargeCategory,
    pub charge_class: ChargeClass,
    pub charge_frequency: ChargeFrequency,
    pub charge_description: String,

    // Financials
    pub billed_cost: f64,
    pub effective_cost: f64,
    pub list_cost: f64,
    pub contracted_cost: f64,
    pub list_unit_price: f64,
    pub contracted_unit_price: f64,
    pub billing_currency: String,

    // Pricing
    pub pricing_quantity: f64,
    pub pricing_unit: String,
    pub pricing_category: PricingCategory,

    // Usage
    pub consumed_quantity: f64,
    pub consumed_unit: String,

    // Commitment discounts
    pub commitment_discount_id: String,
    pub commitment_discount_name: String,
    pub commitment_discount_category: String,
    pub commitment_discount_type: String,
    pub commitment_discount_status: CommitmentDiscountStatus,

    // Capacity reservations
    pub capacity_reservation_id: String,
    pub capacity_reservation_status: CapacityReservationStatus,

    // Cost allocation
    pub allocation_method: String,
    pub allocated_resource_id: String,

    // Resource
    pub resource_id: String,
    pub resource_name: String,
    pub resource_type: String,
    pub region_id: String,
    pub region_name: String,
    pub availability_zone: String,

    // Service
    pub service_category: String,
    pub service_subcategory: String,
    pub service_name: String,

    // SKU
    pub sku_id: String,
    pub sku_price_id: String,
    pub sku_meter: String,

    // Provider-defined tags
    pub tags: BTreeMap<String, String>,
}

impl FocusRecord {
    /// Create an empty record with every field at its zero value.
    pub fn new() -> Self {
        Self::default()
    }
}
