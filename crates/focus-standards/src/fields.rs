//! Fixed FOCUS v1.1 field tables.
//!
//! The mandatory-field table is the schema, not configuration: it is a
//! constant, ordered list compiled into the binary. Additions or removals
//! are a schema-version change, never a runtime option. Declaration order is
//! the schema's column order, so the first violation reported under the
//! fail-fast policy is stable across runs.
//!
//! Cost and quantity columns are deliberately absent from the mandatory
//! table: a $0.00 free-tier charge is a legitimate value, and with the
//! zero-value-as-absence convention a mandatory cost field would flag it as
//! missing.

use focus_model::{
    CapacityReservationStatus, ChargeCategory, ChargeClass, ChargeFrequency,
    CommitmentDiscountStatus, FocusRecord,
};

/// One entry in the mandatory-field table.
#[derive(Clone, Copy)]
pub struct MandatoryField {
    /// FOCUS column name, as reported in violations.
    pub name: &'static str,
    /// True when the field holds a non-zero value on the given record.
    pub is_set: fn(&FocusRecord) -> bool,
}

impl std::fmt::Debug for MandatoryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MandatoryField")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The FOCUS v1.1 mandatory fields, in schema declaration order.
pub const MANDATORY_FIELDS: &[MandatoryField] = &[
    MandatoryField {
        name: "ProviderName",
        is_set: |r| !r.provider_name.is_empty(),
    },
    MandatoryField {
        name: "BillingAccountId",
        is_set: |r| !r.billing_account_id.is_empty(),
    },
    MandatoryField {
        name: "BillingCurrency",
        is_set: |r| !r.billing_currency.is_empty(),
    },
    MandatoryField {
        name: "BillingPeriodStart",
        is_set: |r| r.billing_period_start.is_some(),
    },
    MandatoryField {
        name: "BillingPeriodEnd",
        is_set: |r| r.billing_period_end.is_some(),
    },
    MandatoryField {
        name: "ChargePeriodStart",
        is_set: |r| r.charge_period_start.is_some(),
    },
    MandatoryField {
        name: "ChargePeriodEnd",
        is_set: |r| r.charge_period_end.is_some(),
    },
    MandatoryField {
        name: "ChargeCategory",
        is_set: |r| r.charge_category != ChargeCategory::Unspecified,
    },
    MandatoryField {
        name: "ChargeFrequency",
        is_set: |r| r.charge_frequency != ChargeFrequency::Unspecified,
    },
    MandatoryField {
        name: "ChargeDescription",
        is_set: |r| !r.charge_description.is_empty(),
    },
    MandatoryField {
        name: "InvoiceIssuerName",
        is_set: |r| !r.invoice_issuer_name.is_empty(),
    },
    MandatoryField {
        name: "PublisherName",
        is_set: |r| !r.publisher_name.is_empty(),
    },
    MandatoryField {
        name: "ServiceCategory",
        is_set: |r| !r.service_category.is_empty(),
    },
    MandatoryField {
        name: "ServiceName",
        is_set: |r| !r.service_name.is_empty(),
    },
];

/// One entry in the numeric-domain table.
#[derive(Clone, Copy)]
pub struct NumericField {
    /// FOCUS column name, as reported in violations.
    pub name: &'static str,
    /// Accessor for the field's value on a record.
    pub value: fn(&FocusRecord) -> f64,
}

impl std::fmt::Debug for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumericField")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Monetary and quantity columns subject to the numeric-domain check, in
/// schema declaration order.
pub const NUMERIC_FIELDS: &[NumericField] = &[
    NumericField {
        name: "BilledCost",
        value: |r| r.billed_cost,
    },
    NumericField {
        name: "EffectiveCost",
        value: |r| r.effective_cost,
    },
    NumericField {
        name: "ListCost",
        value: |r| r.list_cost,
    },
    NumericField {
        name: "ContractedCost",
        value: |r| r.contracted_cost,
    },
    NumericField {
        name: "ListUnitPrice",
        value: |r| r.list_unit_price,
    },
    NumericField {
        name: "ContractedUnitPrice",
        value: |r| r.contracted_unit_price,
    },
    NumericField {
        name: "PricingQuantity",
        value: |r| r.pricing_quantity,
    },
    NumericField {
        name: "ConsumedQuantity",
        value: |r| r.consumed_quantity,
    },
];

/// True when a commitment discount identifier is present.
pub fn has_commitment_discount_id(record: &FocusRecord) -> bool {
    !record.commitment_discount_id.is_empty()
}

/// True when a commitment discount status is present.
pub fn has_commitment_discount_status(record: &FocusRecord) -> bool {
    record.commitment_discount_status != CommitmentDiscountStatus::Unspecified
}

/// True when a capacity reservation identifier is present.
pub fn has_capacity_reservation_id(record: &FocusRecord) -> bool {
    !record.capacity_reservation_id.is_empty()
}

/// True when a capacity reservation status is present.
pub fn has_capacity_reservation_status(record: &FocusRecord) -> bool {
    record.capacity_reservation_status != CapacityReservationStatus::Unspecified
}

/// True when cost-hierarchy and derived-cost rules apply to the record.
pub fn hierarchy_rules_apply(record: &FocusRecord) -> bool {
    record.charge_class != ChargeClass::Correction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mandatory_table_has_fourteen_fields() {
        assert_eq!(MANDATORY_FIELDS.len(), 14);
    }

    #[test]
    fn mandatory_table_excludes_cost_fields() {
        for field in MANDATORY_FIELDS {
            assert!(
                !field.name.ends_with("Cost") && !field.name.ends_with("Quantity"),
                "{} must not be mandatory",
                field.name
            );
        }
    }

    #[test]
    fn empty_record_has_no_mandatory_field_set() {
        let record = FocusRecord::default();
        for field in MANDATORY_FIELDS {
            assert!(!(field.is_set)(&record), "{} set on empty record", field.name);
        }
    }

    #[test]
    fn numeric_accessors_read_their_columns() {
        let record = FocusRecord {
            billed_cost: 1.0,
            effective_cost: 2.0,
            list_cost: 3.0,
            contracted_cost: 4.0,
            list_unit_price: 5.0,
            contracted_unit_price: 6.0,
            pricing_quantity: 7.0,
            consumed_quantity: 8.0,
            ..FocusRecord::default()
        };
        let values: Vec<f64> = NUMERIC_FIELDS.iter().map(|f| (f.value)(&record)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }
}
