#![deny(unsafe_code)]

//! Fixed, versioned FOCUS schema tables.
//!
//! Everything in this crate is compiled-in, read-only data: the mandatory
//! and numeric field tables for the active schema version and the ISO 4217
//! currency table. [`verify_tables`] is the startup-time invariant check:
//! a malformed table is a deployment defect and must abort the process, not
//! surface as a per-record validation outcome.

pub mod currency;
pub mod error;
pub mod fields;

use std::collections::BTreeSet;

pub use currency::{CURRENCY_CODES, is_valid_currency};
pub use error::StandardsError;
pub use fields::{
    MANDATORY_FIELDS, MandatoryField, NUMERIC_FIELDS, NumericField, has_capacity_reservation_id,
    has_capacity_reservation_status, has_commitment_discount_id, has_commitment_discount_status,
    hierarchy_rules_apply,
};

/// FOCUS schema version the compiled tables implement.
pub const SCHEMA_VERSION: &str = "1.1";

/// Relative tolerance for derived-cost comparisons (0.01%).
pub const COST_TOLERANCE: f64 = 1e-4;

/// Verify the compiled tables at process startup.
///
/// # Errors
///
/// Returns a [`StandardsError`] when a table carries a duplicate or empty
/// field name, or the currency table is unsorted or malformed. Callers
/// should treat any error as fatal.
pub fn verify_tables() -> Result<(), StandardsError> {
    verify_field_names("mandatory", MANDATORY_FIELDS.iter().map(|f| f.name))?;
    verify_field_names("numeric", NUMERIC_FIELDS.iter().map(|f| f.name))?;
    verify_currency_table()
}

fn verify_field_names(
    table: &'static str,
    names: impl Iterator<Item = &'static str>,
) -> Result<(), StandardsError> {
    let mut seen = BTreeSet::new();
    for (index, name) in names.enumerate() {
        if name.is_empty() {
            return Err(StandardsError::EmptyFieldName { table, index });
        }
        if !seen.insert(name) {
            return Err(StandardsError::DuplicateField {
                table,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn verify_currency_table() -> Result<(), StandardsError> {
    for (index, code) in CURRENCY_CODES.iter().enumerate() {
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(StandardsError::MalformedCurrencyCode {
                code: (*code).to_string(),
            });
        }
        if index > 0 && CURRENCY_CODES[index - 1] >= code {
            return Err(StandardsError::UnsortedCurrencyTable {
                index,
                code: (*code).to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_tables_verify() {
        verify_tables().expect("compiled tables must be well formed");
    }

    #[test]
    fn mandatory_field_order_is_schema_declaration_order() {
        let names: Vec<&str> = MANDATORY_FIELDS.iter().map(|f| f.name).collect();
        insta::assert_snapshot!(names.join("\n"), @r"
        ProviderName
        BillingAccountId
        BillingCurrency
        BillingPeriodStart
        BillingPeriodEnd
        ChargePeriodStart
        ChargePeriodEnd
        ChargeCategory
        ChargeFrequency
        ChargeDescription
        InvoiceIssuerName
        PublisherName
        ServiceCategory
        ServiceName
        ");
    }
}
