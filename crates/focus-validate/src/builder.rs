//! Fluent record construction.
//!
//! `RecordBuilder` is a single-writer accumulator with one setter per
//! logical field cluster. Setters never validate; fields may be set in any
//! order without transient-invalid-state errors. [`RecordBuilder::finalize`]
//! runs the same rule set as post-hoc validation, in fail-fast mode, so
//! construction-time and after-the-fact verdicts never diverge. Batch
//! tooling that wants every defect should validate the finalized record
//! separately under the aggregate policy.

use chrono::{DateTime, Utc};

use focus_model::{
    CapacityReservationStatus, ChargeCategory, ChargeClass, ChargeFrequency,
    CommitmentDiscountStatus, FocusRecord, PricingCategory, ValidationPolicy, Verdict, Violation,
};

use crate::runner::validate;

/// Fluent accumulator for a [`FocusRecord`].
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: FocusRecord,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider, publisher, and invoice issuer names.
    pub fn provider(
        mut self,
        provider_name: impl Into<String>,
        publisher_name: impl Into<String>,
        invoice_issuer_name: impl Into<String>,
    ) -> Self {
        self.record.provider_name = provider_name.into();
        self.record.publisher_name = publisher_name.into();
        self.record.invoice_issuer_name = invoice_issuer_name.into();
        self
    }

    /// Billing account identity.
    pub fn billing_account(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.record.billing_account_id = id.into();
        self.record.billing_account_name = name.into();
        self
    }

    /// Sub-account identity.
    pub fn sub_account(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.record.sub_account_id = id.into();
        self.record.sub_account_name = name.into();
        self
    }

    /// Invoice billing period bounds.
    pub fn billing_period(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.record.billing_period_start = Some(start);
        self.record.billing_period_end = Some(end);
        self
    }

    /// Charge effective period bounds.
    pub fn charge_period(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.record.charge_period_start = Some(start);
        self.record.charge_period_end = Some(end);
        self
    }

    /// Charge classification cluster.
    pub fn charge(
        mut self,
        category: ChargeCategory,
        class: ChargeClass,
        frequency: ChargeFrequency,
        description: impl Into<String>,
    ) -> Self {
        self.record.charge_category = category;
        self.record.charge_class = class;
        self.record.charge_frequency = frequency;
        self.record.charge_description = description.into();
        self
    }

    /// The four cost columns.
    pub fn costs(mut self, billed: f64, effective: f64, list: f64, contracted: f64) -> Self {
        self.record.billed_cost = billed;
        self.record.effective_cost = effective;
        self.record.list_cost = list;
        self.record.contracted_cost = contracted;
        self
    }

    /// Unit prices.
    pub fn unit_prices(mut self, list: f64, contracted: f64) -> Self {
        self.record.list_unit_price = list;
        self.record.contracted_unit_price = contracted;
        self
    }

    /// Billing currency code.
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.record.billing_currency = code.into();
        self
    }

    /// Pricing quantity, unit, and category.
    pub fn pricing(
        mut self,
        quantity: f64,
        unit: impl Into<String>,
        category: PricingCategory,
    ) -> Self {
        self.record.pricing_quantity = quantity;
        self.record.pricing_unit = unit.into();
        self.record.pricing_category = category;
        self
    }

    /// Consumed quantity and unit.
    pub fn usage(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.record.consumed_quantity = quantity;
        self.record.consumed_unit = unit.into();
        self
    }

    /// Commitment discount cluster.
    pub fn commitment_discount(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        discount_type: impl Into<String>,
        status: CommitmentDiscountStatus,
    ) -> Self {
        self.record.commitment_discount_id = id.into();
        self.record.commitment_discount_name = name.into();
        self.record.commitment_discount_category = category.into();
        self.record.commitment_discount_type = discount_type.into();
        self.record.commitment_discount_status = status;
        self
    }

    /// Capacity reservation cluster.
    pub fn capacity_reservation(
        mut self,
        id: impl Into<String>,
        status: CapacityReservationStatus,
    ) -> Self {
        self.record.capacity_reservation_id = id.into();
        self.record.capacity_reservation_status = status;
        self
    }

    /// Cost-allocation cluster.
    pub fn allocation(
        mut self,
        method: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        self.record.allocation_method = method.into();
        self.record.allocated_resource_id = resource_id.into();
        self
    }

    /// Resource identity.
    pub fn resource(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        resource_type: impl Into<String>,
    ) -> Self {
        self.record.resource_id = id.into();
        self.record.resource_name = name.into();
        self.record.resource_type = resource_type.into();
        self
    }

    /// Region and zone placement.
    pub fn location(
        mut self,
        region_id: impl Into<String>,
        region_name: impl Into<String>,
        availability_zone: impl Into<String>,
    ) -> Self {
        self.record.region_id = region_id.into();
        self.record.region_name = region_name.into();
        self.record.availability_zone = availability_zone.into();
        self
    }

    /// Service classification.
    pub fn service(
        mut self,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.record.service_category = category.into();
        self.record.service_subcategory = subcategory.into();
        self.record.service_name = name.into();
        self
    }

    /// SKU identity.
    pub fn sku(
        mut self,
        id: impl Into<String>,
        price_id: impl Into<String>,
        meter: impl Into<String>,
    ) -> Self {
        self.record.sku_id = id.into();
        self.record.sku_price_id = price_id.into();
        self.record.sku_meter = meter.into();
        self
    }

    /// Add one provider-defined tag.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.record.tags.insert(key.into(), value.into());
        self
    }

    /// Validate in fail-fast mode and hand over the completed record.
    ///
    /// # Errors
    ///
    /// Returns the first violation in stage/rule order when the accumulated
    /// record is not conformant.
    pub fn finalize(self) -> Result<FocusRecord, Violation> {
        let verdict = validate(&self.record, ValidationPolicy::FailFast);
        match verdict {
            Verdict::Valid => Ok(self.record),
            Verdict::Invalid(violations) => match violations.into_iter().next() {
                Some(violation) => Err(violation),
                // Invalid verdicts are never empty; keep the record usable
                // if that invariant ever breaks.
                None => Ok(self.record),
            },
        }
    }
}
