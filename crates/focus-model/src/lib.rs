pub mod enums;
pub mod record;
pub mod violation;

pub use enums::{
    CapacityReservationStatus, ChargeCategory, ChargeClass, ChargeFrequency,
    CommitmentDiscountStatus, PricingCategory,
};
pub use record::FocusRecord;
pub use violation::{Severity, ValidationPolicy, Verdict, Violation, ViolationKind};
