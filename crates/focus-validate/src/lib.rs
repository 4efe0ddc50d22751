//! FOCUS record validation engine.
//!
//! Decides whether a populated [`FocusRecord`](focus_model::FocusRecord) is
//! internally consistent before it is emitted downstream. One call validates
//! one record to completion on the calling thread: no I/O, no shared mutable
//! state, no cross-record memory. The rule tables are compiled-in constants,
//! so concurrent callers need no locking.

mod builder;
mod numeric;
mod presence;
mod report;
mod rules;
mod runner;

pub use builder::RecordBuilder;
pub use numeric::within_tolerance;
pub use report::{
    RecordReportSummary, ValidationReportPayload, ViolationJson, build_report,
    write_validation_report_json,
};
pub use rules::{RULES, Rule};
pub use runner::{validate, verify_engine};
