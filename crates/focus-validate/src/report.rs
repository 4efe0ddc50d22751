//! JSON validation-report writer for batch sweeps.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use focus_model::{Severity, ValidationPolicy, Verdict, Violation, ViolationKind};

const REPORT_SCHEMA: &str = "focus-conformance.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub policy: ValidationPolicy,
    pub record_count: usize,
    pub invalid_count: usize,
    pub records: Vec<RecordReportSummary>,
}

#[derive(Debug, Serialize)]
pub struct RecordReportSummary {
    /// Zero-based position of the record in the input sequence.
    pub index: usize,
    pub valid: bool,
    pub error_count: usize,
    pub violations: Vec<ViolationJson>,
}

#[derive(Debug, Serialize)]
pub struct ViolationJson {
    /// Stable machine-readable identity; match on this, not on `message`.
    pub kind: ViolationKind,
    pub severity: Severity,
    /// Canonical PascalCase FOCUS column name, when the violation is
    /// attributable to a single column.
    pub field: Option<String>,
    /// Human-readable text. Column references use the PascalCase names
    /// (`BillingCurrency`); the wording is not a stable contract.
    pub message: String,
}

/// Assemble the report payload from per-record verdicts in input order.
pub fn build_report(policy: ValidationPolicy, verdicts: &[Verdict]) -> ValidationReportPayload {
    ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        policy,
        record_count: verdicts.len(),
        invalid_count: verdicts.iter().filter(|v| !v.is_valid()).count(),
        records: verdicts
            .iter()
            .enumerate()
            .map(|(index, verdict)| RecordReportSummary {
                index,
                valid: verdict.is_valid(),
                error_count: verdict.error_count(),
                violations: verdict.violations().iter().map(violation_json).collect(),
            })
            .collect(),
    }
}

fn violation_json(violation: &Violation) -> ViolationJson {
    ViolationJson {
        kind: violation.kind,
        severity: violation.severity,
        field: violation.field.clone(),
        message: violation.message.clone(),
    }
}

/// Write the report as pretty-printed JSON under `output_dir`.
///
/// # Errors
///
/// Fails when the directory cannot be created or the file cannot be written.
pub fn write_validation_report_json(
    output_dir: &Path,
    policy: ValidationPolicy,
    verdicts: &[Verdict],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    let payload = build_report(policy, verdicts);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
