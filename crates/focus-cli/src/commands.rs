//! Subcommand implementations.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use focus_model::{FocusRecord, ValidationPolicy, Verdict};
use focus_standards::{MANDATORY_FIELDS, SCHEMA_VERSION};
use focus_validate::{validate, verify_engine, write_validation_report_json};

use crate::cli::{PolicyArg, ValidateArgs};

/// Outcome of one `validate` run, consumed by the summary printer.
pub struct ValidateResult {
    pub input: PathBuf,
    pub policy: ValidationPolicy,
    pub verdicts: Vec<Verdict>,
    pub report_path: Option<PathBuf>,
}

impl ValidateResult {
    pub fn invalid_count(&self) -> usize {
        self.verdicts.iter().filter(|v| !v.is_valid()).count()
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid_count() > 0
    }
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    // Malformed compiled tables are a deployment defect, not a verdict.
    verify_engine().context("schema tables failed startup verification")?;

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read records file {}", args.input.display()))?;
    let records = parse_records(&raw)
        .with_context(|| format!("failed to parse records file {}", args.input.display()))?;
    let policy = match args.policy {
        PolicyArg::FailFast => ValidationPolicy::FailFast,
        PolicyArg::Aggregate => ValidationPolicy::Aggregate,
    };
    info!(count = records.len(), ?policy, "validating records");

    let verdicts: Vec<Verdict> = records
        .iter()
        .map(|record| validate(record, policy))
        .collect();
    for (index, verdict) in verdicts.iter().enumerate() {
        match verdict.first() {
            Some(first) => warn!(index, violation = %first, "record is not conformant"),
            None => debug!(index, "record is conformant"),
        }
    }

    let report_path = match &args.report_dir {
        Some(dir) => {
            let path = write_validation_report_json(dir, policy, &verdicts)
                .with_context(|| format!("failed to write report under {}", dir.display()))?;
            info!(path = %path.display(), "wrote validation report");
            Some(path)
        }
        None => None,
    };

    Ok(ValidateResult {
        input: args.input.clone(),
        policy,
        verdicts,
        report_path,
    })
}

pub fn run_fields() {
    print!("{}", fields_listing());
}

/// Render the mandatory-field table in schema declaration order.
pub fn fields_listing() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "FOCUS v{SCHEMA_VERSION} mandatory fields:");
    for (index, field) in MANDATORY_FIELDS.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, field.name);
    }
    out
}

/// Accept either a single record object or an array of records.
fn parse_records(raw: &str) -> Result<Vec<FocusRecord>> {
    if let Ok(records) = serde_json::from_str::<Vec<FocusRecord>>(raw) {
        return Ok(records);
    }
    let record: FocusRecord = serde_json::from_str(raw)?;
    Ok(vec![record])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_listing_is_stable() {
        insta::assert_snapshot!(fields_listing(), @r"
        FOCUS v1.1 mandatory fields:
          1. ProviderName
          2. BillingAccountId
          3. BillingCurrency
          4. BillingPeriodStart
          5. BillingPeriodEnd
          6. ChargePeriodStart
          7. ChargePeriodEnd
          8. ChargeCategory
          9. ChargeFrequency
         10. ChargeDescription
         11. InvoiceIssuerName
         12. PublisherName
         13. ServiceCategory
         14. ServiceName
        ");
    }

    #[test]
    fn parse_accepts_object_or_array() {
        let single = parse_records(r#"{"BillingCurrency":"USD"}"#).expect("single object");
        assert_eq!(single.len(), 1);
        let many =
            parse_records(r#"[{"BillingCurrency":"USD"},{"BillingCurrency":"EUR"}]"#)
                .expect("array");
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].billing_currency, "EUR");
    }
}
