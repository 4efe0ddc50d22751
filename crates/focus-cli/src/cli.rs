//! CLI argument definitions for the FOCUS conformance tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "focus-conformance",
    version,
    about = "FOCUS Conformance - Validate cloud billing records against the FOCUS schema",
    long_about = "Validate cloud cost and usage records against the FinOps FOCUS schema.\n\n\
                  Checks mandatory-field presence, numeric domains, and the\n\
                  cross-field invariants (cost hierarchy, field dependency pairs,\n\
                  derived-cost consistency, currency codes)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a JSON file of FOCUS records.
    Validate(ValidateArgs),

    /// List the mandatory fields of the active schema version.
    Fields,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to a JSON file holding one record object or an array of records.
    #[arg(value_name = "RECORDS_FILE")]
    pub input: PathBuf,

    /// Validation policy: stop at the first violation or collect all.
    #[arg(long = "policy", value_enum, default_value = "fail-fast")]
    pub policy: PolicyArg,

    /// Write a JSON validation report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Surface only the first violation per record (cheapest).
    FailFast,
    /// Run every check and report all violations per record.
    Aggregate,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
