//! Shared pieces of the FOCUS conformance CLI.

pub mod logging;
