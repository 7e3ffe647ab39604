//! Stable DTOs and IDs used across the privacheck workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted check list and report
//! - stable string IDs for every check
//! - schema identifiers

#![forbid(unsafe_code)]

pub mod ids;
pub mod receipt;

pub use receipt::{
    Category, Check, CheckCounts, Citation, FinancialRisk, Grade, Priority, PrivacheckData,
    PrivacheckReport, ReportEnvelope, SCHEMA_CONFIG_V1, SCHEMA_REPORT_V1, Status, ToolMeta,
    Verdict, Violation, Weighting,
};
