//! Use case orchestration for privacheck.
//!
//! This crate is the application layer: use cases that coordinate the settings, domain and
//! render layers. The CLI crate depends on this and only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, InputError, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, write_report, write_text};
pub use report::{parse_report_json, rescore, runtime_error_report, serialize_report, to_renderable};
