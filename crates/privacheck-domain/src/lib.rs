//! Pure policy evaluation (no IO).
//!
//! Input: the text of a privacy policy.
//! Output: checks + score + fine exposure + verdict.

#![forbid(unsafe_code)]

pub mod checks;
mod engine;
pub mod error;
mod fingerprint;
pub mod model;
pub mod policy;
pub mod report;
pub mod risk;
pub mod score;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{compute_verdict, evaluate, evaluate_text};
pub use error::{EngineError, parse_status, parse_weighting};
pub use risk::estimate_risk;
pub use score::{grade, score};
