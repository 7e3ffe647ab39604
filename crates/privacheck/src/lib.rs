//! Privacy-policy compliance evaluation.
//!
//! ```
//! use privacheck::{Weighting, estimate_risk, evaluate_text, score};
//!
//! let checks = evaluate_text("Contact us at privacy@example.com. Updated January 2024.");
//! let s = score(&checks, Weighting::Priority);
//! assert!(s < 50);
//! assert!(estimate_risk(&checks).has_exposure());
//! ```

#![forbid(unsafe_code)]

pub use privacheck_domain::policy::EffectiveConfig;
pub use privacheck_domain::report::DomainReport;
pub use privacheck_domain::{
    EngineError, compute_verdict, estimate_risk, evaluate, evaluate_text, grade, parse_status,
    parse_weighting, score,
};
pub use privacheck_types::{
    Category, Check, Citation, FinancialRisk, Grade, Priority, Status, Verdict, Violation,
    Weighting,
};
