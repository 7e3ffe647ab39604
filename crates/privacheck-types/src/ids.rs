//! Stable identifiers for checks.
//!
//! Keyword rules are namespaced as `policy-<rule>`; heuristic checks keep their
//! historical names. Report consumers key on these strings, so never rename them.

// Keyword rules
pub const CHECK_DATA_CONTROLLER: &str = "policy-data-controller";
pub const CHECK_DPO_CONTACT: &str = "policy-dpo-contact";
pub const CHECK_PROCESSING_PURPOSE: &str = "policy-processing-purpose";
pub const CHECK_LEGAL_BASIS: &str = "policy-legal-basis";
pub const CHECK_DATA_TYPES: &str = "policy-data-types";
pub const CHECK_DATA_RECIPIENTS: &str = "policy-data-recipients";
pub const CHECK_DATA_TRANSFERS: &str = "policy-data-transfers";
pub const CHECK_RETENTION_PERIOD: &str = "policy-retention-period";
pub const CHECK_USER_RIGHTS: &str = "policy-user-rights";
pub const CHECK_RIGHT_TO_COMPLAIN: &str = "policy-right-to-complain";
pub const CHECK_AUTOMATED_DECISIONS: &str = "policy-automated-decisions";
pub const CHECK_DATA_SOURCE: &str = "policy-data-source";

// Heuristic checks
pub const CHECK_POLICY_LENGTH: &str = "policy-length";
pub const CHECK_COOKIE_POLICY: &str = "cookie-policy";
pub const CHECK_POLICY_DATE: &str = "policy-date";
pub const CHECK_CONTACT_INFO: &str = "contact-info";
pub const CHECK_CHILD_PRIVACY: &str = "child-privacy";

/// Prefix shared by every keyword rule check id.
pub const KEYWORD_CHECK_PREFIX: &str = "policy-";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool-runtime";
