//! Parameters for the checks that are not plain keyword rules.

use crate::CitationSpec;
use privacheck_types::{Category, Priority, ids};

/// Metadata shared by every heuristic check.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicSpec {
    pub check_id: &'static str,
    pub title: &'static str,
    pub priority: Priority,
    pub category: Category,
    pub citation: CitationSpec,
    pub fix: &'static str,
}

/// Word-count bands for the length check. Both bounds are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthThresholds {
    pub pass_above: usize,
    pub warn_above: usize,
}

pub const LENGTH_THRESHOLDS: LengthThresholds = LengthThresholds {
    pass_above: 500,
    warn_above: 200,
};

pub const COOKIE_TERMS: &[&str] = &["cookie", "cookies"];
pub const CONTACT_TERMS: &[&str] = &["email", "contact", "phone", "address", "@"];
pub const CHILD_TERMS: &[&str] = &["child", "minor", "under 16", "under 13"];

pub const MONTH_NAMES: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub const POLICY_LENGTH: HeuristicSpec = HeuristicSpec {
    check_id: ids::CHECK_POLICY_LENGTH,
    title: "Policy Completeness",
    priority: Priority::Medium,
    category: Category::Policy,
    citation: CitationSpec {
        article: "GDPR Art. 12(1)",
        url: "https://gdpr-info.eu/art-12-gdpr/",
        explanation: "Information must be provided in a concise, transparent, intelligible and easily accessible form, which a very short notice rarely achieves.",
    },
    fix: "Privacy policy seems short. Ensure all GDPR requirements are thoroughly addressed.",
};

pub const COOKIE_POLICY: HeuristicSpec = HeuristicSpec {
    check_id: ids::CHECK_COOKIE_POLICY,
    title: "Cookie Policy",
    priority: Priority::High,
    category: Category::Cookies,
    citation: CitationSpec {
        article: "ePrivacy Directive Art. 5(3)",
        url: "https://eur-lex.europa.eu/eli/dir/2002/58/oj",
        explanation: "Storing or reading information on a user's device requires clear and comprehensive information about the purposes, and consent.",
    },
    fix: "Include detailed information about cookie usage, types of cookies, and user choices.",
};

pub const POLICY_DATE: HeuristicSpec = HeuristicSpec {
    check_id: ids::CHECK_POLICY_DATE,
    title: "Last Updated Date",
    priority: Priority::Medium,
    category: Category::Policy,
    citation: CitationSpec {
        article: "GDPR Art. 5(2)",
        url: "https://gdpr-info.eu/art-5-gdpr/",
        explanation: "The controller must be able to demonstrate compliance, which includes showing when the notice was last revised.",
    },
    fix: "Include \"Last Updated\" date in your privacy policy and keep it current.",
};

pub const CONTACT_INFO: HeuristicSpec = HeuristicSpec {
    check_id: ids::CHECK_CONTACT_INFO,
    title: "Contact Information",
    priority: Priority::High,
    category: Category::Other,
    citation: CitationSpec {
        article: "GDPR Art. 12(2)",
        url: "https://gdpr-info.eu/art-12-gdpr/",
        explanation: "The controller must facilitate the exercise of data subject rights, which requires a reachable contact point.",
    },
    fix: "Provide clear contact information for privacy-related inquiries.",
};

pub const CHILD_PRIVACY: HeuristicSpec = HeuristicSpec {
    check_id: ids::CHECK_CHILD_PRIVACY,
    title: "Child Privacy Protection",
    priority: Priority::Medium,
    category: Category::Other,
    citation: CitationSpec {
        article: "GDPR Art. 8",
        url: "https://gdpr-info.eu/art-8-gdpr/",
        explanation: "Consent-based processing of a child's data requires parental authorisation below 16, or a lower national age not below 13.",
    },
    fix: "If your service may be used by children, include specific provisions for child privacy protection.",
};

/// Heuristic checks in output order.
pub static HEURISTIC_CHECKS: [HeuristicSpec; 5] = [
    POLICY_LENGTH,
    COOKIE_POLICY,
    POLICY_DATE,
    CONTACT_INFO,
    CHILD_PRIVACY,
];
