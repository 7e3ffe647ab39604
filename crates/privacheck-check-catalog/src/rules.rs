use crate::CitationSpec;
use privacheck_types::{Category, Priority, ids};

/// A disclosure requirement detected by case-insensitive phrase presence.
#[derive(Clone, Copy, Debug)]
pub struct KeywordRule {
    /// Short rule id (`data-controller`).
    pub id: &'static str,
    /// Emitted check id (`policy-data-controller`).
    pub check_id: &'static str,
    /// Alternative phrases, stored lowercased. Any one occurring is a match.
    pub keywords: &'static [&'static str],
    pub title: &'static str,
    /// Requirement wording used to build descriptions and fixes.
    pub description: &'static str,
    pub high_priority: bool,
    pub citation: Option<CitationSpec>,
}

impl KeywordRule {
    pub fn priority(&self) -> Priority {
        if self.high_priority {
            Priority::High
        } else {
            Priority::Medium
        }
    }

    pub fn category(&self) -> Category {
        Category::Policy
    }

    /// True when any keyword occurs in `lowered`, which must already be lowercased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

const ART_13: &str = "https://gdpr-info.eu/art-13-gdpr/";
const ART_14: &str = "https://gdpr-info.eu/art-14-gdpr/";

pub static KEYWORD_RULES: [KeywordRule; 12] = [
    KeywordRule {
        id: "data-controller",
        check_id: ids::CHECK_DATA_CONTROLLER,
        keywords: &["data controller", "controller", "company name", "organization"],
        title: "Data Controller Identity",
        description: "Identity and contact details of data controller",
        high_priority: true,
        citation: Some(CitationSpec {
            article: "GDPR Art. 13(1)(a)",
            url: ART_13,
            explanation: "The identity and the contact details of the controller must be provided at the time personal data is obtained.",
        }),
    },
    KeywordRule {
        id: "dpo-contact",
        check_id: ids::CHECK_DPO_CONTACT,
        keywords: &["data protection officer", "dpo", "privacy officer"],
        title: "Data Protection Officer",
        description: "Contact details of DPO (if applicable)",
        high_priority: false,
        // Only required where a DPO has been designated.
        citation: None,
    },
    KeywordRule {
        id: "processing-purpose",
        check_id: ids::CHECK_PROCESSING_PURPOSE,
        keywords: &["purpose", "why we collect", "use of data", "processing"],
        title: "Processing Purpose",
        description: "Purposes of data processing",
        high_priority: true,
        citation: Some(CitationSpec {
            article: "GDPR Art. 13(1)(c)",
            url: ART_13,
            explanation: "The purposes of the processing for which the personal data are intended must be stated.",
        }),
    },
    KeywordRule {
        id: "legal-basis",
        check_id: ids::CHECK_LEGAL_BASIS,
        keywords: &["legal basis", "lawful basis", "legitimate interest", "consent"],
        title: "Legal Basis",
        description: "Legal basis for processing",
        high_priority: false,
        citation: Some(CitationSpec {
            article: "GDPR Art. 6(1)",
            url: "https://gdpr-info.eu/art-6-gdpr/",
            explanation: "Processing is lawful only if at least one of the six legal bases applies, and the basis relied on must be disclosed.",
        }),
    },
    KeywordRule {
        id: "data-types",
        check_id: ids::CHECK_DATA_TYPES,
        keywords: &[
            "personal data",
            "information collected",
            "data we collect",
            "categories of data",
        ],
        title: "Data Types Collected",
        description: "Types of personal data collected",
        high_priority: false,
        citation: Some(CitationSpec {
            article: "GDPR Art. 14(1)(d)",
            url: ART_14,
            explanation: "The categories of personal data concerned must be listed.",
        }),
    },
    KeywordRule {
        id: "data-recipients",
        check_id: ids::CHECK_DATA_RECIPIENTS,
        keywords: &["third part", "share", "disclose", "recipient"],
        title: "Data Recipients",
        description: "Recipients or categories of recipients",
        high_priority: false,
        citation: Some(CitationSpec {
            article: "GDPR Art. 13(1)(e)",
            url: ART_13,
            explanation: "The recipients or categories of recipients of the personal data must be named.",
        }),
    },
    KeywordRule {
        id: "data-transfers",
        check_id: ids::CHECK_DATA_TRANSFERS,
        keywords: &[
            "international transfer",
            "third country",
            "outside eu",
            "cross-border",
        ],
        title: "International Transfers",
        description: "Information about international data transfers",
        high_priority: false,
        citation: Some(CitationSpec {
            article: "GDPR Art. 44",
            url: "https://gdpr-info.eu/art-44-gdpr/",
            explanation: "Transfers to a third country are only allowed under the conditions of Chapter V and must be disclosed along with the safeguards used.",
        }),
    },
    KeywordRule {
        id: "retention-period",
        check_id: ids::CHECK_RETENTION_PERIOD,
        keywords: &["retention", "how long", "storage period", "keep your data"],
        title: "Retention Period",
        description: "Data retention periods",
        high_priority: false,
        citation: Some(CitationSpec {
            article: "GDPR Art. 13(2)(a)",
            url: ART_13,
            explanation: "The period for which personal data will be stored, or the criteria used to determine it, must be provided.",
        }),
    },
    KeywordRule {
        id: "user-rights",
        check_id: ids::CHECK_USER_RIGHTS,
        keywords: &[
            "your rights",
            "right to access",
            "right to erasure",
            "right to object",
            "data subject rights",
        ],
        title: "User Rights",
        description: "Information about data subject rights",
        high_priority: true,
        citation: Some(CitationSpec {
            article: "GDPR Art. 13(2)(b)",
            url: ART_13,
            explanation: "Data subjects must be told of their rights of access, rectification, erasure, restriction, objection and portability.",
        }),
    },
    KeywordRule {
        id: "right-to-complain",
        check_id: ids::CHECK_RIGHT_TO_COMPLAIN,
        keywords: &[
            "supervisory authority",
            "complaint",
            "regulator",
            "data protection authority",
        ],
        title: "Right to Complain",
        description: "Right to lodge complaint with supervisory authority",
        high_priority: false,
        citation: Some(CitationSpec {
            article: "GDPR Art. 13(2)(d)",
            url: ART_13,
            explanation: "Data subjects must be informed of the right to lodge a complaint with a supervisory authority.",
        }),
    },
    KeywordRule {
        id: "automated-decisions",
        check_id: ids::CHECK_AUTOMATED_DECISIONS,
        keywords: &["automated decision", "profiling", "algorithmic"],
        title: "Automated Decision-Making",
        description: "Information about automated decision-making and profiling",
        high_priority: false,
        citation: Some(CitationSpec {
            article: "GDPR Art. 13(2)(f)",
            url: ART_13,
            explanation: "The existence of automated decision-making, including profiling, and the logic involved must be disclosed.",
        }),
    },
    KeywordRule {
        id: "data-source",
        check_id: ids::CHECK_DATA_SOURCE,
        keywords: &["source", "where we obtained", "collected from"],
        title: "Data Source",
        description: "Source of personal data (if not collected from user)",
        high_priority: false,
        citation: Some(CitationSpec {
            article: "GDPR Art. 14(2)(f)",
            url: ART_14,
            explanation: "Where data was not obtained from the data subject, the source it originates from must be stated.",
        }),
    },
];
