//! Explain registry for checks.
//!
//! Maps check IDs (or the short keyword-rule ids) to human-readable explanations with
//! remediation guidance.

use crate::{CitationSpec, HEURISTIC_CHECKS, KEYWORD_RULES, all_check_ids};
use privacheck_types::{Category, Priority, ids};

/// Explanation entry for a check.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub check_id: &'static str,
    pub title: &'static str,
    /// What the check looks for.
    pub description: String,
    pub priority: Priority,
    pub category: Category,
    pub citation: Option<CitationSpec>,
    /// How to fix a failing or warning result.
    pub remediation: String,
    pub examples: ExamplePair,
}

/// Before and after policy wording.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Wording that would not satisfy the check.
    pub before: &'static str,
    /// Wording that satisfies the check.
    pub after: &'static str,
}

/// Look up an explanation by check id (`policy-legal-basis`) or rule id (`legal-basis`).
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    if let Some(rule) = KEYWORD_RULES
        .iter()
        .find(|r| r.check_id == identifier || r.id == identifier)
    {
        let quoted: Vec<String> = rule.keywords.iter().map(|k| format!("\"{k}\"")).collect();
        return Some(Explanation {
            check_id: rule.check_id,
            title: rule.title,
            description: format!(
                "{}. Satisfied when the policy mentions any of: {}.",
                rule.description,
                quoted.join(", ")
            ),
            priority: rule.priority(),
            category: rule.category(),
            citation: rule.citation,
            remediation: format!(
                "Add clear information about {} to your privacy policy.",
                rule.description.to_lowercase()
            ),
            examples: examples_for(rule.check_id),
        });
    }

    let spec = HEURISTIC_CHECKS.iter().find(|h| h.check_id == identifier)?;
    Some(Explanation {
        check_id: spec.check_id,
        title: spec.title,
        description: heuristic_description(spec.check_id).to_string(),
        priority: spec.priority,
        category: spec.category,
        citation: Some(spec.citation),
        remediation: spec.fix.to_string(),
        examples: examples_for(spec.check_id),
    })
}

/// List all known check IDs.
pub fn known_check_ids() -> Vec<&'static str> {
    all_check_ids()
}

fn heuristic_description(check_id: &str) -> &'static str {
    match check_id {
        ids::CHECK_POLICY_LENGTH => {
            "\
Counts whitespace-delimited words. More than 500 words passes, more than 200 warns,
anything shorter fails. An empty policy counts as a single word."
        }
        ids::CHECK_COOKIE_POLICY => {
            "\
Looks for any mention of cookies. A missing mention is a warning rather than a failure."
        }
        ids::CHECK_POLICY_DATE => {
            "\
Looks for something date-like: a four-digit year, a D/M/YY or D/M/YYYY date, or the
name of a month."
        }
        ids::CHECK_CONTACT_INFO => {
            "\
Looks for a way to reach the controller: an email address, or the words email,
contact, phone or address."
        }
        ids::CHECK_CHILD_PRIVACY => {
            "\
Looks for provisions about children: child, minor, under 16 or under 13. A missing
mention is a warning rather than a failure."
        }
        _ => "",
    }
}

fn examples_for(check_id: &str) -> ExamplePair {
    let (before, after) = match check_id {
        ids::CHECK_DATA_CONTROLLER => (
            "We care about your privacy.",
            "Acme Ltd is the data controller for the personal data described here.",
        ),
        ids::CHECK_DPO_CONTACT => (
            "Questions? Reach out to support.",
            "Our Data Protection Officer can be reached at dpo@acme.example.",
        ),
        ids::CHECK_PROCESSING_PURPOSE => (
            "We collect some information.",
            "We process your email address for the purpose of sending order updates.",
        ),
        ids::CHECK_LEGAL_BASIS => (
            "We use your data to run our service.",
            "We rely on our legitimate interest to prevent fraud.",
        ),
        ids::CHECK_DATA_TYPES => (
            "We collect what we need.",
            "The personal data we collect includes your name, email and IP address.",
        ),
        ids::CHECK_DATA_RECIPIENTS => (
            "Your data stays with us.",
            "We share order data with our payment processor as a recipient.",
        ),
        ids::CHECK_DATA_TRANSFERS => (
            "Our servers are in the cloud.",
            "Where data is sent to a third country we rely on standard contractual clauses.",
        ),
        ids::CHECK_RETENTION_PERIOD => (
            "We keep records as needed.",
            "Our retention period for account data is 24 months after closure.",
        ),
        ids::CHECK_USER_RIGHTS => (
            "Write to us with any questions.",
            "Your rights include the right to access and the right to erasure.",
        ),
        ids::CHECK_RIGHT_TO_COMPLAIN => (
            "Tell us if you are unhappy.",
            "You may lodge a complaint with your supervisory authority.",
        ),
        ids::CHECK_AUTOMATED_DECISIONS => (
            "We personalise your experience.",
            "We use profiling to recommend products; no automated decision has legal effect.",
        ),
        ids::CHECK_DATA_SOURCE => (
            "We may receive data about you.",
            "Some data is collected from public registers and partner referrals.",
        ),
        ids::CHECK_POLICY_LENGTH => (
            "We respect your privacy.",
            "A policy covering every disclosure requirement, typically well over 500 words.",
        ),
        ids::CHECK_COOKIE_POLICY => (
            "We measure how the site is used.",
            "We use analytics cookies, which you can refuse in the cookie banner.",
        ),
        ids::CHECK_POLICY_DATE => ("Privacy Policy", "Privacy Policy. Last updated: 1 March 2024."),
        ids::CHECK_CONTACT_INFO => (
            "We handle privacy requests.",
            "Email privacy@acme.example with any privacy request.",
        ),
        ids::CHECK_CHILD_PRIVACY => (
            "Anyone can sign up.",
            "Our service is not directed to children under 13.",
        ),
        _ => ("", ""),
    };
    ExamplePair { before, after }
}
