//! Central check catalog for privacheck.
//!
//! Everything in here is `'static` data: the keyword rules, the parameters of the
//! heuristic checks, the risk weight table and the fine-exposure table. The engine
//! reads these tables and never writes them, so every evaluation sees the same
//! catalog.

#![forbid(unsafe_code)]

pub mod explain;
mod heuristics;
mod rules;
mod tables;

use privacheck_types::Citation;

pub use heuristics::{
    CHILD_PRIVACY, CHILD_TERMS, CONTACT_INFO, CONTACT_TERMS, COOKIE_POLICY, COOKIE_TERMS,
    HEURISTIC_CHECKS, HeuristicSpec, LENGTH_THRESHOLDS, LengthThresholds, MONTH_NAMES,
    POLICY_DATE, POLICY_LENGTH,
};
pub use rules::{KEYWORD_RULES, KeywordRule};
pub use tables::{
    DEFAULT_RISK_WEIGHT, FALLBACK_CITATION_LABEL, FINE_TABLE, FineExposure, RISK_WEIGHTS,
    fine_for, risk_weight,
};

/// Static form of a [`Citation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CitationSpec {
    pub article: &'static str,
    pub url: &'static str,
    pub explanation: &'static str,
}

impl CitationSpec {
    pub fn to_citation(&self) -> Citation {
        Citation {
            article: self.article.to_string(),
            url: self.url.to_string(),
            explanation: self.explanation.to_string(),
        }
    }
}

/// Every check id the evaluator emits, in output order.
pub fn all_check_ids() -> Vec<&'static str> {
    KEYWORD_RULES
        .iter()
        .map(|r| r.check_id)
        .chain(HEURISTIC_CHECKS.iter().map(|h| h.check_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use privacheck_types::ids;
    use std::collections::BTreeSet;

    #[test]
    fn check_ids_are_unique() {
        let ids = all_check_ids();
        let unique: BTreeSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 17);
    }

    #[test]
    fn heuristic_checks_follow_keyword_rules_in_fixed_order() {
        let ids = all_check_ids();
        assert_eq!(ids[0], ids::CHECK_DATA_CONTROLLER);
        assert_eq!(
            &ids[12..],
            &[
                ids::CHECK_POLICY_LENGTH,
                ids::CHECK_COOKIE_POLICY,
                ids::CHECK_POLICY_DATE,
                ids::CHECK_CONTACT_INFO,
                ids::CHECK_CHILD_PRIVACY,
            ]
        );
    }

    #[test]
    fn keyword_rules_carry_three_to_six_phrases() {
        for rule in KEYWORD_RULES.iter() {
            assert!(
                (3..=6).contains(&rule.keywords.len()),
                "{} has {} keywords",
                rule.id,
                rule.keywords.len()
            );
            for kw in rule.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "keywords are stored lowercased");
            }
        }
    }

    #[test]
    fn exactly_three_rules_are_high_priority() {
        let high: Vec<_> = KEYWORD_RULES
            .iter()
            .filter(|r| r.high_priority)
            .map(|r| r.id)
            .collect();
        assert_eq!(high, vec!["data-controller", "processing-purpose", "user-rights"]);
    }

    #[test]
    fn keyword_check_ids_use_policy_prefix() {
        for rule in KEYWORD_RULES.iter() {
            assert_eq!(
                rule.check_id,
                format!("{}{}", ids::KEYWORD_CHECK_PREFIX, rule.id)
            );
        }
    }

    #[test]
    fn citation_spec_converts_verbatim() {
        let spec = CitationSpec {
            article: "Art. 1",
            url: "https://example.com",
            explanation: "why",
        };
        let c = spec.to_citation();
        assert_eq!(c.article, "Art. 1");
        assert_eq!(c.url, "https://example.com");
        assert_eq!(c.explanation, "why");
    }
}
