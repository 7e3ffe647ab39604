//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Evaluation determinism
//! - Score range and monotonicity under added disclosures
//! - Fine exposure bounds

use crate::engine::{evaluate, evaluate_text};
use crate::risk::estimate_risk;
use crate::score::score;
use crate::test_support::config;
use privacheck_check_catalog::{FINE_TABLE, KEYWORD_RULES, all_check_ids};
use privacheck_types::{Status, Weighting};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary text, including non-ASCII and control characters.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        prop::string::string_regex("[a-zA-Z0-9@/ .,\n]{0,400}").unwrap(),
    ]
}

/// A phrase lifted from the catalog, in random case.
fn arb_keyword() -> impl Strategy<Value = String> {
    let phrases: Vec<&'static str> = KEYWORD_RULES
        .iter()
        .flat_map(|r| r.keywords.iter().copied())
        .collect();
    (prop::sample::select(phrases), any::<bool>())
        .prop_map(|(p, upper)| if upper { p.to_uppercase() } else { p.to_string() })
}

fn arb_weighting() -> impl Strategy<Value = Weighting> {
    prop_oneof![Just(Weighting::Priority), Just(Weighting::Risk)]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_deterministic(text in arb_text()) {
        prop_assert_eq!(evaluate_text(&text), evaluate_text(&text));
    }

    #[test]
    fn every_check_is_emitted_once(text in arb_text()) {
        let got: Vec<_> = evaluate_text(&text).into_iter().map(|c| c.id).collect();
        prop_assert_eq!(got, all_check_ids());
    }

    #[test]
    fn score_stays_in_range(text in arb_text(), weighting in arb_weighting()) {
        let s = score(&evaluate_text(&text), weighting);
        prop_assert!(s <= 100);
    }

    #[test]
    fn adding_a_disclosure_never_lowers_the_score(
        text in arb_text(),
        phrase in arb_keyword(),
        weighting in arb_weighting(),
    ) {
        let before = score(&evaluate_text(&text), weighting);
        let after = score(&evaluate_text(&format!("{text} {phrase}")), weighting);
        prop_assert!(after >= before, "{before} -> {after}");
    }

    #[test]
    fn exposure_is_bounded_by_the_fine_table(text in arb_text()) {
        let risk = estimate_risk(&evaluate_text(&text));
        let ceiling: u64 = FINE_TABLE.iter().map(|f| f.max_fine).sum();

        prop_assert!(risk.min_exposure <= risk.average_exposure);
        prop_assert!(risk.average_exposure <= risk.max_exposure);
        prop_assert!(risk.max_exposure <= ceiling);
        for v in &risk.violations {
            prop_assert!(v.min_fine <= v.max_fine);
        }
    }

    #[test]
    fn violations_only_for_unmet_checks(text in arb_text()) {
        let checks = evaluate_text(&text);
        let risk = estimate_risk(&checks);
        for v in &risk.violations {
            let check = checks.iter().find(|c| c.id == v.check_id);
            prop_assert!(check.is_some_and(|c| c.status != Status::Pass));
        }
    }

    #[test]
    fn pipeline_is_idempotent(text in arb_text(), weighting in arb_weighting()) {
        let cfg = config(weighting, 80);
        let first = evaluate(&text, &cfg);
        let second = evaluate(&text, &cfg);
        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.verdict, second.verdict);
        prop_assert_eq!(first.financial_risk, second.financial_risk);
        prop_assert_eq!(first.data.input_sha256, second.data.input_sha256);
    }
}
