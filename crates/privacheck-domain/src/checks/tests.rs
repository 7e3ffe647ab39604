use crate::engine::evaluate_text;
use crate::risk::estimate_risk;
use crate::score::score;
use crate::test_support::COMPLETE_POLICY;
use privacheck_check_catalog::{KEYWORD_RULES, all_check_ids};
use privacheck_types::{Category, Check, Priority, Status, Weighting, ids};

fn find<'a>(checks: &'a [Check], id: &str) -> &'a Check {
    checks
        .iter()
        .find(|c| c.id == id)
        .unwrap_or_else(|| panic!("missing check {id}"))
}

fn status_of(checks: &[Check], id: &str) -> Status {
    find(checks, id).status
}

#[test]
fn emits_every_catalog_check_in_order() {
    let checks = evaluate_text("anything");
    let got: Vec<_> = checks.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(got, all_check_ids());
}

#[test]
fn contact_and_date_only_policy() {
    let checks = evaluate_text("Contact us at privacy@example.com. Updated January 2024.");

    assert_eq!(status_of(&checks, ids::CHECK_CONTACT_INFO), Status::Pass);
    assert_eq!(status_of(&checks, ids::CHECK_POLICY_DATE), Status::Pass);
    assert_eq!(status_of(&checks, ids::CHECK_DATA_CONTROLLER), Status::Fail);
    assert_eq!(status_of(&checks, ids::CHECK_COOKIE_POLICY), Status::Warn);

    let length = find(&checks, ids::CHECK_POLICY_LENGTH);
    assert_eq!(length.status, Status::Fail);
    assert_eq!(length.description, "Privacy policy is 7 words");
}

#[test]
fn listed_phrases_pass() {
    let core = "The data controller explains the purpose of each cookie, your rights, \
                how to reach the supervisory authority, our rules for users under 13, \
                write to privacy@example.com. Updated January 2024.";
    let filler = vec!["lorem"; 520].join(" ");
    let text = format!("{core} {filler}");
    let checks = evaluate_text(&text);

    for id in [
        ids::CHECK_DATA_CONTROLLER,
        ids::CHECK_PROCESSING_PURPOSE,
        ids::CHECK_USER_RIGHTS,
        ids::CHECK_RIGHT_TO_COMPLAIN,
        ids::CHECK_POLICY_LENGTH,
        ids::CHECK_COOKIE_POLICY,
        ids::CHECK_POLICY_DATE,
        ids::CHECK_CONTACT_INFO,
        ids::CHECK_CHILD_PRIVACY,
    ] {
        assert_eq!(status_of(&checks, id), Status::Pass, "{id}");
    }
    // Rules whose phrases are absent still fail.
    assert_eq!(status_of(&checks, ids::CHECK_LEGAL_BASIS), Status::Fail);
}

#[test]
fn complete_policy_scores_one_hundred_under_both_policies() {
    let checks = evaluate_text(&COMPLETE_POLICY);
    assert!(checks.iter().all(|c| c.status == Status::Pass));
    assert_eq!(score(&checks, Weighting::Priority), 100);
    assert_eq!(score(&checks, Weighting::Risk), 100);
}

#[test]
fn empty_text_keeps_the_warn_floor() {
    let checks = evaluate_text("");
    let length = find(&checks, ids::CHECK_POLICY_LENGTH);
    assert_eq!(length.status, Status::Fail);
    assert_eq!(length.description, "Privacy policy is 1 words");
    for rule in KEYWORD_RULES.iter() {
        assert_eq!(status_of(&checks, rule.check_id), Status::Fail, "{}", rule.check_id);
    }
    assert_eq!(status_of(&checks, ids::CHECK_COOKIE_POLICY), Status::Warn);
    assert_eq!(status_of(&checks, ids::CHECK_CHILD_PRIVACY), Status::Warn);

    // Two warns earn half weight: 2.5 of 39 and 8 of 98.
    assert_eq!(score(&checks, Weighting::Priority), 6);
    assert_eq!(score(&checks, Weighting::Risk), 8);
}

#[test]
fn non_printing_text_scores_like_empty_text() {
    let checks = evaluate_text("\u{0}");
    assert_eq!(score(&checks, Weighting::Priority), 6);
    assert_eq!(checks, evaluate_text(""));
}

#[test]
fn missing_legal_basis_is_priced() {
    let text = COMPLETE_POLICY
        .replace("legal basis", "approach")
        .replace("consent", "agreement");
    let checks = evaluate_text(&text);
    assert_eq!(status_of(&checks, ids::CHECK_LEGAL_BASIS), Status::Fail);

    let risk = estimate_risk(&checks);
    assert_eq!(risk.violations.len(), 1);
    let v = &risk.violations[0];
    assert_eq!(v.check_id, ids::CHECK_LEGAL_BASIS);
    assert_eq!((v.min_fine, v.max_fine), (310, 1200));
    assert_eq!(v.citation_label, "GDPR Art. 6(1)");
    assert_eq!(risk.min_exposure, 310);
    assert_eq!(risk.max_exposure, 1200);
}

#[test]
fn keyword_fix_is_null_exactly_when_passing() {
    let checks = evaluate_text("We explain the purpose of processing.");
    let purpose = find(&checks, ids::CHECK_PROCESSING_PURPOSE);
    assert_eq!(purpose.status, Status::Pass);
    assert!(purpose.fix.is_none());
    assert_eq!(purpose.description, "✓ Purposes of data processing mentioned");

    let rights = find(&checks, ids::CHECK_USER_RIGHTS);
    assert_eq!(rights.status, Status::Fail);
    assert_eq!(rights.description, "✗ Information about data subject rights not found");
    assert_eq!(
        rights.fix.as_deref(),
        Some("Add clear information about information about data subject rights to your privacy policy.")
    );
}

#[test]
fn heuristics_keep_fix_on_pass() {
    let checks = evaluate_text(&COMPLETE_POLICY);
    for id in [
        ids::CHECK_POLICY_DATE,
        ids::CHECK_CONTACT_INFO,
        ids::CHECK_CHILD_PRIVACY,
    ] {
        assert!(find(&checks, id).fix.is_some(), "{id}");
    }
    assert!(find(&checks, ids::CHECK_COOKIE_POLICY).fix.is_none());
    assert!(find(&checks, ids::CHECK_POLICY_LENGTH).fix.is_none());
}

#[test]
fn length_bands() {
    let words = |n: usize| vec!["word"; n].join(" ");
    let length_status = |n: usize| status_of(&evaluate_text(&words(n)), ids::CHECK_POLICY_LENGTH);

    assert_eq!(length_status(200), Status::Fail);
    assert_eq!(length_status(201), Status::Warn);
    assert_eq!(length_status(500), Status::Warn);
    assert_eq!(length_status(501), Status::Pass);

    let at_threshold = evaluate_text(&words(500));
    assert!(find(&at_threshold, ids::CHECK_POLICY_LENGTH).fix.is_none());
    let short = evaluate_text(&words(499));
    assert!(find(&short, ids::CHECK_POLICY_LENGTH).fix.is_some());
}

#[test]
fn cookie_and_child_privacy_only_warn() {
    let checks = evaluate_text("nothing to see");
    assert_eq!(status_of(&checks, ids::CHECK_COOKIE_POLICY), Status::Warn);
    assert_eq!(status_of(&checks, ids::CHECK_CHILD_PRIVACY), Status::Warn);
    assert_eq!(status_of(&checks, ids::CHECK_CONTACT_INFO), Status::Fail);
}

#[test]
fn child_privacy_terms() {
    for text in ["minors", "Under 16", "under 13", "our Children"] {
        let checks = evaluate_text(text);
        assert_eq!(status_of(&checks, ids::CHECK_CHILD_PRIVACY), Status::Pass, "{text}");
    }
}

#[test]
fn matching_is_case_insensitive() {
    let checks = evaluate_text("THE DATA CONTROLLER");
    assert_eq!(status_of(&checks, ids::CHECK_DATA_CONTROLLER), Status::Pass);
}

#[test]
fn priorities_categories_and_citations() {
    let checks = evaluate_text("");

    assert_eq!(find(&checks, ids::CHECK_DATA_CONTROLLER).priority, Priority::High);
    assert_eq!(find(&checks, ids::CHECK_LEGAL_BASIS).priority, Priority::Medium);
    assert_eq!(find(&checks, ids::CHECK_COOKIE_POLICY).priority, Priority::High);
    assert_eq!(find(&checks, ids::CHECK_CONTACT_INFO).priority, Priority::High);
    assert_eq!(find(&checks, ids::CHECK_POLICY_LENGTH).priority, Priority::Medium);

    assert_eq!(find(&checks, ids::CHECK_COOKIE_POLICY).category, Category::Cookies);
    assert_eq!(find(&checks, ids::CHECK_DATA_SOURCE).category, Category::Policy);
    assert_eq!(find(&checks, ids::CHECK_CHILD_PRIVACY).category, Category::Other);

    assert!(find(&checks, ids::CHECK_DPO_CONTACT).citation.is_none());
    for id in [ids::CHECK_POLICY_LENGTH, ids::CHECK_POLICY_DATE, ids::CHECK_CHILD_PRIVACY] {
        assert!(find(&checks, id).citation.is_some(), "{id}");
    }
}
