use crate::checks;
use crate::fingerprint::input_fingerprint;
use crate::model::PolicyText;
use crate::policy::EffectiveConfig;
use crate::report::DomainReport;
use crate::risk::estimate_risk;
use crate::score::{grade, score};
use privacheck_types::{Check, CheckCounts, PrivacheckData, Status, Verdict};

/// Evaluate a policy against the catalog.
///
/// Total over every `&str`: the empty string yields a full check list with the
/// length check failing.
pub fn evaluate_text(text: &str) -> Vec<Check> {
    let policy = PolicyText::new(text);
    let mut out = Vec::new();
    checks::run_all(&policy, &mut out);
    out
}

/// Run the whole pipeline: evaluate, score, estimate exposure, derive a verdict.
pub fn evaluate(text: &str, cfg: &EffectiveConfig) -> DomainReport {
    let policy = PolicyText::new(text);
    let mut checks = Vec::new();
    checks::run_all(&policy, &mut checks);

    let score = score(&checks, cfg.weighting);
    let counts = CheckCounts::from_checks(&checks);
    let verdict = compute_verdict(score, cfg.fail_under, &checks);
    let financial_risk = cfg.estimate_risk.then(|| estimate_risk(&checks));

    let data = PrivacheckData {
        profile: cfg.profile.clone(),
        fail_under: cfg.fail_under,
        input_sha256: input_fingerprint(text),
        word_count: policy.word_count() as u32,
        checks_total: checks.len() as u32,
    };

    DomainReport {
        verdict,
        grade: grade(score),
        score,
        counts,
        checks,
        financial_risk,
        data,
    }
}

/// `fail` below the threshold, `warn` when anything is short of a pass, `pass` otherwise.
pub fn compute_verdict(score: u8, fail_under: u8, checks: &[Check]) -> Verdict {
    if score < fail_under {
        return Verdict::Fail;
    }
    if checks.iter().any(|c| c.status != Status::Pass) {
        return Verdict::Warn;
    }
    Verdict::Pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{COMPLETE_POLICY, config};
    use privacheck_types::{Grade, Weighting, ids};

    #[test]
    fn empty_text_hits_the_floor_and_fails() {
        let report = evaluate("", &config(Weighting::Priority, 80));
        assert_eq!(report.score, 6);
        assert_eq!(report.counts.warn, 2);
        assert_eq!(report.counts.fail, 15);
        assert_eq!(report.grade, Grade::Poor);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.data.word_count, 1);
        assert_eq!(report.data.checks_total, 17);

        let risk_weighted = evaluate("", &config(Weighting::Risk, 80));
        assert_eq!(risk_weighted.score, 8);
    }

    #[test]
    fn complete_policy_passes_cleanly() {
        let report = evaluate(&COMPLETE_POLICY, &config(Weighting::Risk, 80));
        assert_eq!(report.score, 100);
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.counts.pass, 17);
        let risk = report.financial_risk.expect("risk requested");
        assert!(!risk.has_exposure());
    }

    #[test]
    fn warnings_above_threshold_produce_warn_verdict() {
        let text = COMPLETE_POLICY.replace("cookie", "tracker");
        let report = evaluate(&text, &config(Weighting::Priority, 80));
        assert_eq!(report.verdict, Verdict::Warn);
        assert_eq!(report.counts.warn, 1);
    }

    #[test]
    fn zero_threshold_never_fails() {
        let report = evaluate("", &config(Weighting::Priority, 0));
        assert_eq!(report.verdict, Verdict::Warn);
    }

    #[test]
    fn threshold_is_exclusive() {
        let checks = evaluate_text(&COMPLETE_POLICY);
        assert_eq!(compute_verdict(80, 80, &checks), Verdict::Pass);
        assert_eq!(compute_verdict(79, 80, &checks), Verdict::Fail);
    }

    #[test]
    fn risk_can_be_skipped() {
        let mut cfg = config(Weighting::Priority, 80);
        cfg.estimate_risk = false;
        assert!(evaluate("", &cfg).financial_risk.is_none());
    }

    #[test]
    fn evaluate_text_matches_pipeline_checks() {
        let text = "Contact us at privacy@example.com. Updated January 2024.";
        let report = evaluate(text, &EffectiveConfig::default());
        assert_eq!(evaluate_text(text), report.checks);
        assert_eq!(report.checks[0].id, ids::CHECK_DATA_CONTROLLER);
    }
}
