use anyhow::Context;
use privacheck_domain::parse_status;
use privacheck_render::{
    RenderableCheck, RenderableCitation, RenderableCounts, RenderableReport, RenderableRisk,
    RenderableStatus, RenderableVerdict, RenderableViolation,
};
use privacheck_types::{
    Category, Check, CheckCounts, Grade, Priority, PrivacheckData, PrivacheckReport,
    SCHEMA_REPORT_V1, Status, ToolMeta, Verdict, Weighting, ids,
};
use time::OffsetDateTime;

/// Parse a `privacheck.report.v1` document.
///
/// Check statuses are validated before typed deserialization so an unknown value is
/// reported against the check that carries it.
pub fn parse_report_json(text: &str) -> anyhow::Result<PrivacheckReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    if let Some(checks) = value.get("checks").and_then(|v| v.as_array()) {
        for check in checks {
            let id = check.get("id").and_then(|v| v.as_str()).unwrap_or("<unknown>");
            let status = check
                .get("status")
                .and_then(|v| v.as_str())
                .unwrap_or_default();
            parse_status(id, status)?;
        }
    }

    let report: PrivacheckReport =
        serde_json::from_value(value).context("parse privacheck report")?;
    Ok(report)
}

pub fn serialize_report(report: &PrivacheckReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Recompute score, grade and verdict of an existing report under `weighting`.
///
/// Checks, counts and fine exposure do not depend on the weighting and are kept.
pub fn rescore(mut report: PrivacheckReport, weighting: Weighting) -> PrivacheckReport {
    let score = privacheck_domain::score(&report.checks, weighting);
    report.score = score;
    report.grade = privacheck_domain::grade(score);
    report.verdict =
        privacheck_domain::compute_verdict(score, report.data.fail_under, &report.checks);
    report.weighting = weighting;

    tracing::debug!(
        weighting = weighting.as_str(),
        score,
        verdict = report.verdict.as_str(),
        "rescored report"
    );
    report
}

pub fn to_renderable(report: &PrivacheckReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Warn => RenderableVerdict::Warn,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        score: report.score,
        grade: report.grade.as_str().to_string(),
        weighting: report.weighting.as_str().to_string(),
        counts: RenderableCounts {
            pass: report.counts.pass,
            warn: report.counts.warn,
            fail: report.counts.fail,
        },
        checks: report.checks.iter().map(renderable_check).collect(),
        risk: report.financial_risk.as_ref().map(|r| RenderableRisk {
            violations: r
                .violations
                .iter()
                .map(|v| RenderableViolation {
                    name: v.name.clone(),
                    citation_label: v.citation_label.clone(),
                    min_fine: v.min_fine,
                    max_fine: v.max_fine,
                })
                .collect(),
            min_exposure: r.min_exposure,
            max_exposure: r.max_exposure,
            average_exposure: r.average_exposure,
        }),
    }
}

fn renderable_check(c: &Check) -> RenderableCheck {
    RenderableCheck {
        id: c.id.clone(),
        title: c.title.clone(),
        status: match c.status {
            Status::Pass => RenderableStatus::Pass,
            Status::Warn => RenderableStatus::Warn,
            Status::Fail => RenderableStatus::Fail,
        },
        priority: c.priority.as_str().to_string(),
        category: c.category,
        description: c.description.clone(),
        details: c.details.clone(),
        fix: c.fix.clone(),
        citation: c.citation.as_ref().map(|cit| RenderableCitation {
            article: cit.article.clone(),
            url: cit.url.clone(),
            explanation: cit.explanation.clone(),
        }),
    }
}

/// A failing report that carries the runtime error as its only check.
pub fn runtime_error_report(message: &str) -> PrivacheckReport {
    let now = OffsetDateTime::now_utc();
    let checks = vec![Check {
        id: ids::CHECK_TOOL_RUNTIME.to_string(),
        title: "Tool runtime".to_string(),
        status: Status::Fail,
        priority: Priority::High,
        category: Category::Other,
        description: message.to_string(),
        fix: Some("Fix the tool error and re-run privacheck.".to_string()),
        details: Vec::new(),
        citation: None,
    }];

    PrivacheckReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "privacheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        grade: Grade::Poor,
        score: 0,
        weighting: Weighting::default(),
        counts: CheckCounts::from_checks(&checks),
        checks,
        financial_risk: None,
        data: PrivacheckData {
            profile: "unknown".to_string(),
            fail_under: 0,
            input_sha256: String::new(),
            word_count: 0,
            checks_total: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CheckInput, run_check};
    use privacheck_settings::Overrides;

    const POLICY: &str = "Acme Ltd is the data controller. We explain the purpose of processing and \
                          rely on consent. Contact privacy@acme.example. Updated March 2024.";

    fn sample_report() -> PrivacheckReport {
        run_check(CheckInput {
            text: POLICY,
            config_text: "",
            overrides: Overrides::default(),
        })
        .expect("run_check")
        .report
    }

    fn sample_json() -> String {
        let bytes = serialize_report(&sample_report()).expect("serialize");
        String::from_utf8(bytes).expect("utf8")
    }

    #[test]
    fn serialized_report_parses_back() {
        let report = sample_report();
        let parsed = parse_report_json(&sample_json()).expect("parse");
        assert_eq!(parsed.checks, report.checks);
        assert_eq!(parsed.score, report.score);
        assert_eq!(parsed.financial_risk, report.financial_risk);
    }

    #[test]
    fn fix_is_serialized_as_null() {
        let value: serde_json::Value = serde_json::from_str(&sample_json()).expect("json");
        let controller = &value["checks"][0];
        assert_eq!(controller["id"], ids::CHECK_DATA_CONTROLLER);
        assert_eq!(controller["status"], "pass");
        assert!(controller["fix"].is_null());
        assert!(controller.as_object().is_some_and(|o| o.contains_key("fix")));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(&sample_json()).expect("json");
        value["checks"][2]["status"] = serde_json::json!("maybe");
        let err = parse_report_json(&value.to_string()).expect_err("unknown status");
        let msg = format!("{err:#}");
        assert!(msg.contains("maybe"), "{msg}");
        assert!(msg.contains(ids::CHECK_PROCESSING_PURPOSE), "{msg}");
    }

    #[test]
    fn wrong_schema_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(&sample_json()).expect("json");
        value["schema"] = serde_json::json!("other.report.v9");
        assert!(parse_report_json(&value.to_string()).is_err());
        assert!(parse_report_json("not json").is_err());
    }

    #[test]
    fn rescore_switches_weighting() {
        let report = sample_report();
        let checks = report.checks.clone();

        let risk = rescore(report, Weighting::Risk);
        assert_eq!(risk.weighting, Weighting::Risk);
        assert_eq!(risk.score, privacheck_domain::score(&checks, Weighting::Risk));
        assert_eq!(risk.grade, privacheck_domain::grade(risk.score));
        assert_eq!(risk.checks, checks);

        let back = rescore(risk, Weighting::Priority);
        assert_eq!(back.score, privacheck_domain::score(&checks, Weighting::Priority));
    }

    #[test]
    fn rescore_uses_report_threshold() {
        let mut report = sample_report();
        report.data.fail_under = 0;
        let rescored = rescore(report, Weighting::Risk);
        assert_eq!(rescored.verdict, Verdict::Warn);
    }

    #[test]
    fn renderable_mirrors_report() {
        let report = sample_report();
        let r = to_renderable(&report);
        assert_eq!(r.score, report.score);
        assert_eq!(r.checks.len(), report.checks.len());
        assert_eq!(r.grade, report.grade.as_str());
        assert_eq!(r.weighting, "priority");
        assert!(r.risk.is_some());
        assert_eq!(r.checks[0].status, RenderableStatus::Pass);
    }

    #[test]
    fn renderable_carries_details_and_citation_text() {
        let mut report = sample_report();
        report.checks[0].details = vec!["matched \"controller\"".to_string()];
        let r = to_renderable(&report);
        assert_eq!(r.checks[0].details, vec!["matched \"controller\"".to_string()]);

        let cited = report
            .checks
            .iter()
            .position(|c| c.citation.is_some())
            .expect("a cited check");
        let expected = report.checks[cited]
            .citation
            .as_ref()
            .map(|c| c.explanation.clone());
        assert_eq!(
            r.checks[cited].citation.as_ref().map(|c| c.explanation.clone()),
            expected
        );
    }

    #[test]
    fn runtime_error_report_shape() {
        let report = runtime_error_report("boom");
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.checks.len(), 1);
        assert_eq!(report.checks[0].id, ids::CHECK_TOOL_RUNTIME);
        assert_eq!(report.checks[0].description, "boom");
        assert_eq!(report.counts.fail, 1);

        let json = serialize_report(&report).expect("serialize");
        let parsed = parse_report_json(std::str::from_utf8(&json).expect("utf8")).expect("parse");
        assert_eq!(parsed.checks, report.checks);
    }
}
