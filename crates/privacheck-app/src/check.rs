//! The `check` use case: resolve config, evaluate a policy and produce a report.

use anyhow::Context;
use privacheck_settings::{Overrides, PrivacheckConfigV1, ResolvedConfig};
use privacheck_types::{PrivacheckReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Caller errors detected before evaluation starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("no input provided")]
    NoInput,
}

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Policy text to evaluate.
    pub text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: PrivacheckReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    if input.text.trim().is_empty() {
        return Err(InputError::NoInput.into());
    }

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        PrivacheckConfigV1::default()
    } else {
        privacheck_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = privacheck_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    let effective = &resolved.effective;

    tracing::debug!(
        profile = %effective.profile,
        weighting = effective.weighting.as_str(),
        fail_under = effective.fail_under,
        bytes = input.text.len(),
        "evaluating policy"
    );

    let domain_report = privacheck_domain::evaluate(input.text, effective);
    let privacheck_domain::report::DomainReport {
        verdict,
        grade,
        score,
        counts,
        checks,
        financial_risk,
        data,
    } = domain_report;

    tracing::info!(
        score,
        verdict = verdict.as_str(),
        pass = counts.pass,
        warn = counts.warn,
        fail = counts.fail,
        "evaluation complete"
    );
    if let Some(risk) = financial_risk.as_ref().filter(|r| r.has_exposure()) {
        tracing::info!(
            violations = risk.violations.len(),
            min = risk.min_exposure,
            max = risk.max_exposure,
            "fine exposure estimated (EUR millions)"
        );
    }

    let finished_at = OffsetDateTime::now_utc();

    let report = PrivacheckReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "privacheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        grade,
        score,
        weighting: effective.weighting,
        counts,
        checks,
        financial_risk,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
