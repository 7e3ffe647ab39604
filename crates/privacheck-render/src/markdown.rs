use crate::{RenderableCheck, RenderableReport, RenderableRisk, RenderableStatus, RenderableVerdict};
use privacheck_types::Category;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Privacy policy compliance report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Score: {}/100 ({}, {} weighting)\n- Checks: {} pass / {} warn / {} fail\n\n",
        verdict,
        report.score,
        report.grade,
        report.weighting,
        report.counts.pass,
        report.counts.warn,
        report.counts.fail
    ));

    if report.checks.is_empty() {
        out.push_str("No checks.\n");
        return out;
    }

    render_checks(&mut out, &report.checks);

    if let Some(risk) = &report.risk {
        render_risk(&mut out, risk);
    }

    render_references(&mut out, &report.checks);

    out
}

fn status_tag(status: RenderableStatus) -> &'static str {
    match status {
        RenderableStatus::Pass => "PASS",
        RenderableStatus::Warn => "WARN",
        RenderableStatus::Fail => "FAIL",
    }
}

fn render_checks(out: &mut String, checks: &[RenderableCheck]) {
    out.push_str("## Checks\n\n");

    // Groups follow the fixed category order; checks keep evaluation order within a group.
    for category in Category::ALL {
        let group: Vec<&RenderableCheck> =
            checks.iter().filter(|c| c.category == category).collect();
        if group.is_empty() {
            continue;
        }

        out.push_str(&format!("### {}\n\n", category.label()));
        for c in group {
            out.push_str(&format!(
                "- [{}] `{}` {} ({} priority): {}\n",
                status_tag(c.status),
                c.id,
                c.title,
                c.priority,
                c.description
            ));
            for detail in &c.details {
                out.push_str(&format!("  - {}\n", detail));
            }
            if let Some(fix) = &c.fix {
                out.push_str(&format!("  - fix: {}\n", fix));
            }
        }
        out.push('\n');
    }
}

fn render_risk(out: &mut String, risk: &RenderableRisk) {
    out.push_str("## Estimated fine exposure\n\n");

    if risk.violations.is_empty() {
        out.push_str("No priced violations detected.\n\n");
        return;
    }

    for v in &risk.violations {
        out.push_str(&format!(
            "- {}: €{}M - €{}M ({})\n",
            v.name, v.min_fine, v.max_fine, v.citation_label
        ));
    }
    out.push_str(&format!(
        "\n**Total potential exposure:** €{}M - €{}M (average €{}M)\n\n",
        risk.min_exposure, risk.max_exposure, risk.average_exposure
    ));
    out.push_str(
        "> Ranges are drawn from published enforcement actions. Actual fines depend on revenue, severity, and cooperation with the authority.\n\n",
    );
}

fn render_references(out: &mut String, checks: &[RenderableCheck]) {
    let cited: Vec<&RenderableCheck> = checks.iter().filter(|c| c.citation.is_some()).collect();
    if cited.is_empty() {
        return;
    }

    out.push_str("## Regulatory references\n\n");
    out.push_str(
        "| Requirement | Citation | What it requires | Status | Your policy |\n|---|---|---|---|---|\n",
    );
    for c in cited {
        let Some(citation) = &c.citation else {
            continue;
        };
        let label = match c.status {
            RenderableStatus::Pass => "COMPLIANT",
            RenderableStatus::Warn => "PARTIAL",
            RenderableStatus::Fail => "MISSING",
        };
        let finding = match &c.fix {
            Some(fix) => format!("{} (fix: {})", c.description, fix),
            None => c.description.clone(),
        };
        out.push_str(&format!(
            "| {} | [{}]({}) | {} | {} | {} |\n",
            escape_cell(&c.title),
            escape_cell(&citation.article),
            citation.url,
            escape_cell(&citation.explanation),
            label,
            escape_cell(&finding)
        ));
    }
}

/// Table cells are single-line and `|` would split the cell.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}
