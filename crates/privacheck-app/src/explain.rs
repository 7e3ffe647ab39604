//! The `explain` use case: look up check documentation.

use privacheck_check_catalog::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the available check ids.
    NotFound {
        identifier: String,
        available_check_ids: Vec<&'static str>,
    },
}

/// Look up an explanation for a check id or short rule id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::known_check_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(&format!(
        "Check: {} ({} priority, {})\n\n",
        exp.check_id,
        exp.priority.as_str(),
        exp.category.label()
    ));
    out.push_str(&exp.description);
    out.push_str("\n\n");

    if let Some(citation) = &exp.citation {
        out.push_str("Citation\n");
        out.push_str("--------\n");
        out.push_str(&format!("{} <{}>\n", citation.article, citation.url));
        out.push_str(citation.explanation);
        out.push_str("\n\n");
    }

    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(&exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before (not satisfied):\n");
    out.push_str("```text\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After (satisfied):\n");
    out.push_str("```text\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, check_ids: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown check id: {}\n\n", identifier));
    out.push_str("Available check ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}
