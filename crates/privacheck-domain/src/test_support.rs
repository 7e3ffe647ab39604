use crate::policy::EffectiveConfig;
use privacheck_types::{Category, Check, Priority, Status, Weighting};
use std::sync::LazyLock;

/// One paragraph that satisfies every keyword rule and every heuristic except length.
pub const COMPLETE_PARAGRAPH: &str = "\
Acme Ltd is the data controller. Our data protection officer can be reached by email at \
privacy@acme.example. We explain the purpose of processing and the legal basis we rely on, \
including consent. The personal data we collect includes your name and address. We share \
data with each recipient listed below. An international transfer to a third country uses \
safeguards. Our retention period is two years. Your rights include the right to access and \
the right to erasure. You may complain to the supervisory authority. We do not use automated \
decision making or profiling. Some data is collected from public sources. We use a cookie \
banner. Our service is not directed to children under 13. Last updated January 2024.";

/// [`COMPLETE_PARAGRAPH`] repeated until it clears the length threshold.
pub static COMPLETE_POLICY: LazyLock<String> =
    LazyLock::new(|| vec![COMPLETE_PARAGRAPH; 6].join("\n\n"));

pub fn check(id: &str, status: Status, priority: Priority) -> Check {
    Check {
        id: id.to_string(),
        title: id.to_string(),
        status,
        priority,
        category: Category::Other,
        description: String::new(),
        fix: None,
        details: Vec::new(),
        citation: None,
    }
}

pub fn config(weighting: Weighting, fail_under: u8) -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        weighting,
        fail_under,
        estimate_risk: true,
    }
}
