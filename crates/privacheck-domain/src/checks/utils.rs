use privacheck_check_catalog::HeuristicSpec;
use privacheck_types::{Check, Status};

pub fn heuristic_check(
    spec: &HeuristicSpec,
    status: Status,
    description: String,
    fix: Option<&str>,
) -> Check {
    Check {
        id: spec.check_id.to_string(),
        title: spec.title.to_string(),
        status,
        priority: spec.priority,
        category: spec.category,
        description,
        fix: fix.map(str::to_string),
        details: Vec::new(),
        citation: Some(spec.citation.to_citation()),
    }
}
