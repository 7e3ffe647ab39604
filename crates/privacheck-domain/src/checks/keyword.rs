use crate::model::PolicyText;
use privacheck_check_catalog::KEYWORD_RULES;
use privacheck_types::{Check, Status};

pub fn run(text: &PolicyText<'_>, out: &mut Vec<Check>) {
    for rule in KEYWORD_RULES.iter() {
        let found = rule.matches(&text.lowered);
        out.push(Check {
            id: rule.check_id.to_string(),
            title: rule.title.to_string(),
            status: if found { Status::Pass } else { Status::Fail },
            priority: rule.priority(),
            category: rule.category(),
            description: if found {
                format!("✓ {} mentioned", rule.description)
            } else {
                format!("✗ {} not found", rule.description)
            },
            fix: (!found).then(|| {
                format!(
                    "Add clear information about {} to your privacy policy.",
                    rule.description.to_lowercase()
                )
            }),
            details: Vec::new(),
            citation: rule.citation.as_ref().map(|c| c.to_citation()),
        });
    }
}
