use super::utils::heuristic_check;
use crate::model::PolicyText;
use privacheck_check_catalog::{CHILD_PRIVACY, CHILD_TERMS};
use privacheck_types::{Check, Status};

pub fn run(text: &PolicyText<'_>, out: &mut Vec<Check>) {
    let found = text.mentions_any(CHILD_TERMS);
    let description = if found {
        "Child privacy provisions found"
    } else {
        "No child privacy provisions found"
    };
    out.push(heuristic_check(
        &CHILD_PRIVACY,
        if found { Status::Pass } else { Status::Warn },
        description.to_string(),
        Some(CHILD_PRIVACY.fix),
    ));
}
