use super::utils::heuristic_check;
use crate::model::PolicyText;
use privacheck_check_catalog::{CONTACT_INFO, CONTACT_TERMS};
use privacheck_types::{Check, Status};

pub fn run(text: &PolicyText<'_>, out: &mut Vec<Check>) {
    let found = text.mentions_any(CONTACT_TERMS);
    let description = if found {
        "Contact information found"
    } else {
        "No contact information found"
    };
    out.push(heuristic_check(
        &CONTACT_INFO,
        if found { Status::Pass } else { Status::Fail },
        description.to_string(),
        Some(CONTACT_INFO.fix),
    ));
}
