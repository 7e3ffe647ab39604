use super::utils::heuristic_check;
use crate::model::PolicyText;
use privacheck_check_catalog::{COOKIE_POLICY, COOKIE_TERMS};
use privacheck_types::{Check, Status};

/// A missing cookie mention is a softer signal than a missing keyword rule: warn, never fail.
pub fn run(text: &PolicyText<'_>, out: &mut Vec<Check>) {
    let found = text.mentions_any(COOKIE_TERMS);
    out.push(if found {
        heuristic_check(
            &COOKIE_POLICY,
            Status::Pass,
            "Cookie information found".to_string(),
            None,
        )
    } else {
        heuristic_check(
            &COOKIE_POLICY,
            Status::Warn,
            "No cookie information found".to_string(),
            Some(COOKIE_POLICY.fix),
        )
    });
}
