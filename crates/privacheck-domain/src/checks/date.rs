use super::utils::heuristic_check;
use crate::model::PolicyText;
use privacheck_check_catalog::{MONTH_NAMES, POLICY_DATE};
use privacheck_types::{Check, Status};
use regex::Regex;
use std::sync::LazyLock;

/// A run of four digits, or a `D/M/YY` / `D/M/YYYY` shaped token.
static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}|[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}").expect("static date pattern")
});

pub fn has_date(text: &PolicyText<'_>) -> bool {
    NUMERIC_DATE.is_match(text.raw) || text.mentions_any(MONTH_NAMES)
}

pub fn run(text: &PolicyText<'_>, out: &mut Vec<Check>) {
    let found = has_date(text);
    let description = if found {
        "Policy includes date information"
    } else {
        "No date found in policy"
    };
    out.push(heuristic_check(
        &POLICY_DATE,
        if found { Status::Pass } else { Status::Fail },
        description.to_string(),
        Some(POLICY_DATE.fix),
    ));
}
