use super::utils::heuristic_check;
use crate::model::PolicyText;
use privacheck_check_catalog::{LENGTH_THRESHOLDS, POLICY_LENGTH};
use privacheck_types::{Check, Status};

pub fn run(text: &PolicyText<'_>, out: &mut Vec<Check>) {
    let words = text.word_count();
    let status = if words > LENGTH_THRESHOLDS.pass_above {
        Status::Pass
    } else if words > LENGTH_THRESHOLDS.warn_above {
        Status::Warn
    } else {
        Status::Fail
    };
    // Exactly at the pass threshold warns without a fix.
    let fix = (words < LENGTH_THRESHOLDS.pass_above).then_some(POLICY_LENGTH.fix);

    out.push(heuristic_check(
        &POLICY_LENGTH,
        status,
        format!("Privacy policy is {words} words"),
        fix,
    ));
}
