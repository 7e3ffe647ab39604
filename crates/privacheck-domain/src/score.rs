//! Weighted aggregation of check outcomes into a 0..=100 score.
//!
//! Both weighting policies share one law: `round(100 * earned / total)`, where
//! `total` sums the per-check weight and `earned` sums that weight scaled by
//! 1 for pass, 1/2 for warn and 0 for fail. Arithmetic is exact: `earned` is kept
//! in half-weight units so no floating point is involved.

use privacheck_check_catalog::risk_weight;
use privacheck_types::{Check, Grade, Priority, Status, Weighting};

pub fn weight(check: &Check, weighting: Weighting) -> u64 {
    match weighting {
        Weighting::Priority => match check.priority {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        },
        Weighting::Risk => u64::from(risk_weight(&check.id)),
    }
}

fn earned_halves(status: Status, weight: u64) -> u64 {
    match status {
        Status::Pass => 2 * weight,
        Status::Warn => weight,
        Status::Fail => 0,
    }
}

/// Score a check list. An empty list scores 0.
pub fn score(checks: &[Check], weighting: Weighting) -> u8 {
    let mut total = 0u64;
    let mut earned = 0u64;
    for check in checks {
        let w = weight(check, weighting);
        total += w;
        earned += earned_halves(check.status, w);
    }
    if total == 0 {
        return 0;
    }

    // round_half_up(100 * earned / (2 * total))
    let num = 100 * earned;
    let den = 2 * total;
    let rounded = (2 * num + den) / (2 * den);
    rounded.min(100) as u8
}

pub fn grade(score: u8) -> Grade {
    if score >= 80 {
        Grade::Good
    } else if score >= 60 {
        Grade::Fair
    } else {
        Grade::Poor
    }
}
