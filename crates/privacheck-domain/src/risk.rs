//! Fine-exposure aggregation.

use privacheck_check_catalog::{FALLBACK_CITATION_LABEL, fine_for};
use privacheck_types::{Check, FinancialRisk, Status, Violation};

/// Warnings count for 30% of the tabled range.
const WARN_NUMERATOR: u64 = 3;
const WARN_DENOMINATOR: u64 = 10;

fn scale_for_warn(amount: u64) -> u64 {
    // round_half_up(amount * 0.3), applied to each bound separately
    (amount * WARN_NUMERATOR * 2 + WARN_DENOMINATOR) / (WARN_DENOMINATOR * 2)
}

/// Collect a violation for every priced check that did not pass, in check order.
pub fn estimate_risk(checks: &[Check]) -> FinancialRisk {
    let mut risk = FinancialRisk::default();

    for check in checks {
        let Some(fine) = fine_for(&check.id) else {
            continue;
        };
        let (min_fine, max_fine) = match check.status {
            Status::Pass => continue,
            Status::Fail => (fine.min_fine, fine.max_fine),
            Status::Warn => (scale_for_warn(fine.min_fine), scale_for_warn(fine.max_fine)),
        };

        risk.min_exposure += min_fine;
        risk.max_exposure += max_fine;
        risk.violations.push(Violation {
            check_id: check.id.clone(),
            name: fine.name.to_string(),
            min_fine,
            max_fine,
            citation_label: check
                .citation
                .as_ref()
                .map(|c| c.article.clone())
                .unwrap_or_else(|| FALLBACK_CITATION_LABEL.to_string()),
        });
    }

    risk.average_exposure = (risk.min_exposure + risk.max_exposure).div_ceil(2);
    risk
}
