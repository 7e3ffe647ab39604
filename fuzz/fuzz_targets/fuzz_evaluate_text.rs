//! Fuzz target for policy evaluation.
//!
//! Goal: evaluation should **never panic** on any UTF-8 input, and the
//! score must stay within 0..=100.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluate_text
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use privacheck_types::Weighting;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let checks = privacheck_domain::evaluate_text(text);
        assert_eq!(checks.len(), 17);

        for weighting in [Weighting::Priority, Weighting::Risk] {
            assert!(privacheck_domain::score(&checks, weighting) <= 100);
        }

        let risk = privacheck_domain::estimate_risk(&checks);
        assert!(risk.min_exposure <= risk.max_exposure);
    }
});
