//! Fuzz target for the full evaluation pipeline with arbitrary settings.
//!
//! Builds policy text from fuzzer-chosen fragments so regulatory phrases
//! show up far more often than in raw bytes.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_keyword_mix
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use privacheck_domain::policy::EffectiveConfig;
use privacheck_types::{Verdict, Weighting};

const FRAGMENTS: &[&str] = &[
    "legal basis",
    "legitimate interest",
    "right to erasure",
    "data portability",
    "retention period",
    "third parties",
    "international transfer",
    "data breach",
    "cookie",
    "under 16",
    "contact us",
    "dpo@example.com",
    "Last updated: 2024-01-15",
    "lorem",
    "\u{00e9}\u{00df}",
    "\n\t ",
];

#[derive(Debug, Arbitrary)]
struct Input {
    fragments: Vec<u8>,
    risk_weighting: bool,
    fail_under: u8,
    filler: String,
}

fuzz_target!(|input: Input| {
    let mut text = input.filler.clone();
    for idx in &input.fragments {
        text.push(' ');
        text.push_str(FRAGMENTS[*idx as usize % FRAGMENTS.len()]);
    }

    let cfg = EffectiveConfig {
        weighting: if input.risk_weighting {
            Weighting::Risk
        } else {
            Weighting::Priority
        },
        fail_under: input.fail_under.min(100),
        ..EffectiveConfig::default()
    };

    let report = privacheck_domain::evaluate(&text, &cfg);
    assert!(report.score <= 100);
    if report.score < cfg.fail_under {
        assert_eq!(report.verdict, Verdict::Fail);
    }
    assert_eq!(report, privacheck_domain::evaluate(&text, &cfg));
});
