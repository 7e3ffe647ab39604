//! Lookup tables keyed by check id.

use privacheck_types::ids;

/// Weight for check ids absent from [`RISK_WEIGHTS`].
pub const DEFAULT_RISK_WEIGHT: u32 = 1;

/// Label used for a violation whose check carries no citation.
pub const FALLBACK_CITATION_LABEL: &str = "GDPR (general)";

/// Relative historical fine severity per check, 1..=10.
pub static RISK_WEIGHTS: &[(&str, u32)] = &[
    (ids::CHECK_LEGAL_BASIS, 10),
    (ids::CHECK_DATA_TRANSFERS, 10),
    (ids::CHECK_CHILD_PRIVACY, 9),
    (ids::CHECK_PROCESSING_PURPOSE, 8),
    (ids::CHECK_USER_RIGHTS, 8),
    (ids::CHECK_COOKIE_POLICY, 7),
    (ids::CHECK_DATA_CONTROLLER, 7),
    (ids::CHECK_DATA_TYPES, 6),
    (ids::CHECK_DATA_RECIPIENTS, 6),
    (ids::CHECK_RETENTION_PERIOD, 5),
    (ids::CHECK_AUTOMATED_DECISIONS, 5),
    (ids::CHECK_RIGHT_TO_COMPLAIN, 4),
    (ids::CHECK_CONTACT_INFO, 4),
    (ids::CHECK_DATA_SOURCE, 3),
    (ids::CHECK_POLICY_DATE, 3),
    (ids::CHECK_DPO_CONTACT, 2),
];

pub fn risk_weight(check_id: &str) -> u32 {
    RISK_WEIGHTS
        .iter()
        .find(|(id, _)| *id == check_id)
        .map(|(_, w)| *w)
        .unwrap_or(DEFAULT_RISK_WEIGHT)
}

/// Fine range attributable to an unmet requirement, in millions of euros.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FineExposure {
    pub check_id: &'static str,
    pub name: &'static str,
    pub min_fine: u64,
    pub max_fine: u64,
}

// Ranges follow published enforcement actions for the same class of failure.
pub static FINE_TABLE: &[FineExposure] = &[
    FineExposure {
        check_id: ids::CHECK_LEGAL_BASIS,
        name: "Processing without a lawful basis",
        min_fine: 310,
        max_fine: 1200,
    },
    FineExposure {
        check_id: ids::CHECK_DATA_TRANSFERS,
        name: "Unlawful international data transfers",
        min_fine: 225,
        max_fine: 1200,
    },
    FineExposure {
        check_id: ids::CHECK_PROCESSING_PURPOSE,
        name: "Undisclosed processing purposes",
        min_fine: 35,
        max_fine: 746,
    },
    FineExposure {
        check_id: ids::CHECK_USER_RIGHTS,
        name: "Data subject rights not communicated",
        min_fine: 20,
        max_fine: 405,
    },
    FineExposure {
        check_id: ids::CHECK_DATA_CONTROLLER,
        name: "Controller identity not disclosed",
        min_fine: 10,
        max_fine: 225,
    },
    FineExposure {
        check_id: ids::CHECK_DATA_RECIPIENTS,
        name: "Data recipients not disclosed",
        min_fine: 15,
        max_fine: 265,
    },
    FineExposure {
        check_id: ids::CHECK_RETENTION_PERIOD,
        name: "Retention period not specified",
        min_fine: 5,
        max_fine: 60,
    },
    FineExposure {
        check_id: ids::CHECK_AUTOMATED_DECISIONS,
        name: "Automated decision-making not disclosed",
        min_fine: 5,
        max_fine: 30,
    },
    FineExposure {
        check_id: ids::CHECK_COOKIE_POLICY,
        name: "Cookie usage without adequate information",
        min_fine: 60,
        max_fine: 150,
    },
    FineExposure {
        check_id: ids::CHECK_CHILD_PRIVACY,
        name: "Missing child privacy safeguards",
        min_fine: 345,
        max_fine: 405,
    },
];

pub fn fine_for(check_id: &str) -> Option<&'static FineExposure> {
    FINE_TABLE.iter().find(|f| f.check_id == check_id)
}
