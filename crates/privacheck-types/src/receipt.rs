use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifiers.
pub const SCHEMA_REPORT_V1: &str = "privacheck.report.v1";
pub const SCHEMA_CONFIG_V1: &str = "privacheck.config.v1";

/// Outcome of a single check.
///
/// Deserialization rejects anything outside these three values: a report with an
/// unrecognized status cannot be scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Fail => "fail",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Display grouping for a check. Assigned by the catalog, never derived from the id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cookies,
    Trackers,
    Consent,
    Security,
    Policy,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Cookies,
        Category::Trackers,
        Category::Consent,
        Category::Security,
        Category::Policy,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Cookies => "Cookies",
            Category::Trackers => "Trackers",
            Category::Consent => "Consent",
            Category::Security => "Security",
            Category::Policy => "Privacy Policy",
            Category::Other => "Other",
        }
    }
}

/// Regulatory pointer attached to a check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Citation {
    /// Article label, e.g. `GDPR Art. 13(1)(a)`.
    pub article: String,
    pub url: String,
    pub explanation: String,
}

/// The unit of evaluation output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Check {
    pub id: String,
    pub title: String,
    pub status: Status,
    pub priority: Priority,
    pub category: Category,
    pub description: String,

    /// Actionable remediation. Always serialized so consumers see an explicit `null`.
    pub fix: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<Citation>,
}

/// One unmet requirement with an attributable fine range (millions of euros).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub check_id: String,
    pub name: String,
    pub min_fine: u64,
    pub max_fine: u64,
    pub citation_label: String,
}

/// Aggregated fine exposure. An empty `violations` list means no exposure was found.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FinancialRisk {
    pub violations: Vec<Violation>,
    pub min_exposure: u64,
    pub max_exposure: u64,
    pub average_exposure: u64,
}

impl FinancialRisk {
    pub fn has_exposure(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Weighting policy used to turn checks into a score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// high = 3, medium = 2, low = 1.
    #[default]
    Priority,
    /// Per-check weights reflecting historical fine severity.
    Risk,
}

impl Weighting {
    pub fn as_str(self) -> &'static str {
        match self {
            Weighting::Priority => "priority",
            Weighting::Risk => "risk",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Warn => "warn",
            Verdict::Fail => "fail",
        }
    }
}

/// Coarse banding of the score: good >= 80, fair >= 60, poor otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Good,
    Fair,
    Poor,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::Good => "good",
            Grade::Fair => "fair",
            Grade::Poor => "poor",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckCounts {
    pub pass: u32,
    pub warn: u32,
    pub fail: u32,
}

impl CheckCounts {
    pub fn from_checks(checks: &[Check]) -> Self {
        let mut counts = CheckCounts::default();
        for c in checks {
            match c.status {
                Status::Pass => counts.pass += 1,
                Status::Warn => counts.warn += 1,
                Status::Fail => counts.fail += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Privacheck-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct PrivacheckData {
    pub profile: String,
    pub fail_under: u8,

    /// Hex SHA-256 of the evaluated text, for dedup and trending.
    pub input_sha256: String,
    pub word_count: u32,
    pub checks_total: u32,
}

/// A generic report envelope.
///
/// Keeping this generic allows tool-specific data while still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = PrivacheckData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub grade: Grade,
    pub score: u8,
    pub weighting: Weighting,
    pub counts: CheckCounts,
    pub checks: Vec<Check>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_risk: Option<FinancialRisk>,
    pub data: TData,
}

pub type PrivacheckReport = ReportEnvelope<PrivacheckData>;
