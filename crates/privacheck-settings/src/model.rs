use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `privacheck.toml` schema v1.
///
/// Every field is optional; anything left out comes from the selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PrivacheckConfigV1 {
    /// Optional schema string for tooling (`privacheck.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default), `standard` or `advisory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Score weighting policy: `priority` or `risk`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighting: Option<String>,

    /// Scores below this threshold fail. 0..=100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_under: Option<u8>,

    /// Include the financial risk block in the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_risk: Option<bool>,
}
