use privacheck_types::Weighting;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub weighting: Weighting,
    /// Scores strictly below this produce a failing verdict.
    pub fail_under: u8,
    pub estimate_risk: bool,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "strict".to_string(),
            weighting: Weighting::Priority,
            fail_under: 80,
            estimate_risk: true,
        }
    }
}
