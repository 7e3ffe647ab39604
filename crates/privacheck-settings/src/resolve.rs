use crate::{model::PrivacheckConfigV1, presets};
use anyhow::Context;
use privacheck_domain::parse_weighting;
use privacheck_domain::policy::EffectiveConfig;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub weighting: Option<String>,
    pub fail_under: Option<u8>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: PrivacheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(w) = overrides.weighting.as_deref().or(cfg.weighting.as_deref()) {
        effective.weighting = parse_weighting(w).context("invalid weighting")?;
    }

    if let Some(threshold) = overrides.fail_under.or(cfg.fail_under) {
        if threshold > 100 {
            anyhow::bail!("fail_under must be between 0 and 100, got {threshold}");
        }
        effective.fail_under = threshold;
    }

    if let Some(estimate) = cfg.estimate_risk {
        effective.estimate_risk = estimate;
    }

    Ok(ResolvedConfig { effective })
}
