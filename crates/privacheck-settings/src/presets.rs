use privacheck_domain::policy::EffectiveConfig;
use privacheck_types::Weighting;

/// Profile names accepted by [`preset`].
pub const PROFILES: &[&str] = &["strict", "standard", "advisory"];

/// Preset profiles differ only in how low a score may go before the verdict fails.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "standard" => profile_with("standard", 60),
        "advisory" => profile_with("advisory", 0),
        // default
        _ => profile_with("strict", 80),
    }
}

fn profile_with(name: &str, fail_under: u8) -> EffectiveConfig {
    EffectiveConfig {
        profile: name.to_string(),
        weighting: Weighting::Priority,
        fail_under,
        estimate_risk: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_set_thresholds() {
        assert_eq!(preset("strict").fail_under, 80);
        assert_eq!(preset("standard").fail_under, 60);
        assert_eq!(preset("advisory").fail_under, 0);
        for name in PROFILES {
            assert_eq!(preset(name).profile, *name);
            assert_eq!(preset(name).weighting, Weighting::Priority);
        }
    }

    #[test]
    fn unknown_profile_is_strict() {
        assert_eq!(preset("paranoid"), preset("strict"));
    }

    #[test]
    fn strict_matches_engine_default() {
        assert_eq!(preset("strict"), EffectiveConfig::default());
    }
}
