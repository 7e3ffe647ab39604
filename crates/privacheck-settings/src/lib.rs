//! Config parsing and profile/preset resolution.
//!
//! IO-free: configuration arrives as strings and leaves as an [`EffectiveConfig`].
//!
//! [`EffectiveConfig`]: privacheck_domain::policy::EffectiveConfig

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

use privacheck_types::SCHEMA_CONFIG_V1;

pub use model::PrivacheckConfigV1;
pub use presets::{PROFILES, preset};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `privacheck.toml` (or equivalent) into a typed model.
///
/// `schema` may be omitted; when present it must name this config version.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PrivacheckConfigV1> {
    let cfg: PrivacheckConfigV1 = toml::from_str(input)?;
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unknown config schema: {schema:?} (expected {SCHEMA_CONFIG_V1})");
    }
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile preset, then file, then overrides).
pub fn resolve_config(
    cfg: PrivacheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
