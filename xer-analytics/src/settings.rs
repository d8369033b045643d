//! Assessment thresholds, overridable from a config file or
//! environment the same way the rest of our tooling reads settings.

use serde::Deserialize;

/// Thresholds (percentages and hour limits) driving the pass/warn/
/// fail tiers of the DCMA checks. Defaults follow the standard
/// 14-point guidance; a `xerlens.toml` next to the working directory
/// or `XERLENS_`-prefixed environment variables override them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub leads_warn_pct: f64,
    pub lags_pass_pct: f64,
    pub fs_pass_pct: f64,
    pub fs_warn_pct: f64,
    pub hard_constraint_warn_pct: f64,
    pub high_float_hours: f64,
    pub high_float_pass_pct: f64,
    pub high_float_warn_pct: f64,
    pub high_duration_hours: f64,
    pub high_duration_pass_pct: f64,
    pub high_duration_warn_pct: f64,
    pub resource_pass_pct: f64,
    pub resource_warn_pct: f64,
    pub stalled_pass_pct: f64,
    pub stalled_warn_pct: f64,
    pub critical_min_pct: f64,
    pub critical_max_pct: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            leads_warn_pct: 5.0,
            lags_pass_pct: 10.0,
            fs_pass_pct: 90.0,
            fs_warn_pct: 80.0,
            hard_constraint_warn_pct: 5.0,
            high_float_hours: 168.0,
            high_float_pass_pct: 5.0,
            high_float_warn_pct: 10.0,
            high_duration_hours: 960.0,
            high_duration_pass_pct: 5.0,
            high_duration_warn_pct: 10.0,
            resource_pass_pct: 95.0,
            resource_warn_pct: 80.0,
            stalled_pass_pct: 5.0,
            stalled_warn_pct: 10.0,
            critical_min_pct: 5.0,
            critical_max_pct: 15.0,
        }
    }
}

/// Read thresholds from `xerlens.toml` (optional) layered with
/// `XERLENS_*` environment overrides, e.g. `XERLENS_LEADS_WARN_PCT=3`.
pub fn read_thresholds() -> Result<Thresholds, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("xerlens").required(false))
        .add_source(
            config::Environment::with_prefix("XERLENS")
                .prefix_separator("_")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
