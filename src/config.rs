//! Environment-driven settings for boundary reconciliation and shape migration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use tracing::{info, warn};

use crate::consts::{DEFAULT_CORNER_TOLERANCE, ENV_CIRCLE_FIT, ENV_CORNER_TOLERANCE};
use crate::geometry::CircleFit;

/// Settings shared by the ingress and migration paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Allowed drift between a nested box's corners and its stored size
    /// before [`crate::bbox::to_canonical`] logs a warning.
    pub corner_tolerance: f64,
    /// How legacy rectangles are approximated when treated as circles.
    pub circle_fit: CircleFit,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            corner_tolerance: DEFAULT_CORNER_TOLERANCE,
            circle_fit: CircleFit::default(),
        }
    }
}

impl GeometryConfig {
    /// Read overrides from `HOTSPOT_CORNER_TOLERANCE` and `HOTSPOT_CIRCLE_FIT`,
    /// falling back to defaults for missing or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            corner_tolerance: env_parse(ENV_CORNER_TOLERANCE, DEFAULT_CORNER_TOLERANCE),
            circle_fit: env_parse(ENV_CIRCLE_FIT, CircleFit::default()),
        };
        info!(
            corner_tolerance = config.corner_tolerance,
            circle_fit = %config.circle_fit,
            "geometry config loaded"
        );
        config
    }
}

/// Parse `key` from the environment, or return `default`.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable env override");
            default
        }
    }
}
