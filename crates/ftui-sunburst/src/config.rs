#![forbid(unsafe_code)]

//! Sunburst configuration (deterministic, env-overridable).

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::angles::FULL_TURN;
use crate::order::OrderSpec;

const ENV_SUNBURST_ORDER: &str = "FTUI_SUNBURST_ORDER";
const ENV_SUNBURST_RING_WIDTH: &str = "FTUI_SUNBURST_RING_WIDTH";
const ENV_SUNBURST_PLOT_CENTER: &str = "FTUI_SUNBURST_PLOT_CENTER";
const ENV_SUNBURST_MIN_ANGLE: &str = "FTUI_SUNBURST_MIN_ANGLE";

/// Layout configuration.
///
/// # Environment Variables
/// - `FTUI_SUNBURST_ORDER` = `keep|key|value [reverse]`
/// - `FTUI_SUNBURST_RING_WIDTH` (f64 > 0)
/// - `FTUI_SUNBURST_PLOT_CENTER` (bool)
/// - `FTUI_SUNBURST_MIN_ANGLE` (degrees, 0..=360)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunburstConfig {
    /// Wedge ordering policy.
    pub order: OrderSpec,
    /// Default radial thickness of every ring.
    pub ring_width: f64,
    /// Give the root its own disc in the middle.
    pub plot_center: bool,
    /// Hide wedges whose angular width is not above this (root exempt).
    pub min_angle: f64,
    /// Chart centre for the Cartesian helpers on the output.
    pub origin: (f64, f64),
}

impl Default for SunburstConfig {
    fn default() -> Self {
        Self {
            order: OrderSpec::largest_first(),
            ring_width: 0.4,
            plot_center: false,
            min_angle: 0.0,
            origin: (0.0, 0.0),
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct SunburstConfigParse {
    pub config: SunburstConfig,
    pub errors: Vec<SunburstConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunburstConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl SunburstConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SunburstConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for SunburstConfigError {}

impl SunburstConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> SunburstConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> SunburstConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<SunburstConfigError>> {
        let mut errors = Vec::new();
        if !(self.ring_width.is_finite() && self.ring_width > 0.0) {
            errors.push(SunburstConfigError::new(
                "ring_width",
                self.ring_width.to_string(),
                "must be finite and > 0",
            ));
        }
        if !(self.min_angle.is_finite() && (0.0..=FULL_TURN).contains(&self.min_angle)) {
            errors.push(SunburstConfigError::new(
                "min_angle",
                self.min_angle.to_string(),
                "must be within 0..=360 degrees",
            ));
        }
        if !(self.origin.0.is_finite() && self.origin.1.is_finite()) {
            errors.push(SunburstConfigError::new(
                "origin",
                format!("{:?}", self.origin),
                "must be finite",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Short human-readable summary for debug overlays.
    #[must_use]
    pub fn summary_short(&self) -> String {
        let center = if self.plot_center { "center" } else { "no center" };
        format!(
            "Sunburst: order '{}' · ring {} · {center}",
            self.order, self.ring_width
        )
    }
}

fn from_env_with<F>(mut get: F) -> SunburstConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = SunburstConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_SUNBURST_ORDER) {
        match OrderSpec::parse(&value) {
            Ok(parsed) => config.order = parsed,
            Err(err) => errors.push(SunburstConfigError::new(
                "order",
                value,
                err.to_string(),
            )),
        }
    }

    if let Some(value) = get(ENV_SUNBURST_RING_WIDTH) {
        match parse_f64(&value) {
            Some(parsed) => config.ring_width = parsed,
            None => errors.push(SunburstConfigError::new(
                "ring_width",
                value,
                "expected number",
            )),
        }
    }

    if let Some(value) = get(ENV_SUNBURST_PLOT_CENTER) {
        match parse_bool(&value) {
            Some(parsed) => config.plot_center = parsed,
            None => errors.push(SunburstConfigError::new(
                "plot_center",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Some(value) = get(ENV_SUNBURST_MIN_ANGLE) {
        match parse_f64(&value) {
            Some(parsed) => config.min_angle = parsed,
            None => errors.push(SunburstConfigError::new(
                "min_angle",
                value,
                "expected number of degrees",
            )),
        }
    }

    if let Err(mut validation) = config.validate() {
        // out-of-range values fall back to the default for that field
        let defaults = SunburstConfig::default();
        for error in &validation {
            match error.field {
                "ring_width" => config.ring_width = defaults.ring_width,
                "min_angle" => config.min_angle = defaults.min_angle,
                "origin" => config.origin = defaults.origin,
                _ => {}
            }
        }
        errors.append(&mut validation);
    }

    for error in &errors {
        warn!(field = error.field, value = %error.value, "sunburst config: {}", error.message);
    }

    SunburstConfigParse { config, errors }
}

#[inline]
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[inline]
fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::BaseOrder;
    use std::collections::HashMap;

    #[test]
    fn defaults_are_valid() {
        let config = SunburstConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.order, OrderSpec::largest_first());
        assert_eq!(config.ring_width, 0.4);
        assert!(!config.plot_center);
    }

    #[test]
    fn sunburst_config_env_parsing() {
        let mut env = HashMap::new();
        env.insert(ENV_SUNBURST_ORDER, "key reverse");
        env.insert(ENV_SUNBURST_RING_WIDTH, " 1.5 ");
        env.insert(ENV_SUNBURST_PLOT_CENTER, "yes");
        env.insert(ENV_SUNBURST_MIN_ANGLE, "2");

        let parsed = from_env_with(|key| env.get(key).map(|value| value.to_string()));
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        let config = parsed.config;
        assert_eq!(config.order, OrderSpec::new(Some(BaseOrder::Key), true));
        assert_eq!(config.ring_width, 1.5);
        assert!(config.plot_center);
        assert_eq!(config.min_angle, 2.0);
    }

    #[test]
    fn sunburst_config_invalid_values_reported() {
        let mut env = HashMap::new();
        env.insert(ENV_SUNBURST_ORDER, "key value");
        env.insert(ENV_SUNBURST_PLOT_CENTER, "maybe");
        env.insert(ENV_SUNBURST_RING_WIDTH, "wide");

        let parsed = from_env_with(|key| env.get(key).map(|value| value.to_string()));
        assert!(parsed.errors.iter().any(|err| err.field == "order"));
        assert!(parsed.errors.iter().any(|err| err.field == "plot_center"));
        assert!(parsed.errors.iter().any(|err| err.field == "ring_width"));
        // bad values leave the defaults in place
        assert_eq!(parsed.config.order, OrderSpec::largest_first());
    }

    #[test]
    fn sunburst_config_validation_errors() {
        let mut env = HashMap::new();
        env.insert(ENV_SUNBURST_RING_WIDTH, "0");
        env.insert(ENV_SUNBURST_MIN_ANGLE, "400");

        let parsed = from_env_with(|key| env.get(key).map(|value| value.to_string()));
        assert_eq!(parsed.errors.len(), 2);
        assert!(parsed.errors.iter().all(|err| err.message.starts_with("must")));
        // rejected values do not leak into the returned config
        assert_eq!(parsed.config.ring_width, 0.4);
        assert_eq!(parsed.config.min_angle, 0.0);
        assert!(parsed.config.validate().is_ok());
    }

    #[test]
    fn out_of_range_value_keeps_valid_neighbours() {
        let mut env = HashMap::new();
        env.insert(ENV_SUNBURST_RING_WIDTH, "-2");
        env.insert(ENV_SUNBURST_MIN_ANGLE, "5");

        let parsed = from_env_with(|key| env.get(key).map(|value| value.to_string()));
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].field, "ring_width");
        assert_eq!(parsed.config.ring_width, 0.4);
        assert_eq!(parsed.config.min_angle, 5.0);
    }

    #[test]
    fn serde_fills_missing_fields_with_defaults() {
        let config: SunburstConfig =
            serde_json::from_str(r#"{"order": "key", "plot_center": true}"#).unwrap();
        assert_eq!(config.order.base, Some(BaseOrder::Key));
        assert!(config.plot_center);
        assert_eq!(config.ring_width, 0.4);
    }

    #[test]
    fn summary_mentions_order() {
        let summary = SunburstConfig::default().summary_short();
        assert!(summary.contains("value reverse"));
    }
}
