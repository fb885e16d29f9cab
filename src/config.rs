//! Run configuration for the binaries
//!
//! Defaults can be overridden through environment variables:
//!   DISCOUNT_RATE   - discount rate as a decimal (e.g. 0.035)
//!   APPRAISAL_JSON  - "1"/"true" to emit JSON instead of tables

use std::env;

/// Default discount rate (3.5%)
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.035;

pub const DISCOUNT_RATE_VAR: &str = "DISCOUNT_RATE";
pub const JSON_OUTPUT_VAR: &str = "APPRAISAL_JSON";

/// Configuration shared by the CLI and the Lambda handler
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Discount rate used when the caller does not supply one
    pub discount_rate: f64,

    /// Emit JSON rather than human-readable tables
    pub json_output: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            discount_rate: DEFAULT_DISCOUNT_RATE,
            json_output: false,
        }
    }
}

impl RunConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let discount_rate = match lookup(DISCOUNT_RATE_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "Ignoring unparseable {}={:?}, using {}",
                    DISCOUNT_RATE_VAR,
                    raw,
                    defaults.discount_rate
                );
                defaults.discount_rate
            }),
            None => defaults.discount_rate,
        };

        let json_output = match lookup(JSON_OUTPUT_VAR) {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    log::warn!("Ignoring unrecognised {}={:?}", JSON_OUTPUT_VAR, raw);
                    defaults.json_output
                }
            },
            None => defaults.json_output,
        };

        Self {
            discount_rate,
            json_output,
        }
    }

    /// Apply explicit overrides (e.g. from command-line flags)
    pub fn with_overrides(mut self, discount_rate: Option<f64>, json_output: bool) -> Self {
        if let Some(rate) = discount_rate {
            self.discount_rate = rate;
        }
        self.json_output |= json_output;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::from_lookup(|_| None);
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.discount_rate, DEFAULT_DISCOUNT_RATE);
        assert!(!config.json_output);
    }

    #[test]
    fn test_env_values() {
        let config = RunConfig::from_lookup(lookup_from(&[
            (DISCOUNT_RATE_VAR, " 0.05 "),
            (JSON_OUTPUT_VAR, "true"),
        ]));
        assert_eq!(config.discount_rate, 0.05);
        assert!(config.json_output);
    }

    #[test]
    fn test_unparseable_falls_back() {
        let config = RunConfig::from_lookup(lookup_from(&[
            (DISCOUNT_RATE_VAR, "five percent"),
            (JSON_OUTPUT_VAR, "maybe"),
        ]));
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = RunConfig::default().with_overrides(Some(0.0), true);
        assert_eq!(config.discount_rate, 0.0);
        assert!(config.json_output);

        let unchanged = RunConfig::default().with_overrides(None, false);
        assert_eq!(unchanged, RunConfig::default());
    }
}
