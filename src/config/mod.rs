use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Driver configuration. Validation thresholds themselves are compile-time
/// constants and are not configurable here; the config only carries inputs
/// the caller owns, like the quota daily limit.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub quota: QuotaConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuotaConfig {
    /// Daily operation budget that quota snapshots are computed against.
    #[serde(default = "default_daily_limit")]
    pub daily_limit: f64,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            daily_limit: default_daily_limit(),
        }
    }
}

fn default_daily_limit() -> f64 {
    10_000.0
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.quota.daily_limit, 10_000.0);
    }

    #[test]
    fn test_quota_section_overrides_daily_limit() {
        let config: Config = toml::from_str("[quota]\ndaily_limit = 500.0\n").unwrap();
        assert_eq!(config.quota.daily_limit, 500.0);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = Config::load(Path::new("/nonexistent/ads-validator.toml"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[quota\ndaily_limit = 1");
        assert!(result.is_err());
    }
}
