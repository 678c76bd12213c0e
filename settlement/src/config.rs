//! Configuration for the settlement engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::planner::DEFAULT_TOLERANCE;

/// Settlement engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Balances within this of zero are treated as settled (default: one cent)
    pub tolerance: Decimal,

    /// Allowed gap between an expense amount and the sum of its shares
    /// (default: one cent)
    pub share_tolerance: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            share_tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(value) = std::env::var("SPLITFAIR_TOLERANCE") {
            config.tolerance = value
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid SPLITFAIR_TOLERANCE: {}", e)))?;
        }

        if let Ok(value) = std::env::var("SPLITFAIR_SHARE_TOLERANCE") {
            config.share_tolerance = value.parse().map_err(|e| {
                crate::Error::Config(format!("Invalid SPLITFAIR_SHARE_TOLERANCE: {}", e))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> crate::Result<()> {
        if self.tolerance <= Decimal::ZERO {
            return Err(crate::Error::Config(format!(
                "tolerance must be positive: {}",
                self.tolerance
            )));
        }

        if self.share_tolerance < Decimal::ZERO {
            return Err(crate::Error::Config(format!(
                "share_tolerance cannot be negative: {}",
                self.share_tolerance
            )));
        }

        Ok(())
    }
}
