//! Service configuration loaded from JSON.
//!
//! ```json
//! {
//!   "default_rate": 1.1,
//!   "rates": [
//!     { "from": "USD", "to": "EUR", "rate": 0.5 }
//!   ]
//! }
//! ```

use crate::core::currency::CurrencyCode;
use crate::rates::table::{RateTableError, StaticRateTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Rate substituted when the rate source is unavailable.
pub const DEFAULT_EXCHANGE_RATE: f64 = 1.1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("default rate must be a positive number, got {0}")]
    InvalidDefaultRate(f64),
    #[error(transparent)]
    RateTable(#[from] RateTableError),
}

/// One configured direct rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_rate")]
    pub default_rate: f64,
    #[serde(default)]
    pub rates: Vec<RateEntry>,
}

fn default_rate() -> f64 {
    DEFAULT_EXCHANGE_RATE
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_rate: DEFAULT_EXCHANGE_RATE,
            rates: Vec::new(),
        }
    }
}

impl ServiceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_rate.is_finite() || self.default_rate <= 0.0 {
            return Err(ConfigError::InvalidDefaultRate(self.default_rate));
        }
        Ok(())
    }

    /// Build a rate table holding every configured entry.
    pub fn rate_table(&self) -> Result<StaticRateTable, ConfigError> {
        let mut table = StaticRateTable::new();
        for entry in &self.rates {
            table.set_rate(entry.from.clone(), entry.to.clone(), entry.rate)?;
        }
        Ok(table)
    }
}
