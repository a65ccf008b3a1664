use crate::core::currency::{CurrencyCode, CurrencyPair};
use crate::rates::source::{RateError, RateSource};
use std::collections::HashMap;
use thiserror::Error;

/// Message reported for pairs the table has no rate for.
pub const UNSUPPORTED_CURRENCY_MESSAGE: &str = "Unsupported currency code";

/// Errors arising from populating a rate table.
#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("FX rate must be positive, got {rate} for {pair}")]
    InvalidRate { pair: CurrencyPair, rate: f64 },
}

/// In-memory rate source backed by a fixed table.
///
/// Stores direct rates and derives the inverse. Pairs that were never set
/// are reported as unsupported.
///
/// # Examples
///
/// ```
/// use currency_converter::core::currency::CurrencyCode;
/// use currency_converter::rates::source::RateSource;
/// use currency_converter::rates::table::StaticRateTable;
///
/// let mut rates = StaticRateTable::new();
/// rates.set_rate(CurrencyCode::new("USD"), CurrencyCode::new("EUR"), 0.5).unwrap();
///
/// let rate = rates
///     .get_rate(&CurrencyCode::new("EUR"), &CurrencyCode::new("USD"))
///     .unwrap();
/// assert_eq!(rate, 2.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticRateTable {
    /// (origin, target) -> rate.
    rates: HashMap<(CurrencyCode, CurrencyCode), f64>,
}

impl StaticRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a direct exchange rate: 1 unit of `origin` = `rate` units of `target`.
    pub fn set_rate(
        &mut self,
        origin: CurrencyCode,
        target: CurrencyCode,
        rate: f64,
    ) -> Result<(), RateTableError> {
        let pair = CurrencyPair::new(origin, target);
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RateTableError::InvalidRate { pair, rate });
        }
        let inverse = pair.inverse();
        self.rates.insert((inverse.origin, inverse.target), 1.0 / rate);
        self.rates.insert((pair.origin, pair.target), rate);
        Ok(())
    }

    /// Number of stored directions, inverses included.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// All currencies that appear in at least one stored pair, sorted.
    pub fn currencies(&self) -> Vec<CurrencyCode> {
        let mut currencies: Vec<CurrencyCode> = self
            .rates
            .keys()
            .flat_map(|(o, t)| [o.clone(), t.clone()])
            .collect();
        currencies.sort();
        currencies.dedup();
        currencies
    }
}

impl RateSource for StaticRateTable {
    fn get_rate(&self, origin: &CurrencyCode, target: &CurrencyCode) -> Result<f64, RateError> {
        if origin == target {
            return Ok(1.0);
        }
        self.rates
            .get(&(origin.clone(), target.clone()))
            .copied()
            .ok_or_else(|| RateError::UnsupportedCurrencyPair(UNSUPPORTED_CURRENCY_MESSAGE.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn usd() -> CurrencyCode {
        CurrencyCode::new("USD")
    }

    fn brl() -> CurrencyCode {
        CurrencyCode::new("BRL")
    }

    #[test]
    fn test_rate_table_direct() {
        let mut table = StaticRateTable::new();
        table.set_rate(brl(), usd(), 0.20).unwrap();
        assert_eq!(table.get_rate(&brl(), &usd()).unwrap(), 0.20);
    }

    #[test]
    fn test_rate_table_inverse() {
        let mut table = StaticRateTable::new();
        table.set_rate(brl(), usd(), 0.20).unwrap();
        assert_relative_eq!(table.get_rate(&usd(), &brl()).unwrap(), 5.0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.currencies(), vec![brl(), usd()]);
    }

    #[test]
    fn test_same_currency_rate() {
        let table = StaticRateTable::new();
        assert_eq!(table.get_rate(&usd(), &usd()).unwrap(), 1.0);
    }

    #[test]
    fn test_unknown_pair_is_unsupported() {
        let table = StaticRateTable::new();
        let err = table
            .get_rate(&CurrencyCode::new("INVALID"), &CurrencyCode::new("EUR"))
            .unwrap_err();
        assert_eq!(
            err,
            RateError::UnsupportedCurrencyPair(UNSUPPORTED_CURRENCY_MESSAGE.into())
        );
    }

    #[test]
    fn test_invalid_rate() {
        let mut table = StaticRateTable::new();
        assert!(table.set_rate(brl(), usd(), -0.5).is_err());
        assert!(table.set_rate(brl(), usd(), 0.0).is_err());
        assert!(table.set_rate(brl(), usd(), f64::NAN).is_err());
        assert!(table.is_empty());
    }
}
