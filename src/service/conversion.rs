use crate::config::ServiceConfig;
use crate::core::audit_log::AuditLog;
use crate::core::currency::CurrencyCode;
use crate::core::record::{ConversionRecord, RateOrigin};
use crate::error::ConversionError;
use crate::rates::source::{RateError, RateSource};

/// Converts amounts between currencies and keeps an audit log of every
/// successful conversion.
///
/// # Algorithm
///
/// 1. Reject amounts that are not strictly positive.
/// 2. Ask the rate source for the rate.
/// 3. Unsupported pair: propagate. Unavailable source: use the default rate.
/// 4. `converted = amount * rate`, unrounded.
/// 5. Append the record to the audit log and return it.
///
/// Failed conversions never touch the log.
///
/// # Examples
///
/// ```
/// use currency_converter::core::currency::CurrencyCode;
/// use currency_converter::rates::table::StaticRateTable;
/// use currency_converter::service::conversion::ConversionService;
///
/// let mut rates = StaticRateTable::new();
/// rates.set_rate(CurrencyCode::new("USD"), CurrencyCode::new("EUR"), 0.5).unwrap();
///
/// let mut service = ConversionService::new(rates, 1.1);
/// let record = service
///     .convert(&CurrencyCode::new("USD"), &CurrencyCode::new("EUR"), 50.0)
///     .unwrap();
///
/// assert_eq!(record.converted_amount(), 25.0);
/// assert_eq!(service.audit_logs().len(), 1);
/// ```
#[derive(Debug)]
pub struct ConversionService<R> {
    rate_source: R,
    default_rate: f64,
    audit_log: AuditLog,
}

impl<R: RateSource> ConversionService<R> {
    /// Create a service over `rate_source`, falling back to `default_rate`.
    ///
    /// The default rate is taken as given; [`ServiceConfig`] is where it is
    /// validated.
    pub fn new(rate_source: R, default_rate: f64) -> Self {
        log::info!("conversion service ready, default rate {}", default_rate);
        Self {
            rate_source,
            default_rate,
            audit_log: AuditLog::new(),
        }
    }

    pub fn from_config(rate_source: R, config: &ServiceConfig) -> Self {
        Self::new(rate_source, config.default_rate)
    }

    /// Convert `amount` of `origin` into `target`.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::InvalidAmount`] if `amount` is zero, negative or NaN.
    /// - [`ConversionError::UnsupportedCurrencyPair`] if the rate source
    ///   rejects the pair.
    pub fn convert(
        &mut self,
        origin: &CurrencyCode,
        target: &CurrencyCode,
        amount: f64,
    ) -> Result<ConversionRecord, ConversionError> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(ConversionError::InvalidAmount { amount });
        }

        let (rate, rate_origin) = match self.rate_source.get_rate(origin, target) {
            Ok(rate) => (rate, RateOrigin::Source),
            Err(RateError::UnsupportedCurrencyPair(message)) => {
                return Err(ConversionError::UnsupportedCurrencyPair(message));
            }
            Err(err @ RateError::Unavailable(_)) => {
                log::warn!(
                    "{} for {} -> {}, using default rate {}",
                    err,
                    origin,
                    target,
                    self.default_rate
                );
                (self.default_rate, RateOrigin::Fallback)
            }
        };

        let record = ConversionRecord::new(
            origin.clone(),
            target.clone(),
            amount,
            rate,
            rate_origin,
        );
        self.audit_log.append(record.clone());
        Ok(record)
    }

    /// Every successful conversion so far, oldest first.
    pub fn audit_logs(&self) -> &AuditLog {
        &self.audit_log
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }

    pub fn rate_source(&self) -> &R {
        &self.rate_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::table::StaticRateTable;
    use approx::assert_abs_diff_eq;
    use std::cell::Cell;

    /// Scripted rate source that counts how often it is asked.
    struct Scripted {
        result: Result<f64, RateError>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(result: Result<f64, RateError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl RateSource for Scripted {
        fn get_rate(&self, _: &CurrencyCode, _: &CurrencyCode) -> Result<f64, RateError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn usd() -> CurrencyCode {
        CurrencyCode::new("USD")
    }

    fn eur() -> CurrencyCode {
        CurrencyCode::new("EUR")
    }

    #[test]
    fn test_valid_conversion() {
        let mut service = ConversionService::new(Scripted::new(Ok(0.5)), 1.1);
        let record = service.convert(&usd(), &eur(), 50.0).unwrap();

        assert_abs_diff_eq!(record.converted_amount(), 25.0, epsilon = 0.002);
        assert_eq!(record.origin_currency(), &usd());
        assert_eq!(record.target_currency(), &eur());
        assert_eq!(record.original_amount(), 50.0);
        assert_eq!(record.exchange_rate(), 0.5);
        assert_eq!(record.rate_origin(), RateOrigin::Source);
        assert!(service.audit_logs().contains(&record));
    }

    #[test]
    fn test_invalid_amount_skips_rate_source() {
        let mut service = ConversionService::new(Scripted::new(Ok(0.5)), 1.1);
        for amount in [-100.0, 0.0, f64::NAN] {
            let err = service.convert(&usd(), &eur(), amount).unwrap_err();
            assert_eq!(err.to_string(), "Amount must be positive");
        }
        assert!(service.audit_logs().is_empty());
        assert_eq!(service.rate_source().calls.get(), 0);
    }

    #[test]
    fn test_unsupported_pair_propagates() {
        let mut service = ConversionService::new(
            Scripted::new(Err(RateError::UnsupportedCurrencyPair(
                "Unsupported currency code".into(),
            ))),
            1.1,
        );
        let err = service
            .convert(&CurrencyCode::new("INVALID"), &eur(), 100.0)
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedCurrencyPair("Unsupported currency code".into())
        );
        assert!(service.audit_logs().is_empty());
    }

    #[test]
    fn test_unavailable_source_uses_default_rate() {
        let mut service = ConversionService::new(
            Scripted::new(Err(RateError::Unavailable("Service unavailable".into()))),
            1.1,
        );
        let record = service.convert(&usd(), &eur(), 100.0).unwrap();

        assert_abs_diff_eq!(record.converted_amount(), 110.0, epsilon = 0.01);
        assert_eq!(record.exchange_rate(), 1.1);
        assert!(record.used_fallback());
        assert_eq!(service.audit_logs().len(), 1);
    }

    #[test]
    fn test_returned_rate_is_not_validated() {
        let mut service = ConversionService::new(Scripted::new(Ok(-2.0)), 1.1);
        let record = service.convert(&usd(), &eur(), 10.0).unwrap();
        assert_eq!(record.converted_amount(), -20.0);

        let mut service = ConversionService::new(Scripted::new(Ok(0.0)), 1.1);
        let record = service.convert(&usd(), &eur(), 10.0).unwrap();
        assert_eq!(record.converted_amount(), 0.0);
    }

    #[test]
    fn test_from_config_with_rate_table() {
        let config = ServiceConfig {
            default_rate: 1.3,
            ..Default::default()
        };
        let mut service = ConversionService::from_config(StaticRateTable::new(), &config);
        assert_eq!(service.default_rate(), 1.3);
        assert!(service.convert(&usd(), &eur(), 1.0).is_err());
        assert_eq!(service.convert(&usd(), &usd(), 7.0).unwrap().converted_amount(), 7.0);
    }
}
