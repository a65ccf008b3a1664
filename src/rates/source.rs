use crate::core::currency::CurrencyCode;
use thiserror::Error;

/// Failures a rate source can report.
///
/// The split matters to the conversion service: an unsupported pair is a
/// caller error and propagates, anything else is treated as the source
/// being unavailable and is replaced by the default rate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    #[error("{0}")]
    UnsupportedCurrencyPair(String),
    #[error("rate service unavailable: {0}")]
    Unavailable(String),
}

/// Supplies exchange rates: 1 unit of `origin` = `rate` units of `target`.
///
/// The returned rate is used as-is. Implementations that want to reject
/// non-positive rates must do so themselves.
pub trait RateSource {
    fn get_rate(&self, origin: &CurrencyCode, target: &CurrencyCode) -> Result<f64, RateError>;
}

impl<R: RateSource + ?Sized> RateSource for &R {
    fn get_rate(&self, origin: &CurrencyCode, target: &CurrencyCode) -> Result<f64, RateError> {
        (**self).get_rate(origin, target)
    }
}

impl<R: RateSource + ?Sized> RateSource for Box<R> {
    fn get_rate(&self, origin: &CurrencyCode, target: &CurrencyCode) -> Result<f64, RateError> {
        (**self).get_rate(origin, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl RateSource for Fixed {
        fn get_rate(&self, _: &CurrencyCode, _: &CurrencyCode) -> Result<f64, RateError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_unsupported_pair_message_is_verbatim() {
        let err = RateError::UnsupportedCurrencyPair("Unsupported currency code".into());
        assert_eq!(err.to_string(), "Unsupported currency code");
    }

    fn rate_via<R: RateSource>(
        source: R,
        origin: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<f64, RateError> {
        source.get_rate(origin, target)
    }

    #[test]
    fn test_blanket_impls_delegate() {
        let usd = CurrencyCode::new("USD");
        let eur = CurrencyCode::new("EUR");
        let fixed = Fixed(0.9);
        let boxed: Box<dyn RateSource> = Box::new(Fixed(0.8));

        assert_eq!(rate_via(&fixed, &usd, &eur), Ok(0.9));
        assert_eq!(rate_via(boxed, &usd, &eur), Ok(0.8));
    }
}
