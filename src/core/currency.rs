use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217-style currency code.
///
/// Codes are taken as supplied. Nothing checks them against a real
/// currency list; deciding whether a pair is supported is the job of the
/// rate source.
///
/// # Examples
///
/// ```
/// use currency_converter::core::currency::CurrencyCode;
///
/// let usd = CurrencyCode::new("USD");
/// let eur = CurrencyCode::new("EUR");
/// assert_ne!(usd, eur);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Direction of a conversion: from `origin` into `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub origin: CurrencyCode,
    pub target: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(origin: CurrencyCode, target: CurrencyCode) -> Self {
        Self { origin, target }
    }

    /// The same pair quoted the other way round.
    pub fn inverse(&self) -> Self {
        Self {
            origin: self.target.clone(),
            target: self.origin.clone(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.origin, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_equality() {
        let a = CurrencyCode::new("USD");
        let b = CurrencyCode::from("USD");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "USD");
    }

    #[test]
    fn test_pair_display_and_inverse() {
        let pair = CurrencyPair::new(CurrencyCode::new("USD"), CurrencyCode::new("EUR"));
        assert_eq!(pair.to_string(), "USD/EUR");
        assert_eq!(pair.inverse().to_string(), "EUR/USD");
        assert_eq!(pair.inverse().inverse(), pair);
    }

    #[test]
    fn test_code_serializes_transparently() {
        let json = serde_json::to_string(&CurrencyCode::new("BRL")).unwrap();
        assert_eq!(json, "\"BRL\"");
    }
}
