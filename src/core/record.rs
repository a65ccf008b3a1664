use crate::core::currency::CurrencyCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Where the exchange rate of a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateOrigin {
    /// Returned by the rate source.
    Source,
    /// The service's default rate, used because the source was unavailable.
    Fallback,
}

/// One completed currency conversion.
///
/// Records are immutable once created: every field is private and only
/// exposed through accessors. The timestamp is captured at construction.
///
/// # Examples
///
/// ```
/// use currency_converter::core::currency::CurrencyCode;
/// use currency_converter::core::record::{ConversionRecord, RateOrigin};
///
/// let record = ConversionRecord::new(
///     CurrencyCode::new("USD"),
///     CurrencyCode::new("EUR"),
///     50.0,
///     0.5,
///     RateOrigin::Source,
/// );
///
/// assert_eq!(record.converted_amount(), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Unique identifier for this conversion.
    id: Uuid,
    origin_currency: CurrencyCode,
    target_currency: CurrencyCode,
    /// Amount in the origin currency. Positive.
    original_amount: f64,
    exchange_rate: f64,
    /// `original_amount * exchange_rate`, unrounded.
    converted_amount: f64,
    rate_origin: RateOrigin,
    timestamp: DateTime<Utc>,
}

impl ConversionRecord {
    /// Build a record, computing the converted amount from `amount` and `rate`.
    ///
    /// Amount validation happens in the service before a record is built.
    pub fn new(
        origin_currency: CurrencyCode,
        target_currency: CurrencyCode,
        original_amount: f64,
        exchange_rate: f64,
        rate_origin: RateOrigin,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin_currency,
            target_currency,
            original_amount,
            exchange_rate,
            converted_amount: original_amount * exchange_rate,
            rate_origin,
            timestamp: Utc::now(),
        }
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn origin_currency(&self) -> &CurrencyCode {
        &self.origin_currency
    }

    pub fn target_currency(&self) -> &CurrencyCode {
        &self.target_currency
    }

    pub fn original_amount(&self) -> f64 {
        self.original_amount
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    pub fn converted_amount(&self) -> f64 {
        self.converted_amount
    }

    pub fn rate_origin(&self) -> RateOrigin {
        self.rate_origin
    }

    pub fn used_fallback(&self) -> bool {
        self.rate_origin == RateOrigin::Fallback
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} -> {} {} @ {}",
            self.timestamp.to_rfc3339(),
            self.original_amount,
            self.origin_currency,
            self.converted_amount,
            self.target_currency,
            self.exchange_rate,
        )?;
        if self.used_fallback() {
            write!(f, " (default rate)")?;
        }
        Ok(())
    }
}
