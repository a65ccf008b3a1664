use thiserror::Error;

/// Errors surfaced to callers of the conversion service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Amount must be positive")]
    InvalidAmount { amount: f64 },
    /// Carries the rate source's message unchanged.
    #[error("{0}")]
    UnsupportedCurrencyPair(String),
    #[error("Unauthorized access to audit logs")]
    PermissionDenied,
}
