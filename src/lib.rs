//! # currency-converter
//!
//! Currency conversion against a pluggable rate source, with a
//! default-rate fallback and an append-only audit log.
//!
//! A [`ConversionService`](service::conversion::ConversionService) asks its
//! [`RateSource`](rates::source::RateSource) for a rate. An unsupported pair
//! is reported to the caller. An unavailable source is replaced by the
//! configured default rate. Every successful conversion is recorded.
//!
//! ## Architecture
//!
//! - **core**: Foundational types: currency codes, conversion records, audit log
//! - **rates**: The rate source trait and an in-memory rate table
//! - **service**: The conversion service and the audit-log access stub
//! - **simulation**: Flaky rate sources and random workloads
//! - **config**: JSON service configuration
//! - **error**: Errors surfaced to callers

pub mod config;
pub mod core;
pub mod error;
pub mod rates;
pub mod service;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{ServiceConfig, DEFAULT_EXCHANGE_RATE};
    pub use crate::core::audit_log::AuditLog;
    pub use crate::core::currency::{CurrencyCode, CurrencyPair};
    pub use crate::core::record::{ConversionRecord, RateOrigin};
    pub use crate::error::ConversionError;
    pub use crate::rates::source::{RateError, RateSource};
    pub use crate::rates::table::StaticRateTable;
    pub use crate::service::conversion::ConversionService;
}
