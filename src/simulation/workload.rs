//! Random conversion workloads.
//!
//! Generates batches of conversion requests for the CLI `simulate`
//! command and the benchmarks.

use crate::core::currency::CurrencyCode;
use crate::core::record::ConversionRecord;
use crate::error::ConversionError;
use crate::rates::source::RateSource;
use crate::service::conversion::ConversionService;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A single conversion to perform.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub origin: CurrencyCode,
    pub target: CurrencyCode,
    pub amount: f64,
}

/// Largest amount a generated request can carry.
pub const MAX_REQUEST_AMOUNT: f64 = 1e12;

/// Smallest amount a generated request can carry: one cent.
pub const MIN_REQUEST_AMOUNT: f64 = 0.01;

/// Configuration for generating a random workload.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Number of requests to generate.
    pub request_count: usize,
    /// Currencies to draw origin and target from.
    pub currencies: Vec<CurrencyCode>,
    /// Minimum request amount.
    pub min_amount: f64,
    /// Maximum request amount.
    pub max_amount: f64,
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            request_count: 100,
            currencies: vec![CurrencyCode::new("USD"), CurrencyCode::new("EUR")],
            min_amount: 1.0,
            max_amount: 10_000.0,
            seed: 0,
        }
    }
}

/// Generate a reproducible batch of requests.
///
/// Origin and target differ whenever more than one currency is configured.
/// Amounts are rounded to cents and always positive. Bounds are clamped to
/// `[MIN_REQUEST_AMOUNT, MAX_REQUEST_AMOUNT]`. A NaN `min_amount` becomes the
/// low end and a NaN `max_amount` the high end. An inverted range collapses
/// onto `min_amount`.
pub fn generate_requests(config: &WorkloadConfig) -> Vec<ConversionRequest> {
    if config.currencies.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.currencies.len();
    let min = clamp_amount(config.min_amount, MIN_REQUEST_AMOUNT);
    let max =
        clamp_amount(config.max_amount, MAX_REQUEST_AMOUNT).max(min + MIN_REQUEST_AMOUNT);

    (0..config.request_count)
        .map(|_| {
            let origin_idx = rng.gen_range(0..n);
            let mut target_idx = rng.gen_range(0..n);
            while n > 1 && target_idx == origin_idx {
                target_idx = rng.gen_range(0..n);
            }
            let amount = (rng.gen_range(min..max) * 100.0).round() / 100.0;

            ConversionRequest {
                origin: config.currencies[origin_idx].clone(),
                target: config.currencies[target_idx].clone(),
                amount: amount.max(MIN_REQUEST_AMOUNT),
            }
        })
        .collect()
}

fn clamp_amount(value: f64, if_nan: f64) -> f64 {
    if value.is_nan() {
        if_nan
    } else {
        value.clamp(MIN_REQUEST_AMOUNT, MAX_REQUEST_AMOUNT)
    }
}

/// Run every request through `service`, collecting per-request outcomes.
pub fn run_requests<R: RateSource>(
    service: &mut ConversionService<R>,
    requests: &[ConversionRequest],
) -> Vec<Result<ConversionRecord, ConversionError>> {
    requests
        .iter()
        .map(|req| service.convert(&req.origin, &req.target, req.amount))
        .collect()
}
