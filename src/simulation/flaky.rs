//! Rate source wrapper that fails at random.
//!
//! Used to exercise the default-rate fallback under load: the CLI
//! `simulate` command and the benchmarks run conversions through it.

use crate::core::currency::CurrencyCode;
use crate::rates::source::{RateError, RateSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

/// Message reported when a simulated outage is injected.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Service unavailable";

/// Wraps a rate source and reports it unavailable with probability
/// `failure_rate`.
///
/// Outages are drawn from a seeded RNG, so a given seed always produces
/// the same sequence of failures.
#[derive(Debug)]
pub struct FlakyRateSource<R> {
    inner: R,
    failure_rate: f64,
    rng: RefCell<StdRng>,
}

impl<R: RateSource> FlakyRateSource<R> {
    /// `failure_rate` is clamped to `[0, 1]`; NaN counts as 0.
    pub fn new(inner: R, failure_rate: f64, seed: u64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            inner,
            failure_rate,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl<R: RateSource> RateSource for FlakyRateSource<R> {
    fn get_rate(&self, origin: &CurrencyCode, target: &CurrencyCode) -> Result<f64, RateError> {
        if self.rng.borrow_mut().gen_bool(self.failure_rate) {
            return Err(RateError::Unavailable(SERVICE_UNAVAILABLE_MESSAGE.into()));
        }
        self.inner.get_rate(origin, target)
    }
}
