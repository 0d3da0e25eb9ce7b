//! Market quote sources.
//!
//! The engine never generates prices; they arrive through the
//! [`QuoteSource`] seam. [`UniformBandQuotes`] is the simulated feed
//! used in demos and tests, [`FixedQuote`] replays a known observation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use mintbond_core::types::{Date, MarketObservation};

use crate::error::{ValuationError, ValuationResult};

/// A source of market price observations.
///
/// Implementations may be stateful (a simulator advancing its RNG, a
/// feed draining a buffer), hence `&mut self`.
pub trait QuoteSource {
    /// Returns the next market observation.
    fn quote(&mut self) -> ValuationResult<MarketObservation>;
}

/// Default lower bound of the simulated price band.
pub const DEFAULT_BAND_LOW: f64 = 99.80;

/// Default upper bound of the simulated price band.
pub const DEFAULT_BAND_HIGH: f64 = 100.00;

/// Simulated quote source sampling uniformly within a price band.
///
/// Prices are rounded to two decimal places, the quoting convention of
/// the simulated feed. Seedable for deterministic tests.
///
/// # Example
///
/// ```rust
/// use mintbond_core::types::Date;
/// use mintbond_valuation::{QuoteSource, UniformBandQuotes};
///
/// let mut source = UniformBandQuotes::new(Date::from_ymd(2025, 6, 15).unwrap())
///     .with_seed(42);
/// let observation = source.quote().unwrap();
/// assert!(observation.price() >= rust_decimal::Decimal::new(9980, 2));
/// ```
#[derive(Debug)]
pub struct UniformBandQuotes {
    rng: StdRng,
    low: f64,
    high: f64,
    observed_on: Date,
}

impl UniformBandQuotes {
    /// Creates a simulator quoting on the given date with the default
    /// band.
    #[must_use]
    pub fn new(observed_on: Date) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            low: DEFAULT_BAND_LOW,
            high: DEFAULT_BAND_HIGH,
            observed_on,
        }
    }

    /// Sets the price band to sample from.
    #[must_use]
    pub fn with_band(mut self, low: f64, high: f64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Seeds the underlying RNG for deterministic output.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl QuoteSource for UniformBandQuotes {
    fn quote(&mut self) -> ValuationResult<MarketObservation> {
        if !(self.low > 0.0 && self.low <= self.high) {
            return Err(ValuationError::invalid_input(format!(
                "price band must satisfy 0 < low <= high, got [{}, {}]",
                self.low, self.high
            )));
        }

        let sampled: f64 = self.rng.gen_range(self.low..=self.high);
        let price = Decimal::from_f64_retain(sampled)
            .ok_or_else(|| {
                ValuationError::invalid_input(format!("sampled price {sampled} is not finite"))
            })?
            .round_dp(2);

        Ok(MarketObservation::new(price, self.observed_on)?)
    }
}

/// Quote source replaying a single fixed observation.
///
/// Useful as a test double or when the price comes from outside the
/// process entirely.
#[derive(Debug, Clone, Copy)]
pub struct FixedQuote {
    observation: MarketObservation,
}

impl FixedQuote {
    /// Creates a source that always returns `observation`.
    #[must_use]
    pub fn new(observation: MarketObservation) -> Self {
        Self { observation }
    }
}

impl QuoteSource for FixedQuote {
    fn quote(&mut self) -> ValuationResult<MarketObservation> {
        Ok(self.observation)
    }
}
