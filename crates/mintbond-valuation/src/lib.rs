//! # Mintbond Valuation
//!
//! The bond valuation engine: given a bond specification and an observed
//! market price, solves for yield to maturity and derives DV01, convexity
//! and the scheduled payment dates.
//!
//! - **Pricing**: present value of annual cash flows under a flat yield
//! - **YTM**: Newton-Raphson solve seeded with the coupon rate, bounded
//!   by an iteration cap
//! - **Risk**: finite-difference DV01 (±1bp) and convexity (±2bp)
//! - **Schedule**: anniversary payment dates, leap days clamped
//! - **Market**: a quote-source seam with a uniform-band simulator
//!
//! ## Usage
//!
//! ```rust
//! use mintbond_core::prelude::*;
//! use mintbond_valuation::BondValuationEngine;
//! use rust_decimal_macros::dec;
//!
//! let spec = BondSpec::annual(dec!(5), dec!(100), 5).unwrap();
//! let observation = MarketObservation::new(
//!     dec!(100),
//!     Date::from_ymd(2025, 6, 15).unwrap(),
//! ).unwrap();
//!
//! let valuation = BondValuationEngine::new().evaluate(&spec, &observation).unwrap();
//! assert!((valuation.metrics.yield_to_maturity - 0.05).abs() < 1e-9);
//! ```
//!
//! All operations are synchronous and free of shared mutable state; the
//! engine can be called concurrently from independent threads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)]

pub mod engine;
pub mod error;
pub mod market;
pub mod pricing;
pub mod risk;
pub mod schedule;
pub mod ytm;

pub use engine::{BondValuationEngine, Valuation};
pub use error::{ValuationError, ValuationResult};
pub use market::{FixedQuote, QuoteSource, UniformBandQuotes};
pub use pricing::{price_at_yield, price_derivative_at_yield};
pub use risk::{compute_metrics, RiskMetrics, BASIS_POINT};
pub use schedule::{payment_schedule, scheduled_cash_flows};
pub use ytm::{YtmResult, YtmSolver};
