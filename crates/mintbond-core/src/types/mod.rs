//! Core domain types for bond valuation.

mod bond;
mod cashflow;
mod date;
mod market;
mod metrics;

pub use bond::BondSpec;
pub use cashflow::{CashFlow, CashFlowKind};
pub use date::Date;
pub use market::MarketObservation;
pub use metrics::BondMetrics;
