//! # Mintbond Core
//!
//! Core types and abstractions for the Mintbond bond valuation toolkit.
//!
//! This crate provides the foundational building blocks used throughout
//! Mintbond:
//!
//! - **Types**: Domain-specific types like `Date`, `BondSpec`,
//!   `MarketObservation`, `BondMetrics` and `CashFlow`
//! - **Errors**: Structured validation and date errors
//!
//! ## Design Philosophy
//!
//! - **Validate at Construction**: A `BondSpec` or `MarketObservation` that
//!   exists is economically well-formed
//! - **Exact at the Boundary**: Monetary quantities are `rust_decimal`
//!   values; floating point lives inside the numeric kernels
//!
//! ## Example
//!
//! ```rust
//! use mintbond_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let spec = BondSpec::annual(dec!(5.5), dec!(100), 5).unwrap();
//! assert_eq!(spec.coupon_rate(), dec!(0.055));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        BondMetrics, BondSpec, CashFlow, CashFlowKind, Date, MarketObservation,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{BondMetrics, BondSpec, CashFlow, CashFlowKind, Date, MarketObservation};
