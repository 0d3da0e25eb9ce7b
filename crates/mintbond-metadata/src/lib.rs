//! # Mintbond Metadata
//!
//! Turns a completed valuation into the artifacts an external consumer
//! needs: an ERC-721-style token metadata document (`name`,
//! `description`, `image`, `attributes`) for a minting collaborator, and
//! a human-readable valuation report.
//!
//! Submission of the document (RPC, transactions, contract calls) is out
//! of scope; this crate ends at serializable values and strings.
//!
//! ## Example
//!
//! ```rust
//! use mintbond_core::prelude::*;
//! use mintbond_metadata::TokenMetadata;
//! use rust_decimal_macros::dec;
//!
//! let spec = BondSpec::annual(dec!(5), dec!(100), 2)?;
//! let observation = MarketObservation::new(dec!(99.9), Date::from_ymd(2025, 6, 15)?)?;
//! let metrics = BondMetrics {
//!     yield_to_maturity: 0.0505,
//!     dv01: -0.00018,
//!     convexity: 0.23,
//!     payment_schedule: vec![
//!         Date::from_ymd(2026, 6, 15)?,
//!         Date::from_ymd(2027, 6, 15)?,
//!     ],
//! };
//!
//! let doc = TokenMetadata::for_bond(&spec, &observation, &metrics);
//! assert_eq!(doc.name, "5% 2 year Bond");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod document;
pub mod error;
pub mod formatting;

pub use document::{Attribute, AttributeValue, TokenMetadata, DEFAULT_IMAGE_URI};
pub use error::{MetadataError, MetadataResult};
pub use formatting::{format_dollars, format_percent, format_valuation_report};
