//! # Mintbond Math
//!
//! Root-finding utilities for the Mintbond bond valuation toolkit.
//!
//! This crate provides the Newton-Raphson iteration used to solve for
//! yield to maturity, together with its configuration (tolerance,
//! iteration cap) and structured failure reporting.
//!
//! ## Design Philosophy
//!
//! - **Bounded**: Every iteration carries a hard cap; exceeding it is an
//!   error, never an endless loop
//! - **Inspectable**: Results report iteration counts and residuals so
//!   callers can assert convergence quality

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{newton_raphson, newton_raphson_numerical, SolverConfig, SolverResult};
