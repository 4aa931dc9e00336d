//! # Engine Module
//!
//! Numerical machinery shared by the workflows: configuration, input
//! validation, the exchange-energy cache and the segment-activity solver.
//!
//! - **Configuration** ([`config`]) - Solver limits, classifier behaviour and a builder
//! - **Error Handling** ([`error`]) - The single error type returned by activity queries
//! - **Caching** ([`cache`]) - Exchange energies reused across queries at one temperature
//! - **Solver** ([`solver`]) - Damped fixed-point iteration for segment activities
//! - **Validation** ([`validate`]) - Composition and temperature checks run before solving

pub mod cache;
pub mod config;
pub mod error;
pub mod solver;
pub mod validate;
