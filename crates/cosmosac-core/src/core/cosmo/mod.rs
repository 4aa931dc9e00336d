//! # COSMO-SAC Module
//!
//! Closed-form pieces of the COSMO-SAC activity-coefficient model. The
//! iterative residual solver lives in [`crate::engine::solver`].
//!
//! ## Key Components
//!
//! - [`params`] - Universal model constants and their TOML loader
//! - [`exchange`] - Temperature-dependent exchange energy between surface segments
//! - [`combinatorial`] - Staverman-Guggenheim size/shape term
//! - [`dispersion`] - Per-molecule dispersion constants and the dispersive term
//! - [`term`] - Per-component breakdown of ln γ
//!
//! ```ignore
//! use cosmosac::core::cosmo::{exchange::ExchangeEnergy, params::CosmoSacParams};
//!
//! let params = CosmoSacParams::default();
//! let exchange = ExchangeEnergy::build(298.15, &params)?;
//! ```

pub mod combinatorial;
pub mod dispersion;
pub mod exchange;
pub mod params;
pub mod term;
