//! # Workflows Module
//!
//! Top-level entry points of the library. A workflow validates its inputs,
//! classifies every molecule, runs the numerical engine and assembles the
//! per-component result.
//!
//! - **Activity coefficients** ([`gamma`]) - [`gamma::ActivityModel`] and the
//!   one-shot [`gamma::calculate_gamma`]

pub mod gamma;
