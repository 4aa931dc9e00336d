//! # COSMO-SAC Core Library
//!
//! Liquid-phase activity coefficients of multicomponent mixtures from the
//! COSMO-SAC model: molecules are described by their surface charge-density
//! (sigma) profiles, and non-ideality follows from how their surface
//! segments pair up in solution.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three-layer split throughout.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MoleculeDescriptor`,
//!   `SigmaProfile`), the rule-based atom classifier, and the closed-form
//!   combinatorial and dispersive terms.
//!
//! - **[`engine`]: The Logic Core.** The damped fixed-point solver for
//!   segment activity coefficients, the exchange-energy cache, configuration
//!   and validation.
//!
//! - **[`workflows`]: The Public API.** [`workflows::gamma::ActivityModel`]
//!   ties `core` and `engine` together into a single activity-coefficient
//!   query; [`workflows::gamma::calculate_gamma`] runs one with defaults.

pub mod core;
pub mod engine;
pub mod workflows;
