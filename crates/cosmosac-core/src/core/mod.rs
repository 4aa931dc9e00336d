//! # Core Module
//!
//! Domain types and closed-form pieces of the model, free of iteration and
//! caching concerns.
//!
//! - **Models** ([`models`]) - Elements, bond graphs, sigma profiles and molecule descriptors
//! - **Typing** ([`typing`]) - Rule-based atom classification and dispersive nature
//! - **COSMO-SAC** ([`cosmo`]) - Parameters, exchange energy, combinatorial and dispersive terms
//! - **Featurization** ([`featurize`]) - Building descriptors from identifiers

pub mod cosmo;
pub mod featurize;
pub mod models;
pub mod typing;
