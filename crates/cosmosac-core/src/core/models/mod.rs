//! # Core Models Module
//!
//! Data structures describing the molecules of a mixture query.
//!
//! ## Key Components
//!
//! - [`element`] - The closed set of elements the typing rules understand
//! - [`graph`] - Immutable bond-graph view built from an adjacency matrix
//! - [`sigma`] - Sigma profiles and the charge-density grid
//! - [`molecule`] - The validated per-molecule descriptor
//! - [`error`] - Input-shape validation errors
//!
//! All models validate on construction, so downstream code can rely on the
//! invariants (square symmetric bond matrices, positive areas and volumes,
//! non-negative 3x51 sigma profiles) without re-checking them.
//!
//! ```ignore
//! use cosmosac::core::models::{molecule::MoleculeDescriptor, sigma::SigmaProfile};
//!
//! let water = MoleculeDescriptor::new(&["O", "H", "H"], &bonds, 43.4, 25.7, profile)?;
//! ```

pub mod element;
pub mod error;
pub mod graph;
pub mod molecule;
pub mod sigma;
