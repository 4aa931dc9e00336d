//! # Typing Module
//!
//! Rule-based classification of atoms from the bond graph alone.
//!
//! ## Overview
//!
//! Every atom is first typed from its element and bond count (e.g. a carbon
//! with four neighbors is `C(sp3)`). Hydrogen atoms are then refined by
//! pattern: hydrogens on nitrogen or fluorine, hydroxyl hydrogens, water, and
//! carboxylic-acid groups. Each rule casts a vote for the molecule's
//! [`category::DispersiveNature`]; the highest-priority vote wins.
//!
//! ## Key Components
//!
//! - [`category`] - Atom categories and the dispersive-nature priority merge
//! - [`classifier`] - The classification passes and their configuration

pub mod category;
pub mod classifier;
