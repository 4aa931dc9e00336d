//! Synthetic molecules for mixture tests.
//!
//! Sigma profiles here are hand-built shapes, not quantum-chemical results:
//! a band of non-polar area around σ = 0 plus a few polar bins. They are
//! close enough to real profiles to reproduce qualitative behaviour.

#![allow(dead_code)]

use cosmosac::core::models::graph::BondGraph;
use cosmosac::core::models::molecule::{MoleculeDescriptor, parse_symbols};
use cosmosac::core::models::sigma::{NUM_BINS, NUM_PROFILE_TYPES, ProfileType, SigmaProfile};
use std::ops::RangeInclusive;

pub fn profile(
    non_polar: RangeInclusive<usize>,
    non_polar_area: f64,
    polar: &[(ProfileType, usize, f64)],
) -> SigmaProfile {
    let mut rows = vec![vec![0.0; NUM_BINS]; NUM_PROFILE_TYPES];
    let bins = non_polar.clone().count() as f64;
    for bin in non_polar {
        rows[ProfileType::NonHydrogenBonding.index()][bin] = non_polar_area / bins;
    }
    for &(profile_type, bin, area) in polar {
        rows[profile_type.index()][bin] += area;
    }
    SigmaProfile::from_rows(&rows).unwrap()
}

pub fn molecule(
    name: &str,
    symbols: &[&str],
    edges: &[(usize, usize)],
    volume: f64,
    sigma_profile: SigmaProfile,
) -> MoleculeDescriptor {
    let atoms = parse_symbols(symbols).unwrap();
    let bonds = BondGraph::from_edges(atoms.len(), edges).unwrap();
    let area = sigma_profile.total();
    MoleculeDescriptor::from_parts(atoms, bonds, area, volume, sigma_profile)
        .unwrap()
        .with_name(name)
}

pub fn water() -> MoleculeDescriptor {
    use ProfileType::*;
    molecule(
        "water",
        &["O", "H", "H"],
        &[(0, 1), (0, 2)],
        25.7,
        profile(
            22..=28,
            10.5,
            &[
                (Hydroxyl, 11, 9.0),
                (Hydroxyl, 12, 6.0),
                (Hydroxyl, 38, 6.0),
                (Hydroxyl, 39, 9.0),
                (OtherPolar, 14, 2.0),
            ],
        ),
    )
}

pub fn ethanol() -> MoleculeDescriptor {
    use ProfileType::*;
    molecule(
        "ethanol",
        &["C", "C", "O", "H", "H", "H", "H", "H", "H"],
        &[
            (0, 1),
            (1, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (1, 6),
            (1, 7),
            (2, 8),
        ],
        66.0,
        profile(
            20..=30,
            66.0,
            &[
                (Hydroxyl, 11, 2.5),
                (Hydroxyl, 12, 2.5),
                (Hydroxyl, 38, 3.0),
                (Hydroxyl, 39, 3.0),
            ],
        ),
    )
}

pub fn ethane() -> MoleculeDescriptor {
    molecule(
        "ethane",
        &["C", "C", "H", "H", "H", "H", "H", "H"],
        &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (1, 6), (1, 7)],
        52.0,
        profile(22..=28, 70.0, &[]),
    )
}

pub fn acetic_acid() -> MoleculeDescriptor {
    use ProfileType::*;
    molecule(
        "acetic acid",
        &["C", "C", "O", "O", "H", "H", "H", "H"],
        &[(0, 1), (1, 2), (1, 3), (0, 4), (0, 5), (0, 6), (3, 7)],
        70.0,
        profile(
            21..=29,
            45.0,
            &[
                (Hydroxyl, 11, 3.0),
                (Hydroxyl, 39, 3.0),
                (OtherPolar, 36, 4.0),
                (OtherPolar, 37, 4.0),
            ],
        ),
    )
}

/// NH4 has no dispersion constant for its tetravalent nitrogen.
pub fn ammonium() -> MoleculeDescriptor {
    use ProfileType::*;
    molecule(
        "ammonium",
        &["N", "H", "H", "H", "H"],
        &[(0, 1), (0, 2), (0, 3), (0, 4)],
        30.0,
        profile(
            22..=28,
            28.0,
            &[(OtherPolar, 14, 3.0), (OtherPolar, 36, 3.0)],
        ),
    )
}
