use std::fmt;

/// Hybridization / hydrogen-bonding class of a single atom.
///
/// Each class except [`AtomCategory::Other`] carries a dispersion constant
/// (see [`crate::core::cosmo::params::DispersionTable`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtomCategory {
    /// Carbon bonded to four atoms.
    CarbonSp3,
    /// Carbon bonded to three atoms.
    CarbonSp2,
    /// Carbon bonded to two atoms.
    CarbonSp,
    /// Nitrogen bonded to three atoms.
    NitrogenSp3,
    /// Nitrogen bonded to two atoms.
    NitrogenSp2,
    /// Nitrogen bonded to one atom.
    NitrogenSp,
    /// Ether-like oxygen (-O-), bonded to two atoms.
    OxygenSp3,
    /// Carbonyl-like oxygen (=O), bonded to one atom.
    OxygenSp2,
    Fluorine,
    Chlorine,
    /// Hydrogen of a water molecule.
    WaterHydrogen,
    /// Hydrogen of a hydroxyl group (not water).
    HydroxylHydrogen,
    /// Hydrogen bonded to nitrogen.
    NitrogenHydrogen,
    /// Any other hydrogen.
    OtherHydrogen,
    /// Known element with a bond count the rules do not parameterize.
    Other,
}

impl AtomCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CarbonSp3 => "C(sp3)",
            Self::CarbonSp2 => "C(sp2)",
            Self::CarbonSp => "C(sp)",
            Self::NitrogenSp3 => "N(sp3)",
            Self::NitrogenSp2 => "N(sp2)",
            Self::NitrogenSp => "N(sp)",
            Self::OxygenSp3 => "O(sp3)",
            Self::OxygenSp2 => "O(sp2)",
            Self::Fluorine => "F",
            Self::Chlorine => "Cl",
            Self::WaterHydrogen => "H(water)",
            Self::HydroxylHydrogen => "H(OH)",
            Self::NitrogenHydrogen => "H(NH)",
            Self::OtherHydrogen => "H(other)",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for AtomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Molecule-level hydrogen-bonding character used to select dispersion
/// interaction parameters.
///
/// Variants are declared in resolution priority order: when a molecule
/// collects several votes, the greatest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DispersiveNature {
    /// Non-hydrogen-bonding.
    NonHydrogenBonding,
    /// Contains O, N or F but no H bonded to them.
    AcceptorOnly,
    /// Contains NH, OH or FH groups.
    DonorAcceptor,
    Water,
    CarboxylicAcid,
}

impl DispersiveNature {
    /// Merges a set of votes into the single highest-priority label.
    pub fn resolve<I>(votes: I) -> Self
    where
        I: IntoIterator<Item = DispersiveNature>,
    {
        votes
            .into_iter()
            .max()
            .unwrap_or(DispersiveNature::NonHydrogenBonding)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NonHydrogenBonding => "NHB",
            Self::AcceptorOnly => "HBOA",
            Self::DonorAcceptor => "HBDA",
            Self::Water => "WATER",
            Self::CarboxylicAcid => "COOH",
        }
    }
}

impl fmt::Display for DispersiveNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
