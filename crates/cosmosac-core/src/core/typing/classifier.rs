use super::category::{AtomCategory, DispersiveNature};
use crate::core::models::element::Element;
use crate::core::models::error::InputShapeError;
use crate::core::models::graph::BondGraph;
use crate::core::models::molecule::MoleculeDescriptor;
use crate::core::models::sigma::ProfileType;
use std::collections::BTreeSet;

/// How far a failed hydroxyl/water/carboxyl match reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanTermination {
    /// A failed match ends the scan of the whole atom list. Atoms after the
    /// stopping hydrogen keep the `Other` category. Matches the published
    /// reference outputs.
    #[default]
    Molecule,
    /// A failed match only ends refinement of the current hydrogen. Every
    /// atom is typed before any refinement runs, so the result does not
    /// depend on atom ordering.
    Atom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassifierConfig {
    pub termination: ScanTermination,
}

/// Per-atom typing and the molecule's resolved dispersive nature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomClassification {
    categories: Vec<AtomCategory>,
    profile_types: Vec<ProfileType>,
    nature: DispersiveNature,
}

impl AtomClassification {
    pub fn categories(&self) -> &[AtomCategory] {
        &self.categories
    }

    pub fn category(&self, atom: usize) -> AtomCategory {
        self.categories[atom]
    }

    /// Hydrogen-bonding profile type of each atom.
    pub fn profile_types(&self) -> &[ProfileType] {
        &self.profile_types
    }

    pub fn nature(&self) -> DispersiveNature {
        self.nature
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Scratch buffers for one classification run; consumed into the result.
struct Typing<'a> {
    atoms: &'a [Element],
    bonds: &'a BondGraph,
    categories: Vec<AtomCategory>,
    profile_types: Vec<ProfileType>,
    votes: BTreeSet<DispersiveNature>,
}

pub fn classify_molecule(molecule: &MoleculeDescriptor, config: &ClassifierConfig) -> AtomClassification {
    type_atoms(molecule.atoms(), molecule.bonds(), config)
}

/// Assigns an [`AtomCategory`] and [`ProfileType`] to every atom and resolves
/// the molecule's [`DispersiveNature`].
///
/// Fails when `bonds` does not describe exactly the atoms in `atoms`.
pub fn classify(
    atoms: &[Element],
    bonds: &BondGraph,
    config: &ClassifierConfig,
) -> Result<AtomClassification, InputShapeError> {
    if atoms.len() != bonds.len() {
        return Err(InputShapeError::BondMatrixSize {
            expected: atoms.len(),
            found: bonds.len(),
        });
    }
    Ok(type_atoms(atoms, bonds, config))
}

/// `atoms` and `bonds` must have the same length.
fn type_atoms(atoms: &[Element], bonds: &BondGraph, config: &ClassifierConfig) -> AtomClassification {
    let mut typing = Typing {
        atoms,
        bonds,
        categories: vec![AtomCategory::Other; atoms.len()],
        profile_types: vec![ProfileType::NonHydrogenBonding; atoms.len()],
        votes: BTreeSet::new(),
    };

    match config.termination {
        ScanTermination::Molecule => {
            for atom in 0..atoms.len() {
                typing.apply_default(atom);
                if typing.refine_hydrogen(atom) == Flow::Stop {
                    break;
                }
            }
        }
        ScanTermination::Atom => {
            // Pass 1: element/degree lookup for every atom.
            for atom in 0..atoms.len() {
                typing.apply_default(atom);
            }
            // Pass 2: hydrogen-centered pattern refinements.
            for atom in 0..atoms.len() {
                typing.refine_hydrogen(atom);
            }
        }
    }

    AtomClassification {
        nature: DispersiveNature::resolve(typing.votes.iter().copied()),
        categories: typing.categories,
        profile_types: typing.profile_types,
    }
}

fn default_typing(element: Element, degree: usize) -> (AtomCategory, ProfileType, DispersiveNature) {
    use AtomCategory as A;
    use DispersiveNature::{AcceptorOnly, NonHydrogenBonding};
    use ProfileType::{NonHydrogenBonding as Nhb, OtherPolar as Ot};

    match (element, degree) {
        (Element::C, 2) => (A::CarbonSp, Nhb, NonHydrogenBonding),
        (Element::C, 3) => (A::CarbonSp2, Nhb, NonHydrogenBonding),
        (Element::C, 4) => (A::CarbonSp3, Nhb, NonHydrogenBonding),
        (Element::O, 1) => (A::OxygenSp2, Ot, AcceptorOnly),
        (Element::O, 2) => (A::OxygenSp3, Ot, AcceptorOnly),
        (Element::N, 1) => (A::NitrogenSp, Ot, AcceptorOnly),
        (Element::N, 2) => (A::NitrogenSp2, Ot, AcceptorOnly),
        (Element::N, 3) => (A::NitrogenSp3, Ot, AcceptorOnly),
        (Element::F, 1) => (A::Fluorine, Ot, AcceptorOnly),
        (Element::Cl, 1) => (A::Chlorine, Nhb, NonHydrogenBonding),
        (Element::H, 1) => (A::OtherHydrogen, Nhb, NonHydrogenBonding),
        _ => (A::Other, Nhb, NonHydrogenBonding),
    }
}

impl Typing<'_> {
    fn apply_default(&mut self, atom: usize) {
        let (category, profile_type, vote) = default_typing(self.atoms[atom], self.bonds.degree(atom));
        self.categories[atom] = category;
        self.profile_types[atom] = profile_type;
        self.votes.insert(vote);
    }

    fn bonded_to(&self, atom: usize, element: Element) -> bool {
        self.bonds
            .neighbors(atom)
            .iter()
            .any(|&n| self.atoms[n] == element)
    }

    fn refine_hydrogen(&mut self, h: usize) -> Flow {
        if self.atoms[h] != Element::H {
            return Flow::Continue;
        }

        if self.bonded_to(h, Element::N) {
            self.categories[h] = AtomCategory::NitrogenHydrogen;
            self.profile_types[h] = ProfileType::OtherPolar;
            self.votes.insert(DispersiveNature::DonorAcceptor);
        }

        if self.bonded_to(h, Element::F) {
            self.profile_types[h] = ProfileType::OtherPolar;
            self.votes.insert(DispersiveNature::DonorAcceptor);
        }

        if self.bonded_to(h, Element::O) {
            return self.refine_hydroxyl(h);
        }

        Flow::Continue
    }

    /// H-O pattern: tags the hydroxyl, then looks for water and carboxylic acid.
    fn refine_hydroxyl(&mut self, h: usize) -> Flow {
        self.categories[h] = AtomCategory::HydroxylHydrogen;
        self.profile_types[h] = ProfileType::Hydroxyl;

        // The hydroxyl oxygen is the hydrogen's first neighbor.
        let o = self.bonds.neighbors(h)[0];
        self.profile_types[o] = ProfileType::Hydroxyl;
        self.votes.insert(DispersiveNature::DonorAcceptor);

        if self.bonds.degree(o) != 2 {
            return Flow::Stop;
        }
        let Some(&k) = self.bonds.neighbors(o).iter().find(|&&k| k != h) else {
            return Flow::Stop;
        };

        if self.atoms[k] == Element::H {
            self.categories[h] = AtomCategory::WaterHydrogen;
            self.categories[k] = AtomCategory::WaterHydrogen;
            self.votes.insert(DispersiveNature::Water);
            return Flow::Stop;
        }

        let k_neighbors = self.bonds.neighbors(k);
        let oxygen_count = k_neighbors
            .iter()
            .filter(|&&n| self.atoms[n] == Element::O)
            .count();
        if self.atoms[k] != Element::C || k_neighbors.len() != 3 || oxygen_count != 2 {
            return Flow::Stop;
        }

        let Some(&carbonyl) = k_neighbors
            .iter()
            .find(|&&m| m != o && self.atoms[m] == Element::O)
        else {
            return Flow::Stop;
        };
        if self.bonds.degree(carbonyl) != 1 {
            return Flow::Stop;
        }

        self.votes.insert(DispersiveNature::CarboxylicAcid);
        Flow::Continue
    }
}
