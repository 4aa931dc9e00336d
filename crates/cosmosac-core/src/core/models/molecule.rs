use super::element::Element;
use super::error::{InputShapeError, ensure_positive};
use super::graph::BondGraph;
use super::sigma::SigmaProfile;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptorError {
    #[error(transparent)]
    Shape(#[from] InputShapeError),

    #[error("atom {index} has unsupported element symbol '{symbol}'")]
    UnclassifiableAtom { index: usize, symbol: String },
}

/// Everything the activity-coefficient model needs to know about one molecule.
///
/// Produced once by the featurization step and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeDescriptor {
    name: Option<String>,
    atoms: Vec<Element>,
    bonds: BondGraph,
    area: f64,
    volume: f64,
    sigma_profile: SigmaProfile,
}

impl MoleculeDescriptor {
    /// Builds a descriptor from raw atom symbols and a dense bond matrix.
    pub fn new<S, R>(
        symbols: &[S],
        bond_matrix: &[R],
        area: f64,
        volume: f64,
        sigma_profile: SigmaProfile,
    ) -> Result<Self, DescriptorError>
    where
        S: AsRef<str>,
        R: AsRef<[u8]>,
    {
        let atoms = parse_symbols(symbols)?;
        let bonds = BondGraph::from_matrix(bond_matrix, atoms.len())?;
        Self::from_parts(atoms, bonds, area, volume, sigma_profile)
    }

    pub fn from_parts(
        atoms: Vec<Element>,
        bonds: BondGraph,
        area: f64,
        volume: f64,
        sigma_profile: SigmaProfile,
    ) -> Result<Self, DescriptorError> {
        if bonds.len() != atoms.len() {
            return Err(InputShapeError::BondMatrixSize {
                expected: atoms.len(),
                found: bonds.len(),
            }
            .into());
        }
        Ok(Self {
            name: None,
            atoms,
            bonds,
            area: ensure_positive("area", area)?,
            volume: ensure_positive("volume", volume)?,
            sigma_profile,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn atoms(&self) -> &[Element] {
        &self.atoms
    }

    pub fn bonds(&self) -> &BondGraph {
        &self.bonds
    }

    /// Molecular surface area [Å²].
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Molecular cavity volume [Å³].
    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn sigma_profile(&self) -> &SigmaProfile {
        &self.sigma_profile
    }
}

pub fn parse_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<Element>, DescriptorError> {
    symbols
        .iter()
        .enumerate()
        .map(|(index, symbol)| {
            symbol
                .as_ref()
                .parse::<Element>()
                .map_err(|_| DescriptorError::UnclassifiableAtom {
                    index,
                    symbol: symbol.as_ref().to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sigma::{NUM_BINS, NUM_PROFILE_TYPES};

    fn flat_profile() -> SigmaProfile {
        SigmaProfile::from_rows(&vec![vec![1.0; NUM_BINS]; NUM_PROFILE_TYPES]).unwrap()
    }

    fn water_bonds() -> Vec<Vec<u8>> {
        vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]]
    }

    #[test]
    fn new_parses_symbols_and_bonds() {
        let molecule =
            MoleculeDescriptor::new(&["O", "H", "H"], &water_bonds(), 43.4, 25.7, flat_profile())
                .unwrap()
                .with_name("water");

        assert_eq!(molecule.name(), Some("water"));
        assert_eq!(molecule.atoms(), &[Element::O, Element::H, Element::H]);
        assert_eq!(molecule.bonds().neighbors(0), &[1, 2]);
        assert_eq!(molecule.area(), 43.4);
        assert_eq!(molecule.volume(), 25.7);
    }

    #[test]
    fn new_reports_unsupported_element_with_its_index() {
        let result =
            MoleculeDescriptor::new(&["O", "S", "H"], &water_bonds(), 43.4, 25.7, flat_profile());
        assert_eq!(
            result,
            Err(DescriptorError::UnclassifiableAtom {
                index: 1,
                symbol: "S".to_string()
            })
        );
    }

    #[test]
    fn new_rejects_non_positive_area_and_volume() {
        let result =
            MoleculeDescriptor::new(&["O", "H", "H"], &water_bonds(), 0.0, 25.7, flat_profile());
        assert!(matches!(
            result,
            Err(DescriptorError::Shape(InputShapeError::NonPositive {
                quantity: "area",
                ..
            }))
        ));

        let result = MoleculeDescriptor::new(
            &["O", "H", "H"],
            &water_bonds(),
            43.4,
            f64::NAN,
            flat_profile(),
        );
        assert!(matches!(
            result,
            Err(DescriptorError::Shape(InputShapeError::NonPositive {
                quantity: "volume",
                ..
            }))
        ));
    }

    #[test]
    fn new_rejects_bond_matrix_of_wrong_size() {
        let result = MoleculeDescriptor::new(&["O", "H"], &water_bonds(), 43.4, 25.7, flat_profile());
        assert!(matches!(
            result,
            Err(DescriptorError::Shape(InputShapeError::BondMatrixSize { .. }))
        ));
    }
}
