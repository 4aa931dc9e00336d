//! Descriptors built through the featurization seams feed straight into
//! activity-coefficient queries.

use cosmosac::core::featurize::library::ProfileLibrary;
use cosmosac::core::featurize::{
    FeaturizeError, Featurizer, ProfilePredictor, RawPrediction, Structure, StructureParser,
};
use cosmosac::core::models::sigma::{NUM_BINS, NUM_PROFILE_TYPES};
use cosmosac::workflows::gamma::calculate_gamma;
use std::fs;
use tempfile::tempdir;

mod common;

/// Knows water ("O") and ethane ("CC").
struct TableParser;

impl StructureParser for TableParser {
    fn parse(&self, identifier: &str) -> Result<Structure, FeaturizeError> {
        let molecule = match identifier {
            "O" => common::water(),
            "CC" => common::ethane(),
            other => {
                return Err(FeaturizeError::Structure {
                    identifier: other.to_string(),
                    message: "not in table".to_string(),
                });
            }
        };
        Ok(Structure {
            atoms: molecule.atoms().iter().map(|e| e.symbol().to_string()).collect(),
            bonds: molecule.bonds().to_matrix(),
        })
    }
}

/// Predicts a normalized non-polar band for any identifier.
struct BandPredictor;

impl ProfilePredictor for BandPredictor {
    fn predict(&self, _identifier: &str) -> Result<RawPrediction, FeaturizeError> {
        let mut non_polar = vec![0.0; NUM_BINS];
        for value in &mut non_polar[22..=28] {
            *value = 0.07;
        }
        Ok(RawPrediction {
            volume: 0.09,
            non_hydrogen_bonding: non_polar,
            hydroxyl: vec![-0.01; NUM_BINS],
            other_polar: vec![0.0; NUM_BINS],
        })
    }
}

fn library_toml() -> String {
    let water = common::water();
    let rows: Vec<String> = water
        .sigma_profile()
        .to_rows()
        .iter()
        .map(|row| {
            let values: Vec<String> = row.iter().map(|v| format!("{v:?}")).collect();
            format!("[{}]", values.join(", "))
        })
        .collect();
    assert_eq!(rows.len(), NUM_PROFILE_TYPES);
    format!(
        "[O]\narea = {:?}\nvolume = {:?}\nsigma_profiles = [{}]\n",
        water.area(),
        water.volume(),
        rows.join(", ")
    )
}

#[test]
fn library_and_predictor_descriptors_feed_gamma_query() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("profiles.toml");
    fs::write(&path, library_toml()).unwrap();
    let library = ProfileLibrary::load(&path).unwrap();

    let featurizer = Featurizer::new(TableParser, BandPredictor).with_library(library);
    let water = featurizer.featurize("O").unwrap();
    let ethane = featurizer.featurize("CC").unwrap();

    assert_eq!(water.sigma_profile(), common::water().sigma_profile());
    assert!((ethane.volume() - 0.09 * 562.0).abs() < 1e-9);
    assert!((ethane.area() - 7.0 * 0.07 * 145.0).abs() < 1e-9);

    let gammas = calculate_gamma(&[ethane, water], &[0.01, 0.99], 298.15).unwrap();
    assert!(gammas[0] > 1.0);
}

#[test]
fn unknown_identifier_fails_in_parser() {
    let featurizer = Featurizer::new(TableParser, BandPredictor);
    let result = featurizer.featurize("CCCl");
    assert!(matches!(result, Err(FeaturizeError::Structure { .. })));
}
