//! # Featurization Module
//!
//! Turns a molecule identifier into a [`MoleculeDescriptor`]. Structure
//! perception and sigma-profile prediction are external concerns and enter
//! through the [`StructureParser`] and [`ProfilePredictor`] traits; curated
//! profiles from a [`library::ProfileLibrary`] take precedence over
//! predictions.

pub mod library;

use crate::core::models::error::InputShapeError;
use crate::core::models::molecule::{DescriptorError, MoleculeDescriptor};
use crate::core::models::sigma::{NUM_BINS, SigmaProfile};
use library::ProfileLibrary;
use thiserror::Error;
use tracing::debug;

/// Atom symbols and dense bond matrix of a molecule, hydrogens explicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub atoms: Vec<String>,
    pub bonds: Vec<Vec<u8>>,
}

/// Raw regression outputs for one molecule, before unit scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    pub volume: f64,
    pub non_hydrogen_bonding: Vec<f64>,
    pub hydroxyl: Vec<f64>,
    pub other_polar: Vec<f64>,
}

/// Factors mapping normalized predictor outputs back to physical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionScale {
    pub volume: f64,
    pub non_hydrogen_bonding: f64,
    pub hydroxyl: f64,
    pub other_polar: f64,
}

impl Default for PredictionScale {
    fn default() -> Self {
        Self {
            volume: 562.0,
            non_hydrogen_bonding: 145.0,
            hydroxyl: 7.0,
            other_polar: 16.0,
        }
    }
}

/// Surface data derived from a prediction: (area, volume, profile).
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceData {
    pub area: f64,
    pub volume: f64,
    pub sigma_profile: SigmaProfile,
}

impl RawPrediction {
    /// Scales each output, clamps negative bins to zero, and takes the area
    /// as the sum over the whole profile.
    pub fn into_surface(self, scale: &PredictionScale) -> Result<SurfaceData, InputShapeError> {
        let scaled = |values: &[f64], factor: f64| -> Vec<f64> {
            values
                .iter()
                .map(|&v| {
                    let v = v * factor;
                    if v < 0.0 { 0.0 } else { v }
                })
                .collect()
        };

        let rows = [
            scaled(&self.non_hydrogen_bonding, scale.non_hydrogen_bonding),
            scaled(&self.hydroxyl, scale.hydroxyl),
            scaled(&self.other_polar, scale.other_polar),
        ];
        let sigma_profile = SigmaProfile::from_rows(&rows)?;

        Ok(SurfaceData {
            area: sigma_profile.total(),
            volume: self.volume * scale.volume,
            sigma_profile,
        })
    }
}

pub trait StructureParser {
    fn parse(&self, identifier: &str) -> Result<Structure, FeaturizeError>;
}

pub trait ProfilePredictor {
    /// Each profile vector must have `NUM_BINS` entries.
    fn predict(&self, identifier: &str) -> Result<RawPrediction, FeaturizeError>;
}

#[derive(Debug, Error)]
pub enum FeaturizeError {
    #[error("Failed to parse structure of '{identifier}': {message}")]
    Structure { identifier: String, message: String },

    #[error("Failed to predict sigma profile of '{identifier}': {message}")]
    Prediction { identifier: String, message: String },

    #[error("Predicted profile of '{identifier}' has {found} bins, expected {NUM_BINS}")]
    PredictionLength { identifier: String, found: usize },

    #[error("Invalid descriptor for '{identifier}': {source}")]
    Descriptor {
        identifier: String,
        source: DescriptorError,
    },
}

/// Builds molecule descriptors from identifiers.
pub struct Featurizer<S, P> {
    parser: S,
    predictor: P,
    library: ProfileLibrary,
    scale: PredictionScale,
}

impl<S: StructureParser, P: ProfilePredictor> Featurizer<S, P> {
    pub fn new(parser: S, predictor: P) -> Self {
        Self {
            parser,
            predictor,
            library: ProfileLibrary::default(),
            scale: PredictionScale::default(),
        }
    }

    pub fn with_library(mut self, library: ProfileLibrary) -> Self {
        self.library = library;
        self
    }

    pub fn with_scale(mut self, scale: PredictionScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn library(&self) -> &ProfileLibrary {
        &self.library
    }

    pub fn featurize(&self, identifier: &str) -> Result<MoleculeDescriptor, FeaturizeError> {
        let to_descriptor_error = |source: DescriptorError| FeaturizeError::Descriptor {
            identifier: identifier.to_string(),
            source,
        };

        let surface = match self.library.get(identifier) {
            Some(entry) => {
                debug!(identifier, "Using curated sigma profile from library.");
                SurfaceData {
                    area: entry.area,
                    volume: entry.volume,
                    sigma_profile: entry.sigma_profiles.clone(),
                }
            }
            None => {
                let raw = self.predictor.predict(identifier)?;
                for values in [&raw.non_hydrogen_bonding, &raw.hydroxyl, &raw.other_polar] {
                    if values.len() != NUM_BINS {
                        return Err(FeaturizeError::PredictionLength {
                            identifier: identifier.to_string(),
                            found: values.len(),
                        });
                    }
                }
                raw.into_surface(&self.scale)
                    .map_err(|e| to_descriptor_error(e.into()))?
            }
        };

        let structure = self.parser.parse(identifier)?;
        let descriptor = MoleculeDescriptor::new(
            &structure.atoms,
            &structure.bonds,
            surface.area,
            surface.volume,
            surface.sigma_profile,
        )
        .map_err(to_descriptor_error)?;

        Ok(descriptor.with_name(identifier))
    }
}
