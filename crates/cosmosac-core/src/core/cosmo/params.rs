use crate::core::typing::category::AtomCategory;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Dispersion constant of each atom category [K].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DispersionTable {
    pub c_sp3: f64,
    pub c_sp2: f64,
    pub c_sp: f64,
    pub n_sp3: f64,
    pub n_sp2: f64,
    pub n_sp: f64,
    /// -O-
    pub o_sp3: f64,
    /// =O
    pub o_sp2: f64,
    pub f: f64,
    pub cl: f64,
    pub h_water: f64,
    pub h_hydroxyl: f64,
    pub h_amine: f64,
    pub h_other: f64,
}

impl Default for DispersionTable {
    fn default() -> Self {
        Self {
            c_sp3: 115.7023,
            c_sp2: 117.4650,
            c_sp: 66.0691,
            n_sp3: 15.4901,
            n_sp2: 84.6268,
            n_sp: 109.6621,
            o_sp3: 95.6184,
            o_sp2: -11.0549,
            f: 52.9318,
            cl: 104.2534,
            h_water: 58.3301,
            h_hydroxyl: 19.3477,
            h_amine: 141.1709,
            h_other: 0.0,
        }
    }
}

impl DispersionTable {
    /// `None` for categories without a dispersion constant.
    pub fn energy(&self, category: AtomCategory) -> Option<f64> {
        match category {
            AtomCategory::CarbonSp3 => Some(self.c_sp3),
            AtomCategory::CarbonSp2 => Some(self.c_sp2),
            AtomCategory::CarbonSp => Some(self.c_sp),
            AtomCategory::NitrogenSp3 => Some(self.n_sp3),
            AtomCategory::NitrogenSp2 => Some(self.n_sp2),
            AtomCategory::NitrogenSp => Some(self.n_sp),
            AtomCategory::OxygenSp3 => Some(self.o_sp3),
            AtomCategory::OxygenSp2 => Some(self.o_sp2),
            AtomCategory::Fluorine => Some(self.f),
            AtomCategory::Chlorine => Some(self.cl),
            AtomCategory::WaterHydrogen => Some(self.h_water),
            AtomCategory::HydroxylHydrogen => Some(self.h_hydroxyl),
            AtomCategory::NitrogenHydrogen => Some(self.h_amine),
            AtomCategory::OtherHydrogen => Some(self.h_other),
            AtomCategory::Other => None,
        }
    }
}

/// Universal constants of the COSMO-SAC model.
///
/// `Default` reproduces the published parameter set; a TOML file may
/// override any subset of them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CosmoSacParams {
    /// Area normalization q0 [Å²].
    pub area_normalization: f64,
    /// Volume normalization r0 [Å³].
    pub volume_normalization: f64,
    /// Lattice coordination number z.
    pub coordination_number: f64,
    /// Gas constant R [kcal/(K·mol)].
    pub gas_constant: f64,
    /// Electrostatic constant A_ES [kcal·Å⁴/(mol·e²)].
    pub electrostatic_a: f64,
    /// Electrostatic constant B_ES [kcal·Å⁴·K²/(mol·e²)].
    pub electrostatic_b: f64,
    /// Effective segment contact area a_eff [Å²].
    pub effective_area: f64,
    /// Hydrogen-bonding constants c_hb indexed by profile type [kcal·Å⁴/(mol·e²)].
    pub hydrogen_bonding: [[f64; 3]; 3],
    pub dispersion: DispersionTable,
    /// Magnitude of the dispersion interaction parameter w.
    pub dispersion_interaction: f64,
}

impl Default for CosmoSacParams {
    fn default() -> Self {
        Self {
            area_normalization: 79.53,
            volume_normalization: 66.69,
            coordination_number: 10.0,
            gas_constant: 1.987204258e-3,
            electrostatic_a: 6525.69,
            electrostatic_b: 1.4859e8,
            effective_area: 7.25,
            hydrogen_bonding: [
                [0.0, 0.0, 0.0],
                [0.0, 4013.78, 3016.43],
                [0.0, 3016.43, 932.31],
            ],
            dispersion: DispersionTable::default(),
            dispersion_interaction: 0.27027,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl CosmoSacParams {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Electrostatic interaction coefficient c_ES(T).
    #[inline]
    pub fn electrostatic(&self, temperature: f64) -> f64 {
        self.electrostatic_a + self.electrostatic_b / temperature / temperature
    }
}
