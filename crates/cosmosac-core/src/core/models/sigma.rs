use super::error::InputShapeError;
use nalgebra::{DMatrix, DVectorView};
use serde::Deserialize;
use std::fmt;

/// Number of screening-charge-density bins in a sigma profile.
pub const NUM_BINS: usize = 51;
/// Number of hydrogen-bonding profile types (NHB, OH, OT).
pub const NUM_PROFILE_TYPES: usize = 3;
/// Lower edge of the charge-density grid [e/Å²].
pub const SIGMA_MIN: f64 = -0.025;
/// Upper edge of the charge-density grid [e/Å²].
pub const SIGMA_MAX: f64 = 0.025;

/// Hydrogen-bonding character of a surface segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileType {
    /// Non-hydrogen-bonding surface.
    NonHydrogenBonding,
    /// Hydroxyl surface (O and H of an -OH group).
    Hydroxyl,
    /// Other hydrogen-bonding surface (N, F, ether/carbonyl O, H on N or F).
    OtherPolar,
}

impl ProfileType {
    pub const ALL: [ProfileType; NUM_PROFILE_TYPES] = [
        ProfileType::NonHydrogenBonding,
        ProfileType::Hydroxyl,
        ProfileType::OtherPolar,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::NonHydrogenBonding => 0,
            Self::Hydroxyl => 1,
            Self::OtherPolar => 2,
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::NonHydrogenBonding => "NHB",
            Self::Hydroxyl => "OH",
            Self::OtherPolar => "OT",
        })
    }
}

/// The charge-density bin centers, evenly spaced over `[SIGMA_MIN, SIGMA_MAX]`.
pub fn sigma_grid() -> [f64; NUM_BINS] {
    let step = (SIGMA_MAX - SIGMA_MIN) / (NUM_BINS - 1) as f64;
    let mut grid = [0.0; NUM_BINS];
    for (k, sigma) in grid.iter_mut().enumerate() {
        *sigma = SIGMA_MIN + k as f64 * step;
    }
    grid[NUM_BINS - 1] = SIGMA_MAX;
    grid
}

/// Surface area of a molecule distributed over charge-density bins [Å²].
///
/// Stored as a `NUM_BINS` x `NUM_PROFILE_TYPES` matrix: one column per
/// profile type, one row per bin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>")]
pub struct SigmaProfile {
    values: DMatrix<f64>,
}

impl SigmaProfile {
    /// Builds a profile from one row of `NUM_BINS` values per profile type.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, InputShapeError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.len() != NUM_PROFILE_TYPES || rows.iter().any(|r| r.as_ref().len() != NUM_BINS) {
            return Err(InputShapeError::SigmaProfileShape {
                expected_rows: NUM_PROFILE_TYPES,
                expected_cols: NUM_BINS,
                rows: rows.len(),
                cols,
            });
        }

        let mut values = DMatrix::zeros(NUM_BINS, NUM_PROFILE_TYPES);
        for (profile_type, row) in rows.iter().enumerate() {
            for (bin, &value) in row.as_ref().iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(InputShapeError::SigmaProfileValue {
                        profile_type,
                        bin,
                        value,
                    });
                }
                values[(bin, profile_type)] = value;
            }
        }
        Ok(Self { values })
    }

    pub fn zeros() -> Self {
        Self {
            values: DMatrix::zeros(NUM_BINS, NUM_PROFILE_TYPES),
        }
    }

    #[inline]
    pub fn get(&self, profile_type: ProfileType, bin: usize) -> f64 {
        self.values[(bin, profile_type.index())]
    }

    pub fn column(&self, profile_type: ProfileType) -> DVectorView<'_, f64> {
        self.values.column(profile_type.index())
    }

    /// Bins x profile types.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Total surface area covered by the profile [Å²].
    pub fn total(&self) -> f64 {
        self.values.sum()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..NUM_PROFILE_TYPES)
            .map(|t| self.values.column(t).iter().copied().collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for SigmaProfile {
    type Error = InputShapeError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}
