use thiserror::Error;

/// Malformed or out-of-range input detected before any computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputShapeError {
    #[error("bond matrix has {found} rows but the molecule has {expected} atoms")]
    BondMatrixSize { expected: usize, found: usize },

    #[error("bond matrix row {row} has {found} columns, expected {expected}")]
    BondMatrixNotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("bond matrix entry ({i}, {j}) is {value}; only 0 and 1 are allowed")]
    BondMatrixEntry { i: usize, j: usize, value: u8 },

    #[error("bond matrix is not symmetric at ({i}, {j})")]
    BondMatrixAsymmetric { i: usize, j: usize },

    #[error("atom {index} is bonded to itself")]
    SelfBond { index: usize },

    #[error("bond ({i}, {j}) references an atom outside 0..{len}")]
    BondIndexOutOfRange { i: usize, j: usize, len: usize },

    #[error("sigma profile must be {expected_rows}x{expected_cols}, found {rows}x{cols}")]
    SigmaProfileShape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("sigma profile value {value} at type {profile_type}, bin {bin} is negative or not finite")]
    SigmaProfileValue {
        profile_type: usize,
        bin: usize,
        value: f64,
    },

    #[error("{quantity} must be positive and finite, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error("composition has {found} entries but the mixture has {expected} molecules")]
    CompositionLength { expected: usize, found: usize },

    #[error("mole fraction {value} at index {index} is negative or not finite")]
    MoleFraction { index: usize, value: f64 },

    #[error("mole fractions sum to {sum}, expected 1 within {tolerance}")]
    CompositionSum { sum: f64, tolerance: f64 },

    #[error("{quantity} has {found} entries but the mixture has {expected} components")]
    ComponentCount {
        quantity: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("a mixture needs at least one molecule")]
    EmptyMixture,
}

pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> Result<f64, InputShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputShapeError::NonPositive { quantity, value })
    }
}

/// Checks that each per-component input has one entry per component.
/// A short `composition` is reported as [`InputShapeError::CompositionLength`].
pub(crate) fn ensure_component_counts(
    expected: usize,
    composition: &[f64],
    inputs: &[(&'static str, usize)],
) -> Result<(), InputShapeError> {
    if let Some(&(quantity, found)) = inputs.iter().find(|(_, found)| *found != expected) {
        return Err(InputShapeError::ComponentCount {
            quantity,
            expected,
            found,
        });
    }
    if composition.len() != expected {
        return Err(InputShapeError::CompositionLength {
            expected,
            found: composition.len(),
        });
    }
    Ok(())
}
