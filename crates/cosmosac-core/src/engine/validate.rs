use crate::core::models::error::{InputShapeError, ensure_positive};

/// Checks that `composition` has one finite, non-negative mole fraction per
/// molecule and that the fractions sum to one within `tolerance`.
pub fn composition(
    composition: &[f64],
    num_molecules: usize,
    tolerance: f64,
) -> Result<(), InputShapeError> {
    if num_molecules == 0 {
        return Err(InputShapeError::EmptyMixture);
    }
    if composition.len() != num_molecules {
        return Err(InputShapeError::CompositionLength {
            expected: num_molecules,
            found: composition.len(),
        });
    }
    if let Some((index, &value)) = composition
        .iter()
        .enumerate()
        .find(|(_, x)| !x.is_finite() || **x < 0.0)
    {
        return Err(InputShapeError::MoleFraction { index, value });
    }

    let sum: f64 = composition.iter().sum();
    if (sum - 1.0).abs() > tolerance {
        return Err(InputShapeError::CompositionSum { sum, tolerance });
    }
    Ok(())
}

pub fn temperature(temperature: f64) -> Result<f64, InputShapeError> {
    ensure_positive("temperature", temperature)
}
