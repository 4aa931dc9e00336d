use super::params::CosmoSacParams;
use crate::core::models::error::{InputShapeError, ensure_component_counts};

/// Staverman-Guggenheim combinatorial contribution to ln γ.
///
/// `areas`, `volumes` and `composition` are parallel slices, one entry per
/// component; a length mismatch is an error. Values are assumed validated
/// (positive areas and volumes, mole fractions summing to one).
pub fn ln_gamma(
    areas: &[f64],
    volumes: &[f64],
    composition: &[f64],
    params: &CosmoSacParams,
) -> Result<Vec<f64>, InputShapeError> {
    ensure_component_counts(areas.len(), composition, &[("volumes", volumes.len())])?;
    let z = params.coordination_number;

    let q: Vec<f64> = areas
        .iter()
        .map(|a| a / params.area_normalization)
        .collect();
    let r: Vec<f64> = volumes
        .iter()
        .map(|v| v / params.volume_normalization)
        .collect();
    let l: Vec<f64> = q
        .iter()
        .zip(&r)
        .map(|(&q, &r)| (z / 2.0) * (r - q) - (r - 1.0))
        .collect();

    let mean_q = weighted_sum(composition, &q);
    let mean_r = weighted_sum(composition, &r);
    let mean_l = weighted_sum(composition, &l);

    Ok((0..areas.len())
        .map(|i| {
            let theta = q[i] / mean_q;
            let phi = r[i] / mean_r;
            phi.ln() + z * q[i] * (theta / phi).ln() / 2.0 + l[i] - phi * mean_l
        })
        .collect())
}

fn weighted_sum(weights: &[f64], values: &[f64]) -> f64 {
    weights.iter().zip(values).map(|(w, v)| w * v).sum()
}
