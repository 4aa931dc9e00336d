use super::params::{CosmoSacParams, DispersionTable};
use crate::core::models::error::{InputShapeError, ensure_component_counts};
use crate::core::typing::category::{AtomCategory, DispersiveNature};
use crate::core::typing::classifier::AtomClassification;
use itertools::Itertools;
use tracing::warn;

/// Dispersion inputs of one molecule: its nature label and mean dispersion
/// constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionProfile {
    pub nature: DispersiveNature,
    pub energy: f64,
}

impl DispersionProfile {
    /// `None` when the molecule contains an atom without a dispersion
    /// constant, which disables the dispersive term for the whole mixture.
    pub fn from_classification(
        classification: &AtomClassification,
        table: &DispersionTable,
    ) -> Option<Self> {
        dispersion_energy(classification.categories(), table).map(|energy| Self {
            nature: classification.nature(),
            energy,
        })
    }
}

/// Mean dispersion constant over the atoms with a non-zero constant.
///
/// Returns `None` if any category has no entry in `table`, or if no atom
/// contributes a non-zero constant.
pub fn dispersion_energy(categories: &[AtomCategory], table: &DispersionTable) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &category in categories {
        let energy = table.energy(category)?;
        if energy != 0.0 {
            sum += energy;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}

/// Nature pairs whose dispersion interaction parameter is negated.
const FLIPPED_PAIRS: [(DispersiveNature, DispersiveNature); 4] = [
    (DispersiveNature::Water, DispersiveNature::AcceptorOnly),
    (DispersiveNature::CarboxylicAcid, DispersiveNature::NonHydrogenBonding),
    (DispersiveNature::CarboxylicAcid, DispersiveNature::DonorAcceptor),
    (DispersiveNature::Water, DispersiveNature::CarboxylicAcid),
];

/// Interaction parameter w_ij for an unordered pair of natures.
pub fn interaction_parameter(a: DispersiveNature, b: DispersiveNature, magnitude: f64) -> f64 {
    let flipped = FLIPPED_PAIRS
        .iter()
        .any(|&(p, q)| (a, b) == (p, q) || (a, b) == (q, p));
    if flipped { -magnitude } else { magnitude }
}

/// Dispersive contribution to ln γ.
///
/// If any component lacks a [`DispersionProfile`], or two components have
/// dispersion constants of opposite sign, the term is zero for every
/// component. `composition` must have one entry per profile.
pub fn ln_gamma(
    profiles: &[Option<DispersionProfile>],
    composition: &[f64],
    params: &CosmoSacParams,
) -> Result<Vec<f64>, InputShapeError> {
    let n = profiles.len();
    ensure_component_counts(n, composition, &[])?;
    let Some(profiles) = profiles.iter().copied().collect::<Option<Vec<_>>>() else {
        warn!("Dispersion parameters are unavailable for at least one component; the dispersive term is set to zero.");
        return Ok(vec![0.0; n]);
    };

    let mut a = vec![vec![0.0; n]; n];
    for (i, j) in (0..n).tuple_combinations() {
        let (pi, pj) = (profiles[i], profiles[j]);
        let product = pi.energy * pj.energy;
        if product < 0.0 {
            warn!(
                i,
                j, "Dispersion constants of opposite sign; the dispersive term is set to zero."
            );
            return Ok(vec![0.0; n]);
        }
        let w = interaction_parameter(pi.nature, pj.nature, params.dispersion_interaction);
        let value = w * (0.5 * (pi.energy + pj.energy) - product.sqrt());
        a[i][j] = value;
        a[j][i] = value;
    }

    Ok((0..n)
        .map(|i| {
            let mut ln = 0.0;
            for j in 0..n {
                if i != j {
                    ln += composition[j] * a[i][j];
                }
                if j > i {
                    ln -= composition[i] * composition[j] * a[i][j];
                }
            }
            ln
        })
        .collect())
}
