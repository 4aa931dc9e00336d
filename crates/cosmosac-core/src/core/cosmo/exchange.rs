use super::params::CosmoSacParams;
use crate::core::models::error::{InputShapeError, ensure_positive};
use crate::core::models::sigma::{NUM_BINS, NUM_PROFILE_TYPES, ProfileType, sigma_grid};
use nalgebra::DMatrix;

/// Exchange energy ΔW between two surface segments [kcal/mol].
///
/// Logically a `[3, 3, 51, 51]` tensor indexed by (profile type i, profile
/// type j, bin m, bin n). Stored as nine `NUM_BINS` x `NUM_BINS` blocks,
/// one per profile-type pair, with `block(i, j)` equal to the transpose of
/// `block(j, i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeEnergy {
    temperature: f64,
    blocks: Vec<DMatrix<f64>>,
}

impl ExchangeEnergy {
    /// ΔW(σm, σn) = c_ES(T)(σm + σn)² − c_hb(σm − σn)², where the
    /// hydrogen-bonding part applies only to bins of opposite sign.
    pub fn build(temperature: f64, params: &CosmoSacParams) -> Result<Self, InputShapeError> {
        let temperature = ensure_positive("temperature", temperature)?;
        let sigma = sigma_grid();
        let c_es = params.electrostatic(temperature);

        let mut blocks = vec![DMatrix::zeros(NUM_BINS, NUM_BINS); NUM_PROFILE_TYPES * NUM_PROFILE_TYPES];
        for i in 0..NUM_PROFILE_TYPES {
            for j in 0..=i {
                let c_hb = params.hydrogen_bonding[i][j];
                let block = DMatrix::from_fn(NUM_BINS, NUM_BINS, |m, n| {
                    let (s_m, s_n) = (sigma[m], sigma[n]);
                    let hb = if s_m * s_n < 0.0 {
                        c_hb * (s_n - s_m).powi(2)
                    } else {
                        0.0
                    };
                    c_es * (s_n + s_m).powi(2) - hb
                });
                blocks[j * NUM_PROFILE_TYPES + i] = block.transpose();
                blocks[i * NUM_PROFILE_TYPES + j] = block;
            }
        }

        Ok(Self {
            temperature,
            blocks,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// The `NUM_BINS` x `NUM_BINS` slice for profile types (i, j), rows
    /// indexed by bin m of type i.
    #[inline]
    pub fn block(&self, i: ProfileType, j: ProfileType) -> &DMatrix<f64> {
        &self.blocks[i.index() * NUM_PROFILE_TYPES + j.index()]
    }

    #[inline]
    pub fn get(&self, i: ProfileType, j: ProfileType, m: usize, n: usize) -> f64 {
        self.block(i, j)[(m, n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(temperature: f64) -> ExchangeEnergy {
        ExchangeEnergy::build(temperature, &CosmoSacParams::default()).unwrap()
    }

    #[test]
    fn tensor_is_symmetric_under_segment_swap() {
        for temperature in [150.0, 298.15, 450.0] {
            let tensor = build(temperature);
            for i in ProfileType::ALL {
                for j in ProfileType::ALL {
                    for m in 0..NUM_BINS {
                        for n in 0..NUM_BINS {
                            assert_eq!(tensor.get(i, j, m, n), tensor.get(j, i, n, m));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn non_hydrogen_bonding_pairs_are_purely_electrostatic() {
        let params = CosmoSacParams::default();
        let tensor = build(298.15);
        let sigma = sigma_grid();
        let c_es = params.electrostatic(298.15);

        // Bins 10 and 40 have opposite sign.
        let expected = c_es * (sigma[10] + sigma[40]).powi(2);
        let nhb = tensor.get(ProfileType::NonHydrogenBonding, ProfileType::Hydroxyl, 10, 40);
        assert!((nhb - expected).abs() < 1e-12);
    }

    #[test]
    fn hydrogen_bonding_correction_applies_only_to_opposite_signs() {
        let params = CosmoSacParams::default();
        let tensor = build(298.15);
        let sigma = sigma_grid();
        let c_es = params.electrostatic(298.15);
        let c_hb = params.hydrogen_bonding[1][1];

        let opposite = tensor.get(ProfileType::Hydroxyl, ProfileType::Hydroxyl, 5, 45);
        let expected = c_es * (sigma[5] + sigma[45]).powi(2) - c_hb * (sigma[45] - sigma[5]).powi(2);
        assert!((opposite - expected).abs() < 1e-9);
        assert!(opposite < 0.0);

        let same_sign = tensor.get(ProfileType::Hydroxyl, ProfileType::Hydroxyl, 40, 45);
        let expected = c_es * (sigma[40] + sigma[45]).powi(2);
        assert!((same_sign - expected).abs() < 1e-12);
    }

    #[test]
    fn center_bin_has_zero_exchange_energy() {
        let tensor = build(298.15);
        for i in ProfileType::ALL {
            for j in ProfileType::ALL {
                assert!(tensor.get(i, j, 25, 25).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn build_rejects_non_positive_temperature() {
        let params = CosmoSacParams::default();
        assert!(matches!(
            ExchangeEnergy::build(0.0, &params),
            Err(InputShapeError::NonPositive {
                quantity: "temperature",
                ..
            })
        ));
        assert!(ExchangeEnergy::build(-10.0, &params).is_err());
    }
}
