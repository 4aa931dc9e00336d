use super::config::SolverConfig;
use super::error::EngineError;
use crate::core::cosmo::exchange::ExchangeEnergy;
use crate::core::cosmo::params::CosmoSacParams;
use crate::core::models::error::ensure_component_counts;
use crate::core::models::sigma::{NUM_BINS, NUM_PROFILE_TYPES, ProfileType, SigmaProfile};
use nalgebra::{DMatrix, DVector};
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Weight of the freshly computed iterate relative to the previous one.
const DAMPING: f64 = 1.618;

/// Converged segment activity coefficients, one `NUM_BINS` x
/// `NUM_PROFILE_TYPES` matrix per input distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentActivities {
    pub activities: Vec<DMatrix<f64>>,
    pub iterations: usize,
    pub residual: f64,
}

/// Damped fixed-point solver for segment activity coefficients at one
/// temperature.
#[derive(Debug, Clone)]
pub struct SegmentActivitySolver {
    /// exp(−ΔW/RT), indexed `t * NUM_PROFILE_TYPES + s`.
    boltzmann: Vec<DMatrix<f64>>,
    effective_area: f64,
    config: SolverConfig,
}

impl SegmentActivitySolver {
    pub fn new(exchange: &ExchangeEnergy, params: &CosmoSacParams, config: SolverConfig) -> Self {
        let rt = params.gas_constant * exchange.temperature();
        let boltzmann = ProfileType::ALL
            .iter()
            .flat_map(|&t| {
                ProfileType::ALL
                    .iter()
                    .map(move |&s| exchange.block(t, s).map(|w| (-w / rt).exp()))
            })
            .collect();

        Self {
            boltzmann,
            effective_area: params.effective_area,
            config,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Iterates Γ(σ) = 1 / Σ p(σ') Γ(σ') exp(−ΔW/RT) for every distribution
    /// at once, starting from Γ = 1. Convergence is judged on the largest
    /// relative change across all distributions.
    #[instrument(skip_all, name = "segment_activity_solver")]
    pub fn solve(&self, distributions: &[DMatrix<f64>]) -> Result<SegmentActivities, EngineError> {
        let mut gammas: Vec<DMatrix<f64>> = distributions
            .iter()
            .map(|_| DMatrix::from_element(NUM_BINS, NUM_PROFILE_TYPES, 1.0))
            .collect();
        let mut residual = f64::INFINITY;

        for iteration in 1..=self.config.max_iterations {
            #[cfg(not(feature = "parallel"))]
            let iterator = distributions.iter().zip(gammas.iter());

            #[cfg(feature = "parallel")]
            let iterator = distributions.par_iter().zip(gammas.par_iter());

            let updated: Vec<DMatrix<f64>> = iterator
                .map(|(distribution, gamma)| self.damped_update(distribution, gamma))
                .collect();

            if updated
                .iter()
                .any(|g| g.iter().any(|&v| !v.is_finite() || v <= 0.0))
            {
                return Err(EngineError::NumericalBreakdown { iteration });
            }

            residual = updated
                .iter()
                .zip(&gammas)
                .map(|(new, old)| relative_change(new, old))
                .fold(0.0, f64::max);
            gammas = updated;

            trace!(iteration, residual, "Segment activity iteration.");

            if residual <= self.config.tolerance {
                debug!(iterations = iteration, residual, "Segment activities converged.");
                return Ok(SegmentActivities {
                    activities: gammas,
                    iterations: iteration,
                    residual,
                });
            }
        }

        Err(EngineError::Convergence {
            iterations: self.config.max_iterations,
            residual,
        })
    }

    /// Residual contribution to ln γ of each component.
    ///
    /// `profiles`, `areas` and `composition` are parallel slices; their
    /// values must already be validated.
    pub fn ln_gamma(
        &self,
        profiles: &[&SigmaProfile],
        areas: &[f64],
        composition: &[f64],
    ) -> Result<Vec<f64>, EngineError> {
        ensure_component_counts(profiles.len(), composition, &[("areas", areas.len())])?;
        let mut distributions: Vec<DMatrix<f64>> = profiles
            .iter()
            .zip(areas)
            .map(|(profile, &area)| profile.as_matrix() / area)
            .collect();
        distributions.push(mixture_distribution(profiles, areas, composition));

        let SegmentActivities { mut activities, .. } = self.solve(&distributions)?;
        let ln_mixture = activities
            .pop()
            .map(|g| g.map(f64::ln))
            .unwrap_or_else(|| DMatrix::zeros(NUM_BINS, NUM_PROFILE_TYPES));

        Ok(profiles
            .iter()
            .zip(&activities)
            .map(|(profile, gamma)| {
                let difference = &ln_mixture - gamma.map(f64::ln);
                profile.as_matrix().dot(&difference) / self.effective_area
            })
            .collect())
    }

    fn damped_update(&self, distribution: &DMatrix<f64>, gamma: &DMatrix<f64>) -> DMatrix<f64> {
        let weighted = distribution.component_mul(gamma);
        let mut next = DMatrix::zeros(NUM_BINS, NUM_PROFILE_TYPES);

        for t in 0..NUM_PROFILE_TYPES {
            let mut sum = DVector::zeros(NUM_BINS);
            for s in 0..NUM_PROFILE_TYPES {
                let block = &self.boltzmann[t * NUM_PROFILE_TYPES + s];
                sum.gemv(1.0, block, &weighted.column(s), 1.0);
            }
            for m in 0..NUM_BINS {
                next[(m, t)] = (DAMPING / sum[m] + gamma[(m, t)]) / (1.0 + DAMPING);
            }
        }
        next
    }
}

/// Area-normalised profile of the mixture: Σ xᵢPᵢ / Σ xᵢAᵢ.
fn mixture_distribution(profiles: &[&SigmaProfile], areas: &[f64], composition: &[f64]) -> DMatrix<f64> {
    let mut total = DMatrix::zeros(NUM_BINS, NUM_PROFILE_TYPES);
    let mut area = 0.0;
    for ((profile, &a), &x) in profiles.iter().zip(areas).zip(composition) {
        total += profile.as_matrix() * x;
        area += x * a;
    }
    total / area
}

fn relative_change(new: &DMatrix<f64>, old: &DMatrix<f64>) -> f64 {
    new.iter()
        .zip(old.iter())
        .map(|(n, o)| ((n - o) / o).abs())
        .fold(0.0, f64::max)
}
