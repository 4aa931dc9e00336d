use crate::core::cosmo::dispersion::{self, DispersionProfile};
use crate::core::cosmo::exchange::ExchangeEnergy;
use crate::core::cosmo::params::CosmoSacParams;
use crate::core::cosmo::{combinatorial, term::LnGammaTerm};
use crate::core::models::molecule::MoleculeDescriptor;
use crate::core::models::sigma::SigmaProfile;
use crate::core::typing::category::DispersiveNature;
use crate::core::typing::classifier::{AtomClassification, classify_molecule};
use crate::engine::cache::ExchangeCache;
use crate::engine::config::GammaConfig;
use crate::engine::error::EngineError;
use crate::engine::solver::SegmentActivitySolver;
use crate::engine::validate;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Activity coefficient of one component with its ln γ breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentGamma {
    pub name: Option<String>,
    pub terms: LnGammaTerm,
    pub gamma: f64,
    pub nature: DispersiveNature,
    /// `None` when the molecule has atoms without a dispersion constant.
    pub dispersion: Option<DispersionProfile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GammaResult {
    pub temperature: f64,
    pub components: Vec<ComponentGamma>,
}

impl GammaResult {
    pub fn gammas(&self) -> Vec<f64> {
        self.components.iter().map(|c| c.gamma).collect()
    }

    pub fn ln_gammas(&self) -> Vec<f64> {
        self.components.iter().map(|c| c.terms.total()).collect()
    }
}

/// COSMO-SAC model bound to one parameter set and configuration.
///
/// Queries are independent; the only state carried between them is the
/// exchange-energy cache, which never changes an already computed entry.
#[derive(Debug, Default)]
pub struct ActivityModel {
    params: CosmoSacParams,
    config: GammaConfig,
    cache: ExchangeCache,
}

impl ActivityModel {
    pub fn new(params: CosmoSacParams, config: GammaConfig) -> Self {
        Self {
            params,
            config,
            cache: ExchangeCache::new(),
        }
    }

    pub fn params(&self) -> &CosmoSacParams {
        &self.params
    }

    pub fn config(&self) -> &GammaConfig {
        &self.config
    }

    /// Atom typing and dispersive nature of each molecule.
    pub fn classify(&self, molecules: &[MoleculeDescriptor]) -> Vec<AtomClassification> {
        #[cfg(not(feature = "parallel"))]
        let iterator = molecules.iter();

        #[cfg(feature = "parallel")]
        let iterator = molecules.par_iter();

        iterator
            .map(|molecule| classify_molecule(molecule, &self.config.classifier))
            .collect()
    }

    #[instrument(skip_all, name = "gamma_workflow")]
    pub fn evaluate(
        &self,
        molecules: &[MoleculeDescriptor],
        composition: &[f64],
        temperature: f64,
    ) -> Result<GammaResult, EngineError> {
        let temperature = validate::temperature(temperature)?;
        validate::composition(composition, molecules.len(), self.config.composition_tolerance)?;
        info!(
            components = molecules.len(),
            temperature, "Evaluating activity coefficients."
        );

        let classifications = self.classify(molecules);
        let dispersion_profiles: Vec<Option<DispersionProfile>> = classifications
            .iter()
            .map(|c| DispersionProfile::from_classification(c, &self.params.dispersion))
            .collect();

        let areas: Vec<f64> = molecules.iter().map(|m| m.area()).collect();
        let volumes: Vec<f64> = molecules.iter().map(|m| m.volume()).collect();
        let profiles: Vec<&SigmaProfile> = molecules.iter().map(|m| m.sigma_profile()).collect();

        let exchange = self.exchange(temperature)?;
        let solver = SegmentActivitySolver::new(&exchange, &self.params, self.config.solver);

        let ln_comb = combinatorial::ln_gamma(&areas, &volumes, composition, &self.params)?;
        let ln_res = solver.ln_gamma(&profiles, &areas, composition)?;
        let ln_dsp = dispersion::ln_gamma(&dispersion_profiles, composition, &self.params)?;

        let components: Vec<ComponentGamma> = molecules
            .iter()
            .zip(&classifications)
            .zip(&dispersion_profiles)
            .enumerate()
            .map(|(i, ((molecule, classification), &dispersion))| {
                let terms = LnGammaTerm::new(ln_comb[i], ln_res[i], ln_dsp[i]);
                debug!(
                    component = i,
                    combinatorial = terms.combinatorial,
                    residual = terms.residual,
                    dispersive = terms.dispersive,
                    "Computed ln gamma terms."
                );
                ComponentGamma {
                    name: molecule.name().map(str::to_string),
                    terms,
                    gamma: terms.gamma(),
                    nature: classification.nature(),
                    dispersion,
                }
            })
            .collect();

        info!("Activity coefficients evaluated.");
        Ok(GammaResult {
            temperature,
            components,
        })
    }

    pub fn activity_coefficients(
        &self,
        molecules: &[MoleculeDescriptor],
        composition: &[f64],
        temperature: f64,
    ) -> Result<Vec<f64>, EngineError> {
        Ok(self.evaluate(molecules, composition, temperature)?.gammas())
    }

    fn exchange(&self, temperature: f64) -> Result<Arc<ExchangeEnergy>, EngineError> {
        if self.config.cache_exchange {
            Ok(self.cache.get_or_build(temperature, &self.params)?)
        } else {
            Ok(Arc::new(ExchangeEnergy::build(temperature, &self.params)?))
        }
    }
}

/// Activity coefficients of `molecules` at mole fractions `composition` and
/// `temperature` [K], with the published parameters and default solver
/// settings.
pub fn calculate_gamma(
    molecules: &[MoleculeDescriptor],
    composition: &[f64],
    temperature: f64,
) -> Result<Vec<f64>, EngineError> {
    ActivityModel::default().activity_coefficients(molecules, composition, temperature)
}
