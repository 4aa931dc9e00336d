use crate::core::typing::classifier::{ClassifierConfig, ScanTermination};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Limits for the segment-activity fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub max_iterations: usize,
    /// Largest relative change of any segment activity accepted as converged.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tolerance: 1e-4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GammaConfig {
    pub solver: SolverConfig,
    pub classifier: ClassifierConfig,
    /// Allowed deviation of the mole-fraction sum from one.
    pub composition_tolerance: f64,
    /// Reuse exchange energies across evaluations at the same temperature.
    pub cache_exchange: bool,
}

impl Default for GammaConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            classifier: ClassifierConfig::default(),
            composition_tolerance: 1e-6,
            cache_exchange: true,
        }
    }
}

#[derive(Default)]
pub struct GammaConfigBuilder {
    max_iterations: Option<usize>,
    tolerance: Option<f64>,
    scan_termination: Option<ScanTermination>,
    composition_tolerance: Option<f64>,
    cache_exchange: Option<bool>,
}

impl GammaConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    pub fn scan_termination(mut self, termination: ScanTermination) -> Self {
        self.scan_termination = Some(termination);
        self
    }
    pub fn composition_tolerance(mut self, tolerance: f64) -> Self {
        self.composition_tolerance = Some(tolerance);
        self
    }
    pub fn cache_exchange(mut self, enabled: bool) -> Self {
        self.cache_exchange = Some(enabled);
        self
    }

    pub fn build(self) -> Result<GammaConfig, ConfigError> {
        let defaults = GammaConfig::default();

        let max_iterations = self
            .max_iterations
            .unwrap_or(defaults.solver.max_iterations);
        if max_iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }

        let tolerance = self.tolerance.unwrap_or(defaults.solver.tolerance);
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "tolerance",
                reason: format!("must be positive and finite, got {tolerance}"),
            });
        }

        let composition_tolerance = self
            .composition_tolerance
            .unwrap_or(defaults.composition_tolerance);
        if !(composition_tolerance.is_finite() && composition_tolerance >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "composition_tolerance",
                reason: format!("must be non-negative and finite, got {composition_tolerance}"),
            });
        }

        Ok(GammaConfig {
            solver: SolverConfig {
                max_iterations,
                tolerance,
            },
            classifier: ClassifierConfig {
                termination: self
                    .scan_termination
                    .unwrap_or(defaults.classifier.termination),
            },
            composition_tolerance,
            cache_exchange: self.cache_exchange.unwrap_or(defaults.cache_exchange),
        })
    }
}
