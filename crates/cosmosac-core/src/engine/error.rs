use super::config::ConfigError;
use crate::core::models::error::InputShapeError;
use crate::core::models::molecule::DescriptorError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InputShape(#[from] InputShapeError),

    #[error("Atom {index} has unclassifiable element '{symbol}'")]
    UnclassifiableAtom { index: usize, symbol: String },

    #[error("Segment activities failed to converge after {iterations} iterations (residual {residual:.3e})")]
    Convergence { iterations: usize, residual: f64 },

    #[error("Segment activities became non-finite at iteration {iteration}")]
    NumericalBreakdown { iteration: usize },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl From<DescriptorError> for EngineError {
    fn from(error: DescriptorError) -> Self {
        match error {
            DescriptorError::Shape(shape) => Self::InputShape(shape),
            DescriptorError::UnclassifiableAtom { index, symbol } => {
                Self::UnclassifiableAtom { index, symbol }
            }
        }
    }
}
