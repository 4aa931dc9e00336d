/// The three additive contributions to ln γ of one component.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LnGammaTerm {
    pub combinatorial: f64,
    pub residual: f64,
    pub dispersive: f64,
}

impl LnGammaTerm {
    pub fn new(combinatorial: f64, residual: f64, dispersive: f64) -> Self {
        Self {
            combinatorial,
            residual,
            dispersive,
        }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.combinatorial + self.residual + self.dispersive
    }

    /// The activity coefficient γ = exp(ln γ).
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.total().exp()
    }
}
