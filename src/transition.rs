//! Transitions and per-step learning parameters

use serde::{Deserialize, Serialize};

/// Scalar parameters that accompany one transition.
///
/// The defaults describe on-policy TD(0): full interest, no trace decay,
/// undiscounted continuation and a unit importance-sampling ratio.
///
/// ```
/// use emphatic_td::StepParams;
///
/// let params = StepParams::default()
///     .with_alpha(0.1)
///     .with_gamma(0.9)
///     .with_gamma_next(0.9)
///     .with_lambda(0.8);
/// assert_eq!(params.rho, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepParams {
    /// Step-size α
    pub alpha: f64,
    /// Discount γ of the current state
    pub gamma: f64,
    /// Discount γ' applied from the next state onward
    pub gamma_next: f64,
    /// Interest I in the current state
    pub interest: f64,
    /// Trace-decay λ
    pub lambda: f64,
    /// Importance-sampling ratio ρ = π(a|s) / μ(a|s)
    pub rho: f64,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            alpha: 0.01,
            gamma: 1.0,
            gamma_next: 1.0,
            interest: 1.0,
            lambda: 0.0,
            rho: 1.0,
        }
    }
}

impl StepParams {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_gamma_next(mut self, gamma_next: f64) -> Self {
        self.gamma_next = gamma_next;
        self
    }

    pub fn with_interest(mut self, interest: f64) -> Self {
        self.interest = interest;
        self
    }

    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }
}

/// One observed transition `(phi, reward, phi_next)` with its parameters.
///
/// Feature vectors are borrowed; the caller keeps ownership of its buffers.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    pub phi: &'a [f64],
    pub reward: f64,
    pub phi_next: &'a [f64],
    pub params: StepParams,
}

impl<'a> Transition<'a> {
    /// Create a transition with default [`StepParams`].
    pub fn new(phi: &'a [f64], reward: f64, phi_next: &'a [f64]) -> Self {
        Self {
            phi,
            reward,
            phi_next,
            params: StepParams::default(),
        }
    }

    pub fn with_params(mut self, params: StepParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.params.alpha = alpha;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.params.gamma = gamma;
        self
    }

    pub fn with_gamma_next(mut self, gamma_next: f64) -> Self {
        self.params.gamma_next = gamma_next;
        self
    }

    pub fn with_interest(mut self, interest: f64) -> Self {
        self.params.interest = interest;
        self
    }

    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.params.lambda = lambda;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.params.rho = rho;
        self
    }
}
