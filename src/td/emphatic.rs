//! Emphatic TD(λ) without the true-online correction
//!
//! ```text
//! F  ← F + I
//! δ  = R + γ' θᵀφ' − θᵀφ
//! M  = λI + (1 − λ)F
//! e  ← ρ (M φ + γλ e)
//! θ  ← θ + α δ e
//! F  ← ργ' F
//! ```

use tracing::{debug, trace};

use crate::{Result, Transition, ports::Learner, td::LinearState};

/// Emphatic TD(λ) learner
#[derive(Debug, Clone, PartialEq)]
pub struct EmphaticTd {
    state: LinearState,
    followon: f64,
}

impl EmphaticTd {
    /// Create a learner over `dimension` features with all state at zero.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] if `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self> {
        let state = LinearState::new(dimension)?;
        debug!(dimension, "created emphatic TD learner");
        Ok(Self {
            state,
            followon: 0.0,
        })
    }

    /// Eligibility trace e.
    pub fn trace(&self) -> &[f64] {
        &self.state.trace
    }

    /// Followon trace F, already discounted for the next step.
    pub fn followon(&self) -> f64 {
        self.followon
    }

    /// Consume the learner and keep its weights.
    pub fn into_weights(self) -> Vec<f64> {
        self.state.weights
    }
}

impl Learner for EmphaticTd {
    fn name(&self) -> &str {
        "emphatic"
    }

    fn dimension(&self) -> usize {
        self.state.dimension()
    }

    fn learn(&mut self, transition: &Transition<'_>) -> Result<f64> {
        self.state.check(transition)?;
        let p = transition.params;

        let followon = self.followon + p.interest;
        let delta = self.state.td_error(transition);
        let emphasis = p.lambda * p.interest + (1.0 - p.lambda) * followon;
        let decay = p.gamma * p.lambda;
        let step = p.alpha * delta;

        for ((w, e), &x) in self
            .state
            .weights
            .iter_mut()
            .zip(self.state.trace.iter_mut())
            .zip(transition.phi)
        {
            *e = p.rho * (emphasis * x + decay * *e);
            *w += step * *e;
        }

        self.followon = followon * p.rho * p.gamma_next;
        trace!(delta, emphasis, followon = self.followon, "emphatic step");
        Ok(delta)
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        self.state.predict(features)
    }

    fn weights(&self) -> &[f64] {
        &self.state.weights
    }

    fn reset(&mut self) {
        self.state.clear();
        self.followon = 0.0;
    }
}
