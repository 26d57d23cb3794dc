//! On-policy TD(λ) with accumulating traces
//!
//! ```text
//! δ  = R + γ' θᵀφ' − θᵀφ
//! e  ← φ + γλ e
//! θ  ← θ + α δ e
//! ```
//!
//! Interest and the importance-sampling ratio are ignored; under off-policy
//! sampling this learner can diverge.

use tracing::{debug, trace};

use crate::{Result, Transition, ports::Learner, td::LinearState};

/// TD(λ) learner with accumulating eligibility traces
#[derive(Debug, Clone, PartialEq)]
pub struct TdLambda {
    state: LinearState,
}

impl TdLambda {
    /// Create a learner over `dimension` features with all state at zero.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] if `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self> {
        let state = LinearState::new(dimension)?;
        debug!(dimension, "created TD(lambda) learner");
        Ok(Self { state })
    }

    /// Eligibility trace e.
    pub fn trace(&self) -> &[f64] {
        &self.state.trace
    }

    /// Consume the learner and keep its weights.
    pub fn into_weights(self) -> Vec<f64> {
        self.state.weights
    }
}

impl Learner for TdLambda {
    fn name(&self) -> &str {
        "td"
    }

    fn dimension(&self) -> usize {
        self.state.dimension()
    }

    fn learn(&mut self, transition: &Transition<'_>) -> Result<f64> {
        self.state.check(transition)?;
        let p = transition.params;
        let delta = self.state.td_error(transition);
        let decay = p.gamma * p.lambda;
        let step = p.alpha * delta;

        for ((w, e), &x) in self
            .state
            .weights
            .iter_mut()
            .zip(self.state.trace.iter_mut())
            .zip(transition.phi)
        {
            *e = x + decay * *e;
            *w += step * *e;
        }

        trace!(delta, "td step");
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
    }
}
