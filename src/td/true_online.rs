//! True-online emphatic TD(λ)
//!
//! Off-policy linear prediction with emphasis weighting and the true-online
//! correction. Per transition, with ρ the importance-sampling ratio:
//!
//! ```text
//! F  ← F + I
//! δ  = R + γ' θᵀφ' − θᵀφ
//! M  = λI + (1 − λ)F
//! S  = ραM (1 − ργλ φᵀe)
//! e  ← ργλ e + S φ
//! Δ  = δ e + D (e − ραM φ)
//! θ  ← θ + Δ
//! D  ← Δᵀφ'
//! F  ← ργ' F
//! ```

use tracing::{debug, trace};

use crate::{Result, Transition, linalg::dot_unchecked, ports::Learner, td::LinearState};

/// True-online emphatic TD(λ) learner
///
/// # Examples
///
/// ```
/// use emphatic_td::{Learner, Transition, TrueOnlineEmphaticTd};
///
/// let mut learner = TrueOnlineEmphaticTd::new(2)?;
/// let phi = [1.0, 0.0];
/// let phi_next = [0.0, 1.0];
/// learner.learn(
///     &Transition::new(&phi, 1.0, &phi_next)
///         .with_alpha(0.1)
///         .with_gamma(0.9)
///         .with_gamma_next(0.9),
/// )?;
/// assert!((learner.weights()[0] - 0.1).abs() < 1e-12);
/// # Ok::<(), emphatic_td::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrueOnlineEmphaticTd {
    state: LinearState,
    /// Followon trace F
    followon: f64,
    /// True-online correction D carried to the next step
    dual: f64,
}

impl TrueOnlineEmphaticTd {
    /// Create a learner over `dimension` features with all state at zero.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] if `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self> {
        let state = LinearState::new(dimension)?;
        debug!(dimension, "created true-online emphatic TD learner");
        Ok(Self {
            state,
            followon: 0.0,
            dual: 0.0,
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

    /// Correction term D carried into the next update.
    pub fn dual(&self) -> f64 {
        self.dual
    }

    /// Consume the learner and keep its weights.
    pub fn into_weights(self) -> Vec<f64> {
        self.state.weights
    }
}

impl Learner for TrueOnlineEmphaticTd {
    fn name(&self) -> &str {
        "true_online_emphatic"
    }

    fn dimension(&self) -> usize {
        self.state.dimension()
    }

    fn learn(&mut self, transition: &Transition<'_>) -> Result<f64> {
        self.state.check(transition)?;
        let p = transition.params;
        let (phi, phi_next) = (transition.phi, transition.phi_next);

        let followon = self.followon + p.interest;
        let delta = self.state.td_error(transition);
        let emphasis = p.lambda * p.interest + (1.0 - p.lambda) * followon;
        let decay = p.rho * p.gamma * p.lambda;
        let step = p.rho * p.alpha * emphasis;
        let scale = step * (1.0 - decay * dot_unchecked(phi, &self.state.trace));

        let mut dual_next = 0.0;
        for (((w, e), &x), &x_next) in self
            .state
            .weights
            .iter_mut()
            .zip(self.state.trace.iter_mut())
            .zip(phi)
            .zip(phi_next)
        {
            *e = decay * *e + scale * x;
            let update = delta * *e + self.dual * (*e - step * x);
            *w += update;
            dual_next += update * x_next;
        }

        self.dual = dual_next;
        self.followon = followon * p.rho * p.gamma_next;
        trace!(
            delta,
            emphasis,
            followon = self.followon,
            dual = self.dual,
            "true-online emphatic step"
        );
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
        self.dual = 0.0;
    }
}
