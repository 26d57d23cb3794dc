//! Linear temporal-difference learners
//!
//! Three update rules share the same linear state (a weight vector and an
//! eligibility trace of fixed length):
//!
//! | Learner | Off-policy | Emphasis | True-online correction |
//! |---------|------------|----------|------------------------|
//! | [`TrueOnlineEmphaticTd`] | yes | yes | yes |
//! | [`EmphaticTd`] | yes | yes | no |
//! | [`TdLambda`] | no | no | no |
//!
//! All of them validate every vector length before touching state, so a
//! rejected call never leaves a partial update behind.

pub mod emphatic;
pub mod lambda;
pub mod true_online;

pub use emphatic::EmphaticTd;
pub use lambda::TdLambda;
pub use true_online::TrueOnlineEmphaticTd;

use crate::{
    Transition,
    error::{Error, Result, ensure_len},
    linalg::dot_unchecked,
};

/// Convert a signed dimension into a learner dimension.
///
/// Useful when the feature count comes from an external source that may
/// hand over zero or a negative number.
///
/// # Errors
///
/// [`Error::NegativeDimension`] for negative values and
/// [`Error::InvalidDimension`] for zero.
pub fn try_dimension(dimension: i64) -> Result<usize> {
    if dimension < 0 {
        return Err(Error::NegativeDimension { dimension });
    }
    let dimension = usize::try_from(dimension).map_err(|_| Error::InvalidConfiguration {
        message: format!("dimension {dimension} does not fit in memory"),
    })?;
    if dimension == 0 {
        return Err(Error::InvalidDimension { dimension });
    }
    Ok(dimension)
}

/// Weight vector and eligibility trace of one learner.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LinearState {
    pub weights: Vec<f64>,
    pub trace: Vec<f64>,
}

impl LinearState {
    pub fn new(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::InvalidDimension { dimension });
        }
        Ok(Self {
            weights: vec![0.0; dimension],
            trace: vec![0.0; dimension],
        })
    }

    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    pub fn check(&self, transition: &Transition<'_>) -> Result<()> {
        ensure_len("phi", transition.phi, self.dimension())?;
        ensure_len("phi_next", transition.phi_next, self.dimension())
    }

    /// δ = R + γ' θᵀφ' − θᵀφ, for an already checked transition.
    pub fn td_error(&self, transition: &Transition<'_>) -> f64 {
        let value = dot_unchecked(&self.weights, transition.phi);
        let next_value = dot_unchecked(&self.weights, transition.phi_next);
        transition.reward + transition.params.gamma_next * next_value - value
    }

    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        ensure_len("features", features, self.dimension())?;
        Ok(dot_unchecked(&self.weights, features))
    }

    pub fn clear(&mut self) {
        self.weights.fill(0.0);
        self.trace.fill(0.0);
    }
}
