//! Common test utilities for the emphatic TD test suite.
#![allow(dead_code)]

use emphatic_td::StepParams;
use rand::{Rng, rngs::StdRng};

/// Draw a vector of `n` components uniformly from [-1, 1).
pub fn random_vector(n: usize, rng: &mut StdRng) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Draw step parameters inside their nominal ranges.
pub fn random_params(rng: &mut StdRng) -> StepParams {
    StepParams {
        alpha: rng.random_range(0.0..0.1),
        gamma: rng.random_range(0.0..=1.0),
        gamma_next: rng.random_range(0.0..=1.0),
        interest: rng.random_range(0.0..=1.0),
        lambda: rng.random_range(0.0..=1.0),
        rho: rng.random_range(0.0..2.0),
    }
}

/// One recorded transition with owned feature vectors.
#[derive(Debug, Clone)]
pub struct Step {
    pub phi: Vec<f64>,
    pub reward: f64,
    pub phi_next: Vec<f64>,
    pub params: StepParams,
}

/// Generate a trajectory where each step's next features become the
/// following step's current features.
pub fn random_trajectory(n: usize, len: usize, rng: &mut StdRng) -> Vec<Step> {
    let mut steps = Vec::with_capacity(len);
    let mut phi = random_vector(n, rng);
    let mut gamma = 1.0;
    for _ in 0..len {
        let phi_next = random_vector(n, rng);
        let mut params = random_params(rng);
        params.gamma = gamma;
        gamma = params.gamma_next;
        steps.push(Step {
            phi: phi.clone(),
            reward: rng.random_range(-1.0..1.0),
            phi_next: phi_next.clone(),
            params,
        });
        phi = phi_next;
    }
    steps
}

pub fn approx_eq_tol(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}
