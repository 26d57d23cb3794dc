//! Learner port - abstraction over linear TD prediction algorithms
//!
//! All learners in this crate estimate a value function `v(s) ≈ θᵀφ(s)` from
//! a single sequential stream of transitions. The trait lets a training loop
//! switch between them without knowing which update rule is in use.

use crate::{Result, Transition};

/// Unified interface for incremental linear value learners
///
/// # Examples
///
/// ```
/// use emphatic_td::{Learner, Transition, TrueOnlineEmphaticTd};
///
/// fn run<L: Learner + ?Sized>(learner: &mut L, steps: &[([f64; 2], f64, [f64; 2])]) -> emphatic_td::Result<()> {
///     for (phi, reward, phi_next) in steps {
///         learner.learn(&Transition::new(phi, *reward, phi_next).with_alpha(0.1))?;
///     }
///     Ok(())
/// }
///
/// let mut learner = TrueOnlineEmphaticTd::new(2)?;
/// run(&mut learner, &[([1.0, 0.0], 1.0, [0.0, 1.0])])?;
/// assert!(learner.predict(&[1.0, 0.0])? > 0.0);
/// # Ok::<(), emphatic_td::Error>(())
/// ```
pub trait Learner: Send {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Number of features every vector argument must have.
    fn dimension(&self) -> usize;

    /// Apply one transition and return its TD error δ.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::LengthMismatch`] if `phi` or `phi_next` does
    /// not have [`Learner::dimension`] components. A rejected call leaves the
    /// learner untouched.
    fn learn(&mut self, transition: &Transition<'_>) -> Result<f64>;

    /// Current value estimate `θᵀ features`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::LengthMismatch`] on a wrong-length vector.
    fn predict(&self, features: &[f64]) -> Result<f64>;

    /// Current weight vector θ.
    fn weights(&self) -> &[f64];

    /// Return to the freshly constructed state, keeping the dimension.
    fn reset(&mut self);
}
