//! Emphatic temporal-difference learning with linear function approximation
//!
//! This crate provides:
//! - True-online emphatic TD(λ), an off-policy value learner with constant
//!   per-step cost
//! - Emphatic TD(λ) without the true-online correction
//! - On-policy TD(λ) as a baseline
//! - A shared [`Learner`] port so training loops can swap update rules
//!
//! Feature construction, environments, policies and persistence belong to
//! the caller.

pub mod config;
pub mod error;
pub mod linalg;
pub mod ports;
pub mod td;
pub mod transition;

pub use config::{Algorithm, LearnerConfig};
pub use error::{Error, Result};
pub use linalg::dot;
pub use ports::Learner;
pub use td::{EmphaticTd, TdLambda, TrueOnlineEmphaticTd, try_dimension};
pub use transition::{StepParams, Transition};
