//! Ports (trait boundaries) for callers driving a learner.
//!
//! The training loop, feature construction and persistence live outside this
//! crate; they talk to the learners only through these traits.

pub mod learner;

pub use learner::Learner;
