//! Configuration types for learner creation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    ports::Learner,
    td::{EmphaticTd, TdLambda, TrueOnlineEmphaticTd},
};

/// Which update rule a learner applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// True-online emphatic TD(λ)
    #[default]
    TrueOnlineEmphatic,
    /// Emphatic TD(λ) without the true-online correction
    Emphatic,
    /// On-policy TD(λ) with accumulating traces
    Td,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::TrueOnlineEmphatic => "true_online_emphatic",
            Algorithm::Emphatic => "emphatic",
            Algorithm::Td => "td",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "true_online_emphatic" | "toetd" => Ok(Algorithm::TrueOnlineEmphatic),
            "emphatic" | "etd" => Ok(Algorithm::Emphatic),
            "td" | "td_lambda" => Ok(Algorithm::Td),
            other => Err(Error::InvalidConfiguration {
                message: format!(
                    "unknown algorithm '{other}' (expected true_online_emphatic, emphatic or td)"
                ),
            }),
        }
    }
}

/// Configuration for creating a learner.
///
/// # Examples
///
/// ```
/// use emphatic_td::{Algorithm, LearnerConfig};
///
/// let learner = LearnerConfig::new(8)
///     .with_algorithm(Algorithm::Emphatic)
///     .build()?;
/// assert_eq!(learner.dimension(), 8);
/// assert_eq!(learner.name(), "emphatic");
/// # Ok::<(), emphatic_td::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerConfig {
    /// Number of features
    pub dimension: usize,
    /// Update rule
    #[serde(default)]
    pub algorithm: Algorithm,
}

impl LearnerConfig {
    /// Create a configuration for the default (true-online emphatic) learner.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            algorithm: Algorithm::default(),
        }
    }

    /// Set the update rule.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(Error::InvalidDimension {
                dimension: self.dimension,
            });
        }
        Ok(())
    }

    /// Construct the configured learner.
    pub fn build(&self) -> Result<Box<dyn Learner>> {
        self.validate()?;
        debug!(dimension = self.dimension, algorithm = %self.algorithm, "building learner");
        Ok(match self.algorithm {
            Algorithm::TrueOnlineEmphatic => Box::new(TrueOnlineEmphaticTd::new(self.dimension)?),
            Algorithm::Emphatic => Box::new(EmphaticTd::new(self.dimension)?),
            Algorithm::Td => Box::new(TdLambda::new(self.dimension)?),
        })
    }
}
