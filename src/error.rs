//! Error types for the emphatic TD crate

use thiserror::Error;

/// Main error type for the emphatic TD crate
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid dimension {dimension}: a learner needs at least one feature")]
    InvalidDimension { dimension: usize },

    #[error("invalid dimension {dimension}: dimension must be positive")]
    NegativeDimension { dimension: i64 },

    #[error("length mismatch for '{argument}': expected {expected} components, got {got}")]
    LengthMismatch {
        argument: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl Error {
    /// Whether this error belongs to the invalid-argument family.
    ///
    /// Every variant currently does; callers matching on the broad kind
    /// should use this rather than enumerating variants.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidDimension { .. }
                | Error::NegativeDimension { .. }
                | Error::LengthMismatch { .. }
                | Error::InvalidConfiguration { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Check that `values` has exactly `expected` components.
pub(crate) fn ensure_len(argument: &'static str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() == expected {
        Ok(())
    } else {
        tracing::debug!(argument, expected, got = values.len(), "rejected vector argument");
        Err(Error::LengthMismatch {
            argument,
            expected,
            got: values.len(),
        })
    }
}
