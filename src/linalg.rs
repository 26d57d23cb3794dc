//! Dense vector helpers shared by the learners

use crate::error::{Result, ensure_len};

/// Inner product of two vectors of equal length.
///
/// # Errors
///
/// Returns [`crate::Error::LengthMismatch`] if the vectors differ in length.
///
/// # Examples
///
/// ```
/// use emphatic_td::dot;
///
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])?, 32.0);
/// # Ok::<(), emphatic_td::Error>(())
/// ```
pub fn dot(v1: &[f64], v2: &[f64]) -> Result<f64> {
    ensure_len("v2", v2, v1.len())?;
    Ok(dot_unchecked(v1, v2))
}

/// Inner product for vectors whose lengths were already validated.
pub(crate) fn dot_unchecked(v1: &[f64], v2: &[f64]) -> f64 {
    debug_assert_eq!(v1.len(), v2.len());
    v1.iter().zip(v2).map(|(a, b)| a * b).sum()
}
