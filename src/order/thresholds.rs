//! Per-dimension threshold vectors (slack `σ` and epsilon `ε`).

use std::ops::Deref;

use crate::semiorder_error::SemiorderError;

/// A validated vector of non-negative, finite per-dimension thresholds.
///
/// Used for the slack vector `σ` (indifference band: `|a - b| <= σ[i]` means
/// indifferent in dimension `i`) and for the approximate tracker's epsilon
/// vector `ε` (half-width of the de-duplication box).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Thresholds(Box<[f64]>);

impl Thresholds {
    /// Validate and wrap a threshold vector.
    ///
    /// # Errors
    /// * [`SemiorderError::EmptyThresholds`] if `values` is empty.
    /// * [`SemiorderError::InvalidThreshold`] for a negative, NaN or infinite entry.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self, SemiorderError> {
        let values: Vec<f64> = values.into();
        if values.is_empty() {
            return Err(SemiorderError::EmptyThresholds);
        }
        for (dim, &value) in values.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(SemiorderError::InvalidThreshold { dim, value });
            }
        }
        Ok(Thresholds(values.into_boxed_slice()))
    }

    /// All-zero thresholds of the given dimension (plain lexicographic order).
    pub fn zeros(dim: usize) -> Result<Self, SemiorderError> {
        Self::new(vec![0.0; dim])
    }

    /// Number of dimensions.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Ensure `other` describes the same number of dimensions.
    pub fn check_same_dim(&self, other: &Thresholds) -> Result<(), SemiorderError> {
        if self.dim() != other.dim() {
            return Err(SemiorderError::ThresholdLengthMismatch {
                slack: self.dim(),
                epsilon: other.dim(),
            });
        }
        Ok(())
    }
}

impl Deref for Thresholds {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Thresholds {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Thresholds {
    type Error = SemiorderError;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        Thresholds::new(v)
    }
}

impl<const N: usize> TryFrom<[f64; N]> for Thresholds {
    type Error = SemiorderError;

    fn try_from(v: [f64; N]) -> Result<Self, Self::Error> {
        Thresholds::new(v.to_vec())
    }
}

impl From<Thresholds> for Vec<f64> {
    fn from(t: Thresholds) -> Self {
        t.0.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_non_finite() {
        assert_eq!(
            Thresholds::new(vec![0.1, -0.2]).unwrap_err(),
            SemiorderError::InvalidThreshold { dim: 1, value: -0.2 }
        );
        assert!(matches!(
            Thresholds::new(vec![f64::NAN]).unwrap_err(),
            SemiorderError::InvalidThreshold { dim: 0, .. }
        ));
        assert!(Thresholds::new(vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            Thresholds::new(Vec::new()).unwrap_err(),
            SemiorderError::EmptyThresholds
        );
    }

    #[test]
    fn zero_is_a_valid_slack() {
        let t = Thresholds::zeros(3).unwrap();
        assert_eq!(&*t, &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn same_dim_check() {
        let s = Thresholds::new(vec![0.1, 0.2]).unwrap();
        let e = Thresholds::new(vec![0.01]).unwrap();
        assert_eq!(
            s.check_same_dim(&e).unwrap_err(),
            SemiorderError::ThresholdLengthMismatch {
                slack: 2,
                epsilon: 1
            }
        );
    }
}
