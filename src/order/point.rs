//! `Point`: an immutable, fixed-dimension objective vector
//!
//! Every observation flowing through a tracker is stored as a `Point`. The
//! coordinates live in a boxed slice, so a point never changes length or
//! value once constructed, and moving it between the candidate and discarded
//! sets is a pointer move.
//!
//! Batch algorithms in [`crate::algs`] do not require `Point`; they accept
//! anything that is `AsRef<[f64]>`. `Point` implements `AsRef<[f64]>` and
//! `Deref<Target = [f64]>` so both styles interoperate.

use std::fmt;
use std::ops::Deref;

use crate::semiorder_error::SemiorderError;

/// An ordered tuple of `d` real coordinates.
///
/// NaN coordinates are rejected by [`Point::new`]; infinities are allowed and
/// compare as usual.
#[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Point(Box<[f64]>);

impl Point {
    /// Build a point from its coordinates.
    ///
    /// # Errors
    /// [`SemiorderError::NanCoordinate`] if any coordinate is NaN.
    pub fn new(coords: impl Into<Vec<f64>>) -> Result<Self, SemiorderError> {
        let coords: Vec<f64> = coords.into();
        if let Some(dim) = coords.iter().position(|c| c.is_nan()) {
            return Err(SemiorderError::NanCoordinate { dim });
        }
        Ok(Point(coords.into_boxed_slice()))
    }

    /// Build a point and check that it has exactly `dim` coordinates.
    pub fn with_dim(coords: impl Into<Vec<f64>>, dim: usize) -> Result<Self, SemiorderError> {
        let p = Self::new(coords)?;
        if p.dim() != dim {
            return Err(SemiorderError::DimensionMismatch {
                expected: dim,
                found: p.dim(),
            });
        }
        Ok(p)
    }

    /// Number of coordinates.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Coordinates as a slice.
    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.0
    }

    /// `true` if `self[i] >= other[i] - tol[i]` in every dimension, i.e. `self`
    /// is not clearly below the `tol`-box around `other` anywhere.
    pub fn within_lower_box(&self, other: &[f64], tol: &[f64]) -> bool {
        self.0
            .iter()
            .zip(other)
            .zip(tol)
            .all(|((&a, &b), &t)| a >= b - t)
    }
}

impl Deref for Point {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Point {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = SemiorderError;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        Point::new(v)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = SemiorderError;

    fn try_from(v: &[f64]) -> Result<Self, Self::Error> {
        Point::new(v.to_vec())
    }
}

impl<const N: usize> TryFrom<[f64; N]> for Point {
    type Error = SemiorderError;

    fn try_from(v: [f64; N]) -> Result<Self, Self::Error> {
        Point::new(v.to_vec())
    }
}

impl From<Point> for Vec<f64> {
    fn from(p: Point) -> Self {
        p.0.into_vec()
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point").field(&&*self.0).finish()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}
