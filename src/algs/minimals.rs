//! Coordinate-wise minimal-set extraction (survivor filtering).
//!
//! For `i = 0..d`, the minimum value of dimension `i` over the current
//! survivors is found, every survivor within `σ[i]` of it is kept, and the
//! rest is moved to the retained set. The next dimension only looks at the
//! kept subset. The result partitions the input: `minimals ∪ retained` is the
//! whole set and the two never overlap.
//!
//! The same filter with `σ = 0` keeps only the points sitting exactly on the
//! per-dimension minimum, which is the tie-break step of [`crate::algs::ebo`].

use crate::algs::check_dims;
use crate::order::Thresholds;
use crate::semiorder_error::SemiorderError;

/// Partition of a point set into its minimal subset and the remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimalSplit<'a, P> {
    /// Points surviving the filter in every dimension.
    pub minimals: Vec<&'a P>,
    /// Points rejected in some dimension, in rejection order.
    pub retained: Vec<&'a P>,
}

impl<'a, P> MinimalSplit<'a, P> {
    /// An empty split, the answer for an empty input set.
    pub fn empty() -> Self {
        Self {
            minimals: Vec::new(),
            retained: Vec::new(),
        }
    }

    /// `true` when the split was computed over an empty set.
    pub fn is_empty(&self) -> bool {
        self.minimals.is_empty() && self.retained.is_empty()
    }

    /// Total number of points covered by the split.
    pub fn len(&self) -> usize {
        self.minimals.len() + self.retained.len()
    }
}

/// Split `points` into `(minimals, retained)` under `slack`.
///
/// # Errors
/// [`SemiorderError::DimensionMismatch`] if a point does not have
/// `slack.dim()` coordinates.
pub fn split_minimals<'a, P: AsRef<[f64]>>(
    points: &'a [P],
    slack: &Thresholds,
) -> Result<MinimalSplit<'a, P>, SemiorderError> {
    check_dims(points, slack.dim())?;
    Ok(split_minimals_unchecked(points.iter(), slack))
}

/// Minimal subset only, without recording the retained complement.
pub fn survivors<'a, P: AsRef<[f64]>>(
    points: &'a [P],
    slack: &Thresholds,
) -> Result<Vec<&'a P>, SemiorderError> {
    check_dims(points, slack.dim())?;
    let mut current: Vec<&P> = points.iter().collect();
    for (i, &band) in slack.iter().enumerate() {
        current = filter_dimension(current, i, band).0;
    }
    Ok(current)
}

pub(crate) fn split_minimals_unchecked<'a, P, I>(points: I, slack: &[f64]) -> MinimalSplit<'a, P>
where
    P: AsRef<[f64]> + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut current: Vec<&P> = points.into_iter().collect();
    if current.is_empty() {
        return MinimalSplit::empty();
    }
    let mut retained = Vec::new();
    for (i, &band) in slack.iter().enumerate() {
        let (kept, rejected) = filter_dimension(current, i, band);
        retained.extend(rejected);
        current = kept;
    }
    MinimalSplit {
        minimals: current,
        retained,
    }
}

/// Keep every point with `p[i] <= min_i + band`; return `(kept, rejected)`.
pub(crate) fn filter_dimension<'a, P: AsRef<[f64]>>(
    current: Vec<&'a P>,
    i: usize,
    band: f64,
) -> (Vec<&'a P>, Vec<&'a P>) {
    let min_value = current
        .iter()
        .map(|p| p.as_ref()[i])
        .fold(f64::INFINITY, f64::min);
    current
        .into_iter()
        .partition(|p| p.as_ref()[i] <= min_value + band)
}
