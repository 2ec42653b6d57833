//! Elimination by objective (EBO): reduce a point set to one decision.
//!
//! 1. Survivor filtering: per dimension, keep points within `σ[i]` of the
//!    minimum, until one point remains or the dimensions run out.
//! 2. Lexicographic tie-break: per dimension, keep only points exactly at the
//!    minimum, until one point remains.
//! 3. The first remaining point (in input order) is the decision.

use crate::algs::check_dims;
use crate::algs::minimals::filter_dimension;
use crate::order::Thresholds;
use crate::semiorder_error::SemiorderError;

/// Select a single representative from `points`; `Ok(None)` for an empty set.
///
/// # Errors
/// [`SemiorderError::DimensionMismatch`] if a point does not fit `slack`.
pub fn ebo<'a, P: AsRef<[f64]>>(
    points: &'a [P],
    slack: &Thresholds,
) -> Result<Option<&'a P>, SemiorderError> {
    check_dims(points, slack.dim())?;
    Ok(ebo_unchecked(points.iter(), slack))
}

pub(crate) fn ebo_unchecked<'a, P, I>(points: I, slack: &[f64]) -> Option<&'a P>
where
    P: AsRef<[f64]> + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut decision: Vec<&P> = points.into_iter().collect();
    if decision.is_empty() {
        return None;
    }
    // survivor set
    for (i, &band) in slack.iter().enumerate() {
        if decision.len() == 1 {
            return Some(decision[0]);
        }
        decision = filter_dimension(decision, i, band).0;
    }
    // lexicographic selection on the survivors
    for i in 0..slack.len() {
        if decision.len() == 1 {
            break;
        }
        decision = filter_dimension(decision, i, 0.0).0;
    }
    decision.first().copied()
}
