//! Batch algorithms over finite point sets.
//!
//! Everything here is stateless and accepts any `P: AsRef<[f64]>`.

pub mod bottom_cycles;
pub mod compare;
pub mod ebo;
pub mod minimals;
pub mod relation;

pub use bottom_cycles::{BottomCycles, ClosureMethod, minimal_cycles, minimal_diamond, minimal_small};
pub use ebo::ebo;
pub use minimals::{MinimalSplit, split_minimals, survivors};
pub use relation::RelationMatrix;

use crate::semiorder_error::SemiorderError;

/// Ensure every point has exactly `dim` coordinates and none is NaN.
pub(crate) fn check_dims<P: AsRef<[f64]>>(points: &[P], dim: usize) -> Result<(), SemiorderError> {
    for p in points {
        let coords = p.as_ref();
        if coords.len() != dim {
            return Err(SemiorderError::DimensionMismatch {
                expected: dim,
                found: coords.len(),
            });
        }
        if let Some(d) = coords.iter().position(|c| c.is_nan()) {
            return Err(SemiorderError::NanCoordinate { dim: d });
        }
    }
    Ok(())
}
