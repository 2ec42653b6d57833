//! Minimal elements of a finite set under the (non-transitive) semiorder.
//!
//! The strict relation `P` is closed transitively; a point is minimal iff no
//! other point reaches it through the strict part of that closure. Points
//! trapped in a preference cycle reach each other both ways, so the strict
//! part of the closure drops those edges and a cycle with no outside
//! predecessor survives as a whole (a *bottom cycle*).
//!
//! Two stricter existence checks share the same relation machinery:
//! - [`minimal_diamond`]: points that weakly precede every point;
//! - [`minimal_small`]: the least element, strictly preceding every other point.
//!
//! Both may be empty, and `minimal_small ⊆ minimal_diamond ⊆ minimal_cycles`.

use itertools::Itertools;

use crate::algs::relation::RelationMatrix;
use crate::order::Thresholds;
use crate::semiorder_error::SemiorderError;

/// Transitive-closure implementation to use.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ClosureMethod {
    /// Warshall's triple loop.
    #[default]
    Warshall,
    /// Boolean self-multiplication until a fixed point.
    Squaring,
}

impl ClosureMethod {
    pub fn close(self, m: &RelationMatrix) -> RelationMatrix {
        match self {
            ClosureMethod::Warshall => m.warshall(),
            ClosureMethod::Squaring => m.closure_by_squaring(),
        }
    }
}

/// Result of the cycle-based minimal extraction.
#[derive(Clone, Debug)]
pub struct BottomCycles {
    minimal: Vec<usize>,
    closure: RelationMatrix,
}

impl BottomCycles {
    /// Indices of the minimal points, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.minimal
    }

    pub fn len(&self) -> usize {
        self.minimal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minimal.is_empty()
    }

    pub fn contains(&self, i: usize) -> bool {
        self.minimal.binary_search(&i).is_ok()
    }

    /// Resolve the minimal indices against the input set.
    pub fn resolve<'a, P>(&self, points: &'a [P]) -> Vec<&'a P> {
        select(points, &self.minimal)
    }

    /// Group the minimal points into bottom cycles.
    ///
    /// Two minimal points share a group iff each reaches the other in the
    /// closure. A minimal point on no cycle forms a group of its own.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut assigned = vec![false; self.minimal.len()];
        let mut groups = Vec::new();
        for (a, &i) in self.minimal.iter().enumerate() {
            if assigned[a] {
                continue;
            }
            assigned[a] = true;
            let mut group = vec![i];
            for (b, &j) in self.minimal.iter().enumerate().skip(a + 1) {
                if !assigned[b] && self.closure.get(i, j) && self.closure.get(j, i) {
                    assigned[b] = true;
                    group.push(j);
                }
            }
            groups.push(group);
        }
        groups
    }
}

/// Pick `points[i]` for every index, in index order.
pub fn select<'a, P>(points: &'a [P], indices: &[usize]) -> Vec<&'a P> {
    indices.iter().map(|&i| &points[i]).collect()
}

/// Minimal elements via the transitive closure of the strict relation.
pub fn minimal_cycles<P: AsRef<[f64]>>(
    points: &[P],
    slack: &Thresholds,
) -> Result<BottomCycles, SemiorderError> {
    minimal_cycles_with(points, slack, ClosureMethod::default())
}

/// [`minimal_cycles`] with an explicit closure method.
pub fn minimal_cycles_with<P: AsRef<[f64]>>(
    points: &[P],
    slack: &Thresholds,
    method: ClosureMethod,
) -> Result<BottomCycles, SemiorderError> {
    let strict = RelationMatrix::weak(points, slack)?.strict();
    let closure = method.close(&strict);
    let closed_strict = closure.strict();
    let minimal = (0..points.len())
        .filter(|&j| !closed_strict.has_incoming(j))
        .collect_vec();
    log::debug!(
        "minimal_cycles: {} of {} points minimal ({} strict edges, {} after closure)",
        minimal.len(),
        points.len(),
        strict.edge_count(),
        closure.edge_count()
    );
    Ok(BottomCycles { minimal, closure })
}

/// Indices of points that weakly precede every point in the set.
pub fn minimal_diamond<P: AsRef<[f64]>>(
    points: &[P],
    slack: &Thresholds,
) -> Result<Vec<usize>, SemiorderError> {
    let weak = RelationMatrix::weak(points, slack)?;
    Ok((0..weak.len()).filter(|&i| weak.row_is_full(i)).collect())
}

/// Index of the least element, if one exists.
///
/// Returned as a vector with at most one entry: two distinct points cannot
/// both strictly precede each other.
pub fn minimal_small<P: AsRef<[f64]>>(
    points: &[P],
    slack: &Thresholds,
) -> Result<Vec<usize>, SemiorderError> {
    let weak = RelationMatrix::weak(points, slack)?;
    let reflexive_strict = weak.strict().union(&RelationMatrix::identity(weak.len()));
    Ok((0..weak.len())
        .filter(|&i| reflexive_strict.row_is_full(i))
        .collect())
}
