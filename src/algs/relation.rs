//! Boolean relation matrices over a finite point set.
//!
//! [`RelationMatrix::weak`] materializes the semiorder's weak relation `R`
//! (`R[i][j]` iff point `i` weakly precedes point `j`), [`RelationMatrix::strict`]
//! its asymmetric part `P = R ∧ ¬Rᵗ`, and the two closure routines compute
//! the transitive closure of any relation. Because the semiorder is not
//! transitive, `P` may contain cycles; the closure makes them explicit so that
//! [`crate::algs::bottom_cycles`] can read minimal elements off the columns.
//!
//! ## Complexity
//! - `weak`: **O(n²·d)** comparisons (row-parallel with the `rayon` feature).
//! - `warshall`: **O(n³)**.
//! - `closure_by_squaring`: **O(n³ log n)** worst case; stops at the fixed point.

use std::fmt;

use crate::algs::check_dims;
use crate::order::Thresholds;
use crate::order::semiorder::weakly_precedes;
use crate::semiorder_error::SemiorderError;

/// Dense `n × n` boolean matrix, row-major.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RelationMatrix {
    n: usize,
    bits: Vec<bool>,
}

impl RelationMatrix {
    /// The empty relation on `n` elements.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            bits: vec![false; n * n],
        }
    }

    /// The identity relation on `n` elements.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, |i, j| i == j)
    }

    /// Build a relation from a predicate over index pairs.
    pub fn from_fn(n: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        let mut m = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                m.bits[i * n + j] = f(i, j);
            }
        }
        m
    }

    /// Weak semiorder relation `R` over `points`.
    ///
    /// # Errors
    /// [`SemiorderError::DimensionMismatch`] / [`SemiorderError::NanCoordinate`]
    /// if a point does not fit `slack`.
    pub fn weak<P: AsRef<[f64]>>(points: &[P], slack: &Thresholds) -> Result<Self, SemiorderError> {
        check_dims(points, slack.dim())?;
        let rows: Vec<&[f64]> = points.iter().map(AsRef::as_ref).collect();
        Ok(Self::weak_unchecked(&rows, slack))
    }

    pub(crate) fn weak_unchecked(rows: &[&[f64]], slack: &[f64]) -> Self {
        let n = rows.len();
        let mut m = Self::new(n);
        if n == 0 {
            return m;
        }
        fill_weak(&mut m.bits, rows, slack);
        m
    }

    /// Number of elements the relation is defined on.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.bits[i * self.n + j]
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[bool] {
        &self.bits[i * self.n..(i + 1) * self.n]
    }

    /// `true` if some `k` relates to `j` (column `j` has an entry).
    pub fn has_incoming(&self, j: usize) -> bool {
        (0..self.n).any(|k| self.get(k, j))
    }

    /// `true` if `i` relates to every element (row `i` is full).
    pub fn row_is_full(&self, i: usize) -> bool {
        self.row(i).iter().all(|&b| b)
    }

    /// Number of related pairs.
    pub fn edge_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Asymmetric part `M ∧ ¬Mᵗ`.
    pub fn strict(&self) -> Self {
        Self::from_fn(self.n, |i, j| self.get(i, j) && !self.get(j, i))
    }

    /// Element-wise OR of two relations on the same `n` elements.
    pub(crate) fn union(&self, other: &Self) -> Self {
        debug_assert_eq!(self.n, other.n);
        Self {
            n: self.n,
            bits: self
                .bits
                .iter()
                .zip(&other.bits)
                .map(|(&a, &b)| a || b)
                .collect(),
        }
    }

    /// Boolean matrix product: `(A·B)[i][j] = ∃k A[i][k] ∧ B[k][j]`.
    pub(crate) fn compose(&self, other: &Self) -> Self {
        debug_assert_eq!(self.n, other.n);
        let n = self.n;
        let mut out = Self::new(n);
        for i in 0..n {
            for k in 0..n {
                if !self.get(i, k) {
                    continue;
                }
                for j in 0..n {
                    if other.get(k, j) {
                        out.bits[i * n + j] = true;
                    }
                }
            }
        }
        out
    }

    /// Transitive closure with Warshall's algorithm.
    pub fn warshall(&self) -> Self {
        let n = self.n;
        let mut t = self.clone();
        for k in 0..n {
            for i in 0..n {
                if !t.get(i, k) {
                    continue;
                }
                for j in 0..n {
                    if t.get(k, j) {
                        t.bits[i * n + j] = true;
                    }
                }
            }
        }
        t
    }

    /// Transitive closure by repeated `T ← T ∨ T·T` until nothing changes.
    pub fn closure_by_squaring(&self) -> Self {
        let mut t = self.clone();
        loop {
            let next = t.union(&t.compose(&t));
            if next == t {
                return t;
            }
            t = next;
        }
    }
}

#[cfg(not(feature = "rayon"))]
fn fill_weak(bits: &mut [bool], rows: &[&[f64]], slack: &[f64]) {
    for (row, &x) in bits.chunks_mut(rows.len()).zip(rows) {
        for (cell, &y) in row.iter_mut().zip(rows) {
            *cell = weakly_precedes(x, y, slack);
        }
    }
}

#[cfg(feature = "rayon")]
fn fill_weak(bits: &mut [bool], rows: &[&[f64]], slack: &[f64]) {
    use rayon::prelude::*;
    bits.par_chunks_mut(rows.len())
        .zip(rows.par_iter())
        .for_each(|(row, &x)| {
            for (cell, &y) in row.iter_mut().zip(rows) {
                *cell = weakly_precedes(x, y, slack);
            }
        });
}

impl fmt::Debug for RelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RelationMatrix({}x{})", self.n, self.n)?;
        fmt::Display::fmt(self, f)
    }
}

/// One row per line, `1` for related pairs.
impl fmt::Display for RelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            let line: String = self
                .row(i)
                .iter()
                .map(|&b| if b { '1' } else { '0' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
