//! Candidate/discarded bookkeeping shared by every tracker.

use crate::debug_invariants::DebugInvariants;
use crate::order::Point;
use crate::semiorder_error::SemiorderError;
use crate::tracker::TrackerStats;

/// Owned partition of the ingested stream.
///
/// Only [`admit`](Self::admit) and [`reject`](Self::reject) mutate it, and
/// each places the incoming point in exactly one of the two sets.
#[derive(Clone, Debug)]
pub(crate) struct CandidateState {
    dim: usize,
    pub(crate) candidates: Vec<Point>,
    pub(crate) discarded: Vec<Point>,
    pub(crate) stats: TrackerStats,
}

impl CandidateState {
    pub(crate) fn new(dim: usize) -> Self {
        Self {
            dim,
            candidates: Vec::new(),
            discarded: Vec::new(),
            stats: TrackerStats::default(),
        }
    }

    /// Move every candidate flagged in `evict` to the discarded set, then
    /// append `x` as a candidate. Returns the number of evictions.
    pub(crate) fn admit(&mut self, x: Point, evict: &[bool]) -> usize {
        debug_assert!(evict.is_empty() || evict.len() == self.candidates.len());
        let mut evicted = 0;
        if evict.iter().any(|&e| e) {
            let old = std::mem::take(&mut self.candidates);
            for (p, &gone) in old.into_iter().zip(evict) {
                if gone {
                    self.discarded.push(p);
                    evicted += 1;
                } else {
                    self.candidates.push(p);
                }
            }
        }
        self.candidates.push(x);
        self.stats.ingested += 1;
        self.stats.max_candidates = self.stats.max_candidates.max(self.candidates.len());
        crate::debug_invariants!(self.validate_invariants(), "candidate state after admit");
        evicted
    }

    /// Append `x` to the discarded set.
    pub(crate) fn reject(&mut self, x: Point) {
        self.discarded.push(x);
        self.stats.ingested += 1;
        crate::debug_invariants!(self.validate_invariants(), "candidate state after reject");
    }
}

impl DebugInvariants for CandidateState {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "CandidateState invalid");
    }

    fn validate_invariants(&self) -> Result<(), SemiorderError> {
        let held = (self.candidates.len() + self.discarded.len()) as u64;
        if held != self.stats.ingested {
            return Err(SemiorderError::InvariantViolation(format!(
                "{} candidates + {} discarded != {} ingested",
                self.candidates.len(),
                self.discarded.len(),
                self.stats.ingested
            )));
        }
        if self.stats.max_candidates < self.candidates.len() {
            return Err(SemiorderError::InvariantViolation(format!(
                "max_candidates {} below current size {}",
                self.stats.max_candidates,
                self.candidates.len()
            )));
        }
        if let Some(p) = self
            .candidates
            .iter()
            .chain(&self.discarded)
            .find(|p| p.dim() != self.dim)
        {
            return Err(SemiorderError::DimensionMismatch {
                expected: self.dim,
                found: p.dim(),
            });
        }
        Ok(())
    }
}
