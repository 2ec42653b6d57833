//! Exact incremental tracker for the lexicographic semiorder.
//!
//! For each incoming point `x` every candidate `y` is scanned dimension by
//! dimension (see [`scan_pair`]):
//! - if `y` discards `x`, `x` goes straight to the discarded set and no
//!   candidate is touched;
//! - if `x` discards `y`, `y` is flagged;
//! - after the scan, flagged candidates move to the discarded set and `x`
//!   joins the candidates.
//!
//! Discarding is only ever done by a point that is lexicographically smaller,
//! so no chain of discards can remove a point that is minimal for the stream
//! seen so far. The minimal subset of the candidates therefore always equals
//! the survivor set of the entire stream.
//!
//! ## Complexity
//! - `ingest`: **O(|candidates| · d)**; the candidate set is unbounded in the
//!   worst case (e.g. a stream of mutually indifferent points).

use crate::order::{Point, Thresholds};
use crate::semiorder_error::SemiorderError;
use crate::tracker::state::CandidateState;
use crate::tracker::{IngestOutcome, MinTracker, PairVerdict, TrackerStats, check_point_dim, scan_pair};

/// Exact candidate-set tracker.
#[derive(Clone, Debug)]
pub struct ExactTracker {
    slack: Thresholds,
    state: CandidateState,
}

impl ExactTracker {
    /// Create a tracker for points of dimension `slack.dim()`.
    pub fn new(slack: Thresholds) -> Self {
        let state = CandidateState::new(slack.dim());
        Self { slack, state }
    }

    /// Validate a raw slack vector and create the tracker.
    pub fn from_slack(slack: impl Into<Vec<f64>>) -> Result<Self, SemiorderError> {
        Ok(Self::new(Thresholds::new(slack)?))
    }
}

impl MinTracker for ExactTracker {
    fn slack(&self) -> &Thresholds {
        &self.slack
    }

    fn ingest(&mut self, x: Point) -> Result<IngestOutcome, SemiorderError> {
        check_point_dim(&x, self.slack.dim())?;
        if self.state.candidates.is_empty() {
            self.state.admit(x, &[]);
            return Ok(IngestOutcome::Inserted { evicted: 0 });
        }

        let mut evict = vec![false; self.state.candidates.len()];
        for (j, y) in self.state.candidates.iter().enumerate() {
            self.state.stats.comparisons += 1;
            match scan_pair(&x, y, &self.slack, None) {
                PairVerdict::Dominated => {
                    log::trace!("exact: {x} discarded by candidate {y}");
                    self.state.reject(x);
                    return Ok(IngestOutcome::Dominated { by: j });
                }
                PairVerdict::Evict => evict[j] = true,
                PairVerdict::Keep => {}
            }
        }

        let evicted = self.state.admit(x, &evict);
        if evicted > 0 {
            log::debug!(
                "exact: evicted {evicted} candidate(s), {} remain",
                self.state.candidates.len()
            );
        }
        Ok(IngestOutcome::Inserted { evicted })
    }

    fn candidates(&self) -> &[Point] {
        &self.state.candidates
    }

    fn discarded(&self) -> &[Point] {
        &self.state.discarded
    }

    fn stats(&self) -> TrackerStats {
        self.state.stats
    }
}
