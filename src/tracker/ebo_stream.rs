//! Streaming EBO: keep only points that are or may become the EBO decision.
//!
//! The EBO decision is fixed by the survivor filter on the first dimension
//! and then by component-wise comparison, so the candidate test needs no
//! discardability scan. For incoming `x` and candidate `y`:
//!
//! | condition                          | effect          |
//! |------------------------------------|-----------------|
//! | `x[0] > y[0] + σ[0]`               | discard `x`     |
//! | `y[0] > x[0] + σ[0]`               | evict `y`       |
//! | `x[i] >= y[i]` for every `i`       | discard `x`     |
//! | `y[i] > x[i]` for every `i`        | evict `y`       |
//!
//! The [`decision`](MinTracker::decision) of this tracker always equals the
//! batch [`ebo`](crate::algs::ebo::ebo) over every point ingested so far.

use crate::order::{Point, Thresholds};
use crate::semiorder_error::SemiorderError;
use crate::tracker::state::CandidateState;
use crate::tracker::{IngestOutcome, MinTracker, TrackerStats, check_point_dim};

/// Candidate tracker for the single EBO decision.
#[derive(Clone, Debug)]
pub struct EboStreamTracker {
    slack: Thresholds,
    state: CandidateState,
}

impl EboStreamTracker {
    pub fn new(slack: Thresholds) -> Self {
        let state = CandidateState::new(slack.dim());
        Self { slack, state }
    }

    pub fn from_slack(slack: impl Into<Vec<f64>>) -> Result<Self, SemiorderError> {
        Ok(Self::new(Thresholds::new(slack)?))
    }
}

impl MinTracker for EboStreamTracker {
    fn slack(&self) -> &Thresholds {
        &self.slack
    }

    fn ingest(&mut self, x: Point) -> Result<IngestOutcome, SemiorderError> {
        check_point_dim(&x, self.slack.dim())?;
        let band = self.slack[0];

        let mut evict = vec![false; self.state.candidates.len()];
        for (j, y) in self.state.candidates.iter().enumerate() {
            self.state.stats.comparisons += 1;
            if x[0] > y[0] + band {
                self.state.reject(x);
                return Ok(IngestOutcome::Dominated { by: j });
            }
            if y[0] > x[0] + band {
                evict[j] = true;
                continue;
            }
            if x.iter().zip(y.iter()).all(|(a, b)| a >= b) {
                self.state.reject(x);
                return Ok(IngestOutcome::Dominated { by: j });
            }
            if x.iter().zip(y.iter()).all(|(a, b)| b > a) {
                evict[j] = true;
            }
        }

        let evicted = self.state.admit(x, &evict);
        log::trace!(
            "ebo stream: {} candidate(s) after evicting {evicted}",
            self.state.candidates.len()
        );
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
