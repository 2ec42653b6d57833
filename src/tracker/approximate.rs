//! Approximate tracker with an epsilon-box redundancy filter.
//!
//! Before the discard scan, an incoming point `x` is rejected as *redundant*
//! when some candidate `y` satisfies `x[i] >= y[i] - ε[i]` in every dimension:
//! `x` is then no better than `y` by more than `ε` anywhere. The discard scan
//! itself uses the epsilon-relaxed test, so a point may evict a candidate that
//! is up to `ε[k]` better in an earlier dimension.
//!
//! The candidate set stays smaller than the exact tracker's at the price of
//! losing points that are `ε`-close to a kept one. Use
//! [`ApproximationReport`](crate::algs::compare::ApproximationReport) to
//! measure the deviation on a concrete stream.

use crate::order::{Point, Thresholds};
use crate::semiorder_error::SemiorderError;
use crate::tracker::state::CandidateState;
use crate::tracker::{IngestOutcome, MinTracker, PairVerdict, TrackerStats, check_point_dim, scan_pair};

/// Approximate candidate-set tracker.
#[derive(Clone, Debug)]
pub struct ApproximateTracker {
    slack: Thresholds,
    epsilon: Thresholds,
    state: CandidateState,
}

impl ApproximateTracker {
    /// # Errors
    /// [`SemiorderError::ThresholdLengthMismatch`] if `slack` and `epsilon`
    /// differ in length.
    pub fn new(slack: Thresholds, epsilon: Thresholds) -> Result<Self, SemiorderError> {
        slack.check_same_dim(&epsilon)?;
        let state = CandidateState::new(slack.dim());
        Ok(Self {
            slack,
            epsilon,
            state,
        })
    }

    /// Validate raw threshold vectors and create the tracker.
    pub fn from_thresholds(
        slack: impl Into<Vec<f64>>,
        epsilon: impl Into<Vec<f64>>,
    ) -> Result<Self, SemiorderError> {
        Self::new(Thresholds::new(slack)?, Thresholds::new(epsilon)?)
    }

    /// Approximation tolerance.
    pub fn epsilon(&self) -> &Thresholds {
        &self.epsilon
    }

    /// Index of the first candidate whose epsilon box covers `x`.
    fn covering_candidate(&self, x: &Point) -> Option<usize> {
        self.state
            .candidates
            .iter()
            .position(|y| x.within_lower_box(y, &self.epsilon))
    }
}

impl MinTracker for ApproximateTracker {
    fn slack(&self) -> &Thresholds {
        &self.slack
    }

    fn ingest(&mut self, x: Point) -> Result<IngestOutcome, SemiorderError> {
        check_point_dim(&x, self.slack.dim())?;

        if let Some(near) = self.covering_candidate(&x) {
            self.state.stats.comparisons += near as u64 + 1;
            log::trace!("approximate: {x} redundant with candidate {near}");
            self.state.reject(x);
            return Ok(IngestOutcome::Redundant { near });
        }

        let mut evict = vec![false; self.state.candidates.len()];
        for (j, y) in self.state.candidates.iter().enumerate() {
            self.state.stats.comparisons += 1;
            match scan_pair(&x, y, &self.slack, Some(&*self.epsilon)) {
                PairVerdict::Dominated => {
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
                "approximate: evicted {evicted} candidate(s), {} remain",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::ExactTracker;

    fn pt(v: &[f64]) -> Point {
        Point::new(v.to_vec()).unwrap()
    }

    fn stream() -> Vec<Point> {
        vec![
            pt(&[2.0, 1.0, 1.2]),
            pt(&[2.0, 1.1, 1.0]),
            pt(&[2.01, 0.99, 1.19]),
            pt(&[2.01, 1.01, 1.01]),
        ]
    }

    fn tracker() -> ApproximateTracker {
        ApproximateTracker::from_thresholds(vec![0.1, 0.2, 0.1], vec![0.02, 0.05, 0.02]).unwrap()
    }

    #[test]
    fn mismatched_thresholds_are_rejected() {
        let err = ApproximateTracker::from_thresholds(vec![0.1, 0.2], vec![0.01]).unwrap_err();
        assert_eq!(
            err,
            SemiorderError::ThresholdLengthMismatch {
                slack: 2,
                epsilon: 1
            }
        );
    }

    #[test]
    fn clustered_stream_is_thinned() {
        let mut t = tracker();
        let outcomes: Vec<_> = stream()
            .into_iter()
            .map(|p| t.ingest(p).unwrap())
            .collect();
        assert_eq!(outcomes[0], IngestOutcome::Inserted { evicted: 0 });
        assert_eq!(outcomes[1], IngestOutcome::Inserted { evicted: 0 });
        assert_eq!(outcomes[2], IngestOutcome::Redundant { near: 0 });
        assert_eq!(outcomes[3], IngestOutcome::Inserted { evicted: 1 });
        assert_eq!(
            t.candidates(),
            &[pt(&[2.0, 1.1, 1.0]), pt(&[2.01, 1.01, 1.01])]
        );
        assert_eq!(t.discarded().len(), 2);
    }

    #[test]
    fn exact_tracker_keeps_the_whole_cluster() {
        let mut exact = ExactTracker::from_slack(vec![0.1, 0.2, 0.1]).unwrap();
        for p in stream() {
            exact.ingest(p).unwrap();
        }
        assert_eq!(exact.candidates().len(), 4);
        assert!(exact.discarded().is_empty());
    }

    #[test]
    fn repeated_candidate_is_redundant() {
        let mut t = tracker();
        for p in stream() {
            t.ingest(p).unwrap();
        }
        for _ in 0..10 {
            let out = t.ingest(pt(&[2.0, 1.1, 1.0])).unwrap();
            assert_eq!(out, IngestOutcome::Redundant { near: 0 });
        }
        assert_eq!(t.candidates().len(), 2);
        assert_eq!(t.stats().ingested, 14);
        assert_eq!(t.stats().max_candidates, 2);
    }

    #[test]
    fn early_discard_counts_only_inspected_candidates() {
        let mut t = ApproximateTracker::from_thresholds(vec![0.1, 0.1], vec![0.01, 0.01]).unwrap();
        t.ingest(pt(&[0.0, 5.0])).unwrap();
        t.ingest(pt(&[0.05, 0.0])).unwrap();
        assert_eq!(t.candidates().len(), 2);
        assert_eq!(t.stats().comparisons, 1);

        let out = t.ingest(pt(&[1.0, -1.0])).unwrap();
        assert_eq!(out, IngestOutcome::Dominated { by: 0 });
        assert_eq!(t.stats().comparisons, 2);
    }

    #[test]
    fn near_copy_is_within_epsilon_of_its_cover() {
        let mut t = tracker();
        t.ingest(pt(&[2.0, 1.0, 1.0])).unwrap();
        let p = pt(&[2.01, 1.01, 1.01]);
        let out = t.ingest(p.clone()).unwrap();
        let IngestOutcome::Redundant { near } = out else {
            panic!("expected a redundant point, got {out:?}");
        };
        let cover = &t.candidates()[near];
        for i in 0..p.dim() {
            assert!((p[i] - cover[i]).abs() <= t.epsilon()[i]);
        }
    }
}
