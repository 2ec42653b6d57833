//! Incremental candidate-set trackers.
//!
//! A tracker consumes a stream of points one at a time and keeps two sets:
//! the *candidates* (points that are minimal now or may become minimal later)
//! and the *discarded* points (proven never to be minimal). Every ingested
//! point ends up in exactly one of the two, and the discarded set only grows.
//!
//! - [`ExactTracker`]: slack-aware discard rule, unbounded candidate growth.
//! - [`ApproximateTracker`]: adds an epsilon-box redundancy filter and relaxes
//!   the discard rule by `ε`, bounding the candidate set.
//! - [`EboStreamTracker`]: keeps only what can still become the EBO decision.
//!
//! All trackers share the [`MinTracker`] interface; queries are read-only and
//! take `&self`, ingestion takes `&mut self`.

pub mod approximate;
pub mod config;
pub mod ebo_stream;
pub mod exact;
mod state;

#[cfg(test)]
mod tests;

pub use approximate::ApproximateTracker;
pub use config::{TrackerConfig, TrackerKind};
pub use ebo_stream::EboStreamTracker;
pub use exact::ExactTracker;

use crate::algs::ebo::ebo_unchecked;
use crate::algs::minimals::{MinimalSplit, split_minimals_unchecked};
use crate::order::semiorder::{discardable, discardable_within, strictly_precedes_at};
use crate::order::{Point, Thresholds};
use crate::semiorder_error::SemiorderError;

/// What happened to a point handed to [`MinTracker::ingest`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The point joined the candidate set; `evicted` former candidates moved
    /// to the discarded set.
    Inserted { evicted: usize },
    /// The candidate at index `by` discards the point.
    Dominated { by: usize },
    /// The point lies in the epsilon box of the candidate at index `near`.
    Redundant { near: usize },
}

/// Raw counters for performance studies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrackerStats {
    /// Points handed to `ingest` successfully.
    pub ingested: u64,
    /// Candidate comparisons performed (one per candidate inspected).
    pub comparisons: u64,
    /// Largest candidate-set size observed.
    pub max_candidates: usize,
}

/// Common interface of the incremental trackers.
pub trait MinTracker {
    /// Slack vector the tracker compares with.
    fn slack(&self) -> &Thresholds;

    /// Number of dimensions every point must have.
    fn dim(&self) -> usize {
        self.slack().dim()
    }

    /// Process the next point of the stream.
    ///
    /// # Errors
    /// [`SemiorderError::DimensionMismatch`] if `point` does not have
    /// [`dim`](MinTracker::dim) coordinates; the tracker is left unchanged.
    fn ingest(&mut self, point: Point) -> Result<IngestOutcome, SemiorderError>;

    /// Current candidate set.
    fn candidates(&self) -> &[Point];

    /// Discarded points, in discard order.
    fn discarded(&self) -> &[Point];

    /// Counter snapshot.
    fn stats(&self) -> TrackerStats;

    /// Validate and ingest raw coordinates.
    fn ingest_coords(&mut self, coords: &[f64]) -> Result<IngestOutcome, SemiorderError> {
        let point = Point::with_dim(coords.to_vec(), self.dim())?;
        self.ingest(point)
    }

    /// Split the candidate set into `(minimals, retained)`.
    ///
    /// An untouched tracker yields an empty split.
    fn get_minimals(&self) -> MinimalSplit<'_, Point> {
        if self.candidates().is_empty() {
            log::warn!("get_minimals on an empty candidate set");
        }
        split_minimals_unchecked(self.candidates(), self.slack())
    }

    /// EBO decision over the candidate set; `None` while empty.
    fn decision(&self) -> Option<&Point> {
        ebo_unchecked(self.candidates(), self.slack())
    }
}

/// Per-candidate verdict of the pairwise discard scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PairVerdict {
    /// The incoming point is discardable by the candidate.
    Dominated,
    /// The candidate is discardable by the incoming point.
    Evict,
    Keep,
}

/// Scan the dimensions of incoming `x` against candidate `y`.
///
/// At each dimension `i`, `x` is dominated if `y` strictly precedes it there
/// and `y` is no worse in every earlier dimension; `y` is evicted under the
/// mirrored condition. `epsilon` relaxes the "no worse" test by `ε[k]`.
pub(crate) fn scan_pair(x: &[f64], y: &[f64], slack: &[f64], epsilon: Option<&[f64]>) -> PairVerdict {
    let no_earlier_deficit = |by: &[f64], target: &[f64], i: usize| match epsilon {
        None => discardable(by, target, i),
        Some(eps) => discardable_within(by, target, i, eps),
    };
    for i in 0..slack.len() {
        if strictly_precedes_at(y, x, slack, i) && no_earlier_deficit(y, x, i) {
            return PairVerdict::Dominated;
        }
        if strictly_precedes_at(x, y, slack, i) && no_earlier_deficit(x, y, i) {
            return PairVerdict::Evict;
        }
    }
    PairVerdict::Keep
}

pub(crate) fn check_point_dim(point: &Point, dim: usize) -> Result<(), SemiorderError> {
    if point.dim() != dim {
        return Err(SemiorderError::DimensionMismatch {
            expected: dim,
            found: point.dim(),
        });
    }
    Ok(())
}
