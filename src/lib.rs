#![cfg_attr(docsrs, feature(doc_cfg))]
//! # lex-semiorder
//!
//! lex-semiorder tracks the minimal elements of a stream of multi-objective
//! points under a *lexicographic semiorder*: objectives are ranked, and in
//! each objective differences up to a per-dimension slack `σ[i]` count as
//! indifference. The relation is total and reflexive but not transitive, so
//! "minimal" needs care and preference cycles are possible.
//!
//! ## Features
//! - Comparator, weak relation and discardability tests ([`order`])
//! - Incremental trackers over a point stream ([`tracker`]): exact,
//!   epsilon-approximate, and a streaming EBO tracker
//! - Batch algorithms ([`algs`]): survivor extraction, bottom cycles via
//!   transitive closure, diamond and small minimal sets, EBO selection, and
//!   exact-vs-approximate comparison reports
//! - Optional `rayon` feature to fill relation matrices in parallel
//!
//! ## Usage
//!
//! ```
//! use lex_semiorder::prelude::*;
//!
//! let mut tracker = ExactTracker::from_slack(vec![0.1, 0.2, 0.3])?;
//! for p in [[1.0, 3.0, 3.0], [1.1, 2.0, 3.0], [1.2, 1.0, 3.0]] {
//!     tracker.ingest_coords(&p)?;
//! }
//! let split = tracker.get_minimals();
//! assert_eq!(split.minimals.len(), 1);
//! assert_eq!(tracker.decision().map(|p| p.coords()), Some(&[1.1, 2.0, 3.0][..]));
//! # Ok::<(), lex_semiorder::SemiorderError>(())
//! ```
//!
//! ## Invariant checking
//!
//! Trackers validate their candidate/discarded partition after every update
//! in debug builds, or in release builds with the `strict-invariants` or
//! `check-invariants` feature; see [`DebugInvariants`].

pub mod algs;
pub mod debug_invariants;
pub mod order;
pub mod semiorder_error;
pub mod tracker;

pub use debug_invariants::DebugInvariants;
pub use semiorder_error::SemiorderError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::compare::ApproximationReport;
    pub use crate::algs::{
        BottomCycles, ClosureMethod, MinimalSplit, RelationMatrix, ebo, minimal_cycles,
        minimal_diamond, minimal_small, split_minimals, survivors,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::order::{Point, Precedence, Thresholds, lex_compare, weakly_precedes};
    pub use crate::semiorder_error::SemiorderError;
    pub use crate::tracker::{
        ApproximateTracker, EboStreamTracker, ExactTracker, IngestOutcome, MinTracker,
        TrackerConfig, TrackerKind, TrackerStats,
    };
}
