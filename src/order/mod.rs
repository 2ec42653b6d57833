//! Data model and the slack-aware comparator.

pub mod point;
pub mod semiorder;
pub mod thresholds;

pub use point::Point;
pub use semiorder::{Precedence, discardable, discardable_within, lex_compare, weakly_precedes};
pub use thresholds::Thresholds;
