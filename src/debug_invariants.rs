//! Runtime invariant checks for tracker state.
//!
//! Trackers validate their candidate/discarded partition through
//! [`DebugInvariants`] after every update. The checks run in debug builds and
//! in release builds with the `strict-invariants` or `check-invariants`
//! feature; otherwise [`debug_invariants!`](crate::debug_invariants) expands
//! to nothing.

use crate::semiorder_error::SemiorderError;

/// Trait for validating tracker state invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), SemiorderError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
