//! Slack-aware lexicographic comparison.
//!
//! Dimensions are examined in priority order `0..d`. In dimension `i`, `x`
//! strictly precedes `y` iff `x[i] + σ[i] < y[i]`; the first dimension with a
//! strict precedence in either direction decides the comparison. When no
//! dimension decides, the points are indifferent and each weakly precedes the
//! other.
//!
//! The resulting relation is total and reflexive but **not transitive**:
//! chains of indifferences can close into preference cycles. The incremental
//! trackers only ever compare pairs; the batch engine in
//! [`crate::algs::relation`] resolves cycles explicitly.
//!
//! All boundary comparisons are inclusive on the indifference side: a
//! difference of exactly `σ[i]` is a tie, and discardability accepts
//! `by[k] == target[k]`.

use itertools::izip;

/// Outcome of comparing `x` against `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Precedence {
    /// `x` strictly precedes `y` in the first deciding dimension.
    Precedes,
    /// `y` strictly precedes `x` in the first deciding dimension.
    Succeeds,
    /// No dimension decides; `x` and `y` are mutually indifferent.
    Indifferent,
}

/// `x[i] + σ[i] < y[i]`.
#[inline]
pub fn strictly_precedes_at(x: &[f64], y: &[f64], slack: &[f64], i: usize) -> bool {
    x[i] + slack[i] < y[i]
}

/// First dimension where one point strictly precedes the other.
pub fn first_strict_dimension(x: &[f64], y: &[f64], slack: &[f64]) -> Option<(usize, Precedence)> {
    debug_assert_eq!(x.len(), slack.len());
    debug_assert_eq!(y.len(), slack.len());
    for (i, (&a, &b, &s)) in izip!(x, y, slack).enumerate() {
        if a + s < b {
            return Some((i, Precedence::Precedes));
        }
        if b + s < a {
            return Some((i, Precedence::Succeeds));
        }
    }
    None
}

/// Lexicographic semiorder comparison of `x` against `y`.
#[inline]
pub fn lex_compare(x: &[f64], y: &[f64], slack: &[f64]) -> Precedence {
    first_strict_dimension(x, y, slack).map_or(Precedence::Indifferent, |(_, p)| p)
}

/// The weak relation `x R y`: `x` strictly precedes `y` or they are indifferent.
#[inline]
pub fn weakly_precedes(x: &[f64], y: &[f64], slack: &[f64]) -> bool {
    lex_compare(x, y, slack) != Precedence::Succeeds
}

/// Exact discardability: `target` may be discarded by `by`, whose strict
/// advantage was detected at dimension `i`, iff `by[k] <= target[k]` for every
/// earlier dimension `k < i`.
#[inline]
pub fn discardable(by: &[f64], target: &[f64], i: usize) -> bool {
    by[..i].iter().zip(&target[..i]).all(|(&b, &t)| b <= t)
}

/// Epsilon-relaxed discardability: `by[k] - ε[k] <= target[k]` for every
/// `k < i`.
#[inline]
pub fn discardable_within(by: &[f64], target: &[f64], i: usize, epsilon: &[f64]) -> bool {
    izip!(&by[..i], &target[..i], &epsilon[..i]).all(|(&b, &t, &e)| b - e <= t)
}
