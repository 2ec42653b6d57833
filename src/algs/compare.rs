//! Set comparisons between exact and approximate results.
//!
//! Points are matched by exact coordinate equality; trackers never alter the
//! coordinates they store, so a point surviving in both runs compares equal.

use crate::algs::check_dims;
use crate::order::Thresholds;
use crate::semiorder_error::SemiorderError;

/// `true` if `set` holds a point with exactly the coordinates of `p`.
pub fn contains_point<P: AsRef<[f64]>>(set: &[P], p: &[f64]) -> bool {
    set.iter().any(|q| q.as_ref() == p)
}

/// Points of `superset` that do not occur in `subset`.
pub fn not_contained_in<'a, P, Q>(subset: &[Q], superset: &'a [P]) -> Vec<&'a P>
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    superset
        .iter()
        .filter(|p| !contains_point(subset, p.as_ref()))
        .collect()
}

/// `true` if every point of `a` also occurs in `b`.
pub fn is_subset<P: AsRef<[f64]>, Q: AsRef<[f64]>>(a: &[P], b: &[Q]) -> bool {
    a.iter().all(|p| contains_point(b, p.as_ref()))
}

/// How far one exact point lies from its closest approximate stand-in.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Deviation {
    /// The exact point missing from the approximate set.
    pub point: Vec<f64>,
    /// Closest approximate point, `None` if the approximate set is empty.
    pub nearest: Option<Vec<f64>>,
    /// `|point[i] - nearest[i]|` per dimension (empty without `nearest`).
    pub deviation: Vec<f64>,
    /// `deviation[i] <= ε[i]` in every dimension.
    pub within_bound: bool,
}

/// Deviations of every exact point absent from an approximate result.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ApproximationReport {
    pub epsilon: Vec<f64>,
    pub missing: Vec<Deviation>,
}

impl ApproximationReport {
    /// Compare an exact point set against an approximate one.
    ///
    /// Each exact point not found in `approximate` is paired with the
    /// approximate point minimizing `max_i |p[i] - q[i]| / ε[i]`.
    pub fn compare<P, Q>(
        exact: &[P],
        approximate: &[Q],
        epsilon: &Thresholds,
    ) -> Result<Self, SemiorderError>
    where
        P: AsRef<[f64]>,
        Q: AsRef<[f64]>,
    {
        check_dims(exact, epsilon.dim())?;
        check_dims(approximate, epsilon.dim())?;
        let missing = not_contained_in(approximate, exact)
            .into_iter()
            .map(|p| deviation_of(p.as_ref(), approximate, epsilon))
            .collect();
        Ok(Self {
            epsilon: epsilon.to_vec(),
            missing,
        })
    }

    /// `true` if every missing exact point has an approximate point within `ε`.
    pub fn within_bound(&self) -> bool {
        self.missing.iter().all(|d| d.within_bound)
    }

    /// Component-wise maximum deviation over all missing points.
    pub fn max_deviation(&self) -> Option<Vec<f64>> {
        let mut acc: Option<Vec<f64>> = None;
        for d in self.missing.iter().filter(|d| d.nearest.is_some()) {
            match acc.as_mut() {
                None => acc = Some(d.deviation.clone()),
                Some(max) => {
                    for (m, &v) in max.iter_mut().zip(&d.deviation) {
                        *m = m.max(v);
                    }
                }
            }
        }
        acc
    }
}

fn deviation_of<Q: AsRef<[f64]>>(p: &[f64], approximate: &[Q], epsilon: &[f64]) -> Deviation {
    let nearest = approximate
        .iter()
        .map(AsRef::as_ref)
        .map(|q| (scaled_distance(p, q, epsilon), q))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, q)| q);
    match nearest {
        None => Deviation {
            point: p.to_vec(),
            nearest: None,
            deviation: Vec::new(),
            within_bound: false,
        },
        Some(q) => {
            let deviation: Vec<f64> = p.iter().zip(q).map(|(a, b)| (a - b).abs()).collect();
            let within_bound = deviation.iter().zip(epsilon).all(|(d, e)| d <= e);
            Deviation {
                point: p.to_vec(),
                nearest: Some(q.to_vec()),
                deviation,
                within_bound,
            }
        }
    }
}

/// `max_i |p[i] - q[i]| / ε[i]`, where a zero `ε[i]` only tolerates equality.
fn scaled_distance(p: &[f64], q: &[f64], epsilon: &[f64]) -> f64 {
    p.iter()
        .zip(q)
        .zip(epsilon)
        .map(|((a, b), &e)| {
            let d = (a - b).abs();
            if e > 0.0 {
                d / e
            } else if d == 0.0 {
                0.0
            } else {
                f64::INFINITY
            }
        })
        .fold(0.0, f64::max)
}
