//! Stream trackers against the batch algorithms on fixed data sets.

use lex_semiorder::algs::bottom_cycles::select;
use lex_semiorder::algs::compare::{ApproximationReport, is_subset};
use lex_semiorder::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn slack() -> Thresholds {
    Thresholds::new(vec![0.1, 0.2, 0.3]).unwrap()
}

fn scenario() -> Vec<Point> {
    [
        [1.0, 3.0, 3.0],
        [1.1, 2.0, 3.0],
        [1.2, 1.0, 3.0],
        [1.3, 0.0, 3.0],
        [1.1, 4.0, 3.0],
    ]
    .into_iter()
    .map(|p| Point::try_from(p).unwrap())
    .collect()
}

fn random_stream(seed: u64, n: usize) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let coords: Vec<f64> = (0..3).map(|_| rng.gen_range(0.0..2.0)).collect();
            Point::new(coords).unwrap()
        })
        .collect()
}

#[test]
fn scenario_batch_results() {
    let pts = scenario();
    let s = slack();

    // x, y, z form a cycle; w and q are pulled into the same strongly connected part
    let cycles = minimal_cycles(&pts, &s).unwrap();
    assert_eq!(cycles.indices(), &[0, 1, 2, 3, 4]);
    assert_eq!(cycles.cycles(), vec![vec![0, 1, 2, 3, 4]]);

    let cycles3 = minimal_cycles(&pts[..3], &s).unwrap();
    assert_eq!(cycles3.indices(), &[0, 1, 2]);

    assert_eq!(split_minimals(&pts, &s).unwrap().minimals, vec![&pts[1]]);
    assert_eq!(ebo(&pts, &s).unwrap(), Some(&pts[1]));
    assert!(minimal_small(&pts, &s).unwrap().is_empty());
}

#[test]
fn scenario_weak_relation_matrix() {
    let weak = RelationMatrix::weak(&scenario(), &slack()).unwrap();
    assert_eq!(weak.to_string(), "10111\n11011\n01101\n00110\n00011\n");
}

#[test]
fn exact_tracker_reproduces_survivors_on_random_streams() {
    let s = slack();
    for seed in 0..20 {
        let stream = random_stream(seed, 200);
        let mut t = ExactTracker::new(s.clone());
        for p in &stream {
            t.ingest(p.clone()).unwrap();
        }
        let streamed = t.get_minimals().minimals;
        let batch = survivors(&stream, &s).unwrap();
        assert_eq!(streamed.len(), batch.len(), "seed {seed}");
        assert!(is_subset(&streamed, &batch), "seed {seed}");
        assert!(t.candidates().len() <= stream.len());
    }
}

#[test]
fn survivors_and_bottom_cycles_differ_on_scenario() {
    let pts = scenario();
    let s = slack();
    let survivor_set = survivors(&pts, &s).unwrap();
    let cycles = minimal_cycles(&pts, &s).unwrap();
    let cycle_set = select(&pts, cycles.indices());

    assert_eq!(survivor_set, vec![&pts[1]]);
    assert_eq!(cycle_set.len(), pts.len());
    assert!(is_subset(&survivor_set, &cycle_set));
    assert!(!is_subset(&cycle_set, &survivor_set));
}

#[test]
fn approximate_tracker_reports_deviation() {
    let s = Thresholds::new(vec![0.1, 0.2, 0.1]).unwrap();
    let eps = Thresholds::new(vec![0.02, 0.05, 0.02]).unwrap();
    let stream = [
        [2.0, 1.0, 1.2],
        [2.0, 1.1, 1.0],
        [2.01, 0.99, 1.19],
        [2.01, 1.01, 1.01],
    ];
    let mut exact = ExactTracker::new(s.clone());
    let mut approx = ApproximateTracker::new(s, eps.clone()).unwrap();
    for p in stream {
        exact.ingest_coords(&p).unwrap();
        approx.ingest_coords(&p).unwrap();
    }
    assert!(approx.candidates().len() < exact.candidates().len());
    assert!(is_subset(approx.candidates(), exact.candidates()));

    let report = ApproximationReport::compare(exact.candidates(), approx.candidates(), &eps).unwrap();
    assert_eq!(report.missing.len(), 2);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["missing"].as_array().map(Vec::len), Some(2));

    // the exact minimal points themselves are all kept
    let exact_minimals = exact.get_minimals().minimals;
    assert_eq!(exact_minimals.len(), 2);
    let report = ApproximationReport::compare(&exact_minimals, approx.candidates(), &eps).unwrap();
    assert!(report.missing.is_empty());
    assert!(report.within_bound());
}

#[test]
fn chained_evictions_can_drift_past_epsilon() {
    let s = Thresholds::new(vec![0.1, 0.1]).unwrap();
    let eps = Thresholds::new(vec![0.05, 0.05]).unwrap();
    let stream = [[0.0, 0.0], [-0.04, 5.0], [-0.12, 10.0]];
    let mut exact = ExactTracker::new(s.clone());
    let mut approx = ApproximateTracker::new(s, eps.clone()).unwrap();
    for p in stream {
        exact.ingest_coords(&p).unwrap();
        approx.ingest_coords(&p).unwrap();
    }

    let drifted = Point::try_from([-0.04, 5.0]).unwrap();
    let exact_minimals = exact.get_minimals().minimals;
    assert_eq!(exact_minimals, vec![&drifted]);
    assert_eq!(approx.candidates(), &[Point::try_from([-0.12, 10.0]).unwrap()]);

    let report = ApproximationReport::compare(&exact_minimals, approx.candidates(), &eps).unwrap();
    assert_eq!(report.missing.len(), 1);
    assert!(!report.missing[0].within_bound);
    assert!(!report.within_bound());
}

#[test]
fn ebo_stream_tracker_matches_batch_on_random_streams() {
    let s = slack();
    for seed in 100..120 {
        let stream = random_stream(seed, 200);
        let mut t = EboStreamTracker::new(s.clone());
        for p in &stream {
            t.ingest(p.clone()).unwrap();
        }
        assert_eq!(t.decision(), ebo(&stream, &s).unwrap(), "seed {seed}");
        assert!(t.candidates().len() < stream.len());
    }
}

#[test]
fn batch_queries_validate_input() {
    let s = slack();
    let bad = vec![vec![1.0, 2.0]];
    assert_eq!(
        split_minimals(&bad, &s).unwrap_err(),
        SemiorderError::DimensionMismatch {
            expected: 3,
            found: 2
        }
    );
    let nan = vec![vec![1.0, f64::NAN, 2.0]];
    assert_eq!(
        minimal_cycles(&nan, &s).unwrap_err(),
        SemiorderError::NanCoordinate { dim: 1 }
    );
    let empty: Vec<Point> = Vec::new();
    assert!(split_minimals(&empty, &s).unwrap().is_empty());
    assert!(minimal_cycles(&empty, &s).unwrap().is_empty());
    assert_eq!(ebo(&empty, &s).unwrap(), None);
}
