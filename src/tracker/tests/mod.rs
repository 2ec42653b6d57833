use super::*;

use static_assertions::assert_impl_all;

assert_impl_all!(ExactTracker: Send, Sync, Clone);
assert_impl_all!(ApproximateTracker: Send, Sync, Clone);
assert_impl_all!(EboStreamTracker: Send, Sync, Clone);
assert_impl_all!(TrackerConfig: Send, Sync);

fn pt(v: &[f64]) -> Point {
    Point::new(v.to_vec()).unwrap()
}

/// Five points in three dimensions; `x`, `y` and `z` form a preference cycle.
fn scenario() -> Vec<Point> {
    vec![
        pt(&[1.0, 3.0, 3.0]),
        pt(&[1.1, 2.0, 3.0]),
        pt(&[1.2, 1.0, 3.0]),
        pt(&[1.3, 0.0, 3.0]),
        pt(&[1.1, 4.0, 3.0]),
    ]
}

#[test]
fn exact_tracker_on_scenario() {
    let pts = scenario();
    let mut t = ExactTracker::from_slack(vec![0.1, 0.2, 0.3]).unwrap();
    for p in &pts {
        t.ingest(p.clone()).unwrap();
    }
    assert_eq!(t.candidates(), &pts[..2]);
    assert_eq!(t.discarded(), &pts[2..]);
    let split = t.get_minimals();
    assert_eq!(split.minimals, vec![&pts[1]]);
    assert_eq!(split.retained, vec![&pts[0]]);
    assert_eq!(t.decision(), Some(&pts[1]));
}

#[test]
fn exact_tracker_is_idempotent_on_candidates() {
    let pts = scenario();
    let mut t = ExactTracker::from_slack(vec![0.1, 0.2, 0.3]).unwrap();
    for p in &pts {
        t.ingest(p.clone()).unwrap();
    }
    let before: Vec<Point> = t.candidates().to_vec();
    let out = t.ingest(pts[1].clone()).unwrap();
    assert_eq!(out, IngestOutcome::Inserted { evicted: 0 });
    assert_eq!(&t.candidates()[..2], &before[..]);
    assert_eq!(t.get_minimals().minimals, vec![&pts[1], &pts[1]]);
}

#[test]
fn trackers_from_config_agree_with_direct_construction() {
    let slack = Thresholds::new(vec![0.1, 0.2, 0.3]).unwrap();
    let mut boxed = TrackerConfig::exact(slack.clone()).build().unwrap();
    let mut direct = ExactTracker::new(slack);
    for p in scenario() {
        assert_eq!(boxed.ingest(p.clone()).unwrap(), direct.ingest(p).unwrap());
    }
    assert_eq!(boxed.candidates(), direct.candidates());
    assert_eq!(boxed.stats(), direct.stats());
}

#[test]
fn stats_count_comparisons() {
    let mut t = ExactTracker::from_slack(vec![0.1, 0.2, 0.3]).unwrap();
    for p in scenario() {
        t.ingest(p).unwrap();
    }
    let stats = t.stats();
    assert_eq!(stats.ingested, 5);
    assert!(stats.comparisons >= 4);
    assert!(stats.max_candidates >= t.candidates().len());
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["ingested"], 5);
}
