use super::*;
use crate::core::{Bezier, SegmentEndpoint};
use approx::assert_abs_diff_eq;

fn endpoint_at(curve: &Bezier, t: f64) -> SegmentEndpoint {
    SegmentEndpoint::new(curve.position(t), t)
}

fn course(from: DVec3, to: DVec3) -> PathSegmentRecord {
    PathSegmentRecord::from_curve(Bezier::line(from, to))
}

/// Zwei gerade Courses entlang x, Gesamtlaenge 100, Anstieg 0 → 10.
fn rising_chain() -> (PathSegmentRecord, PathSegmentRecord) {
    let a = course(DVec3::new(0.0, 0.0, 0.0), DVec3::new(50.0, 5.0, 0.0)).first();
    let b = course(DVec3::new(50.0, 5.0, 0.0), DVec3::new(100.0, 10.0, 0.0));
    (a, b)
}

// ── Sortierung ──────────────────────────────────────────────────

#[test]
fn test_sort_moves_first_course_to_front() {
    let (a, b) = rising_chain();
    let mut chain = [b, a];
    sort_courses(&mut chain);
    assert_eq!(chain[0], a);
    assert_eq!(chain[1], b);
}

#[test]
fn test_sort_follows_position_equality() {
    let a = course(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0)).first();
    let b = course(DVec3::new(10.0, 0.0, 0.0), DVec3::new(20.0, 0.0, 0.0));
    let c = course(DVec3::new(20.0, 0.0, 0.0), DVec3::new(30.0, 0.0, 0.0));

    let mut chain = [c, a, b];
    sort_courses(&mut chain);
    assert_eq!(chain, [a, b, c]);
}

#[test]
fn test_sort_keeps_order_when_chain_is_broken() {
    // Kein is_first und B hat keinen Nachfolger: Reihenfolge bleibt
    let (a, b) = rising_chain();
    let mut a_plain = a;
    a_plain.start.flags.is_first = false;

    let mut chain = [b, a_plain];
    sort_courses(&mut chain);
    assert_eq!(chain, [b, a_plain]);
}

#[test]
fn test_sort_handles_empty_and_single() {
    let mut empty: [PathSegmentRecord; 0] = [];
    sort_courses(&mut empty);

    let (a, _) = rising_chain();
    let mut single = [a];
    sort_courses(&mut single);
    assert_eq!(single[0], a);
}

// ── Position entlang der Kette ──────────────────────────────────

#[test]
fn test_position_at_zero_is_chain_start() {
    let (a, b) = rising_chain();
    let chain = [a, b];
    let pos = position_at_distance(&chain, 0.0).expect("Position erwartet");
    assert_abs_diff_eq!(pos.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pos.y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_position_at_total_length_is_chain_end() {
    let (a, b) = rising_chain();
    let chain = [a, b];
    let total: f64 = chain.iter().map(|c| c.length).sum();
    let pos = position_at_distance(&chain, total).expect("Position erwartet");
    assert_abs_diff_eq!(pos.x, 100.0, epsilon = 1e-6);
    assert_abs_diff_eq!(pos.y, 10.0, epsilon = 1e-6);
}

#[test]
fn test_position_beyond_total_length_is_last_end() {
    let (a, b) = rising_chain();
    let chain = [a, b];
    assert_eq!(position_at_distance(&chain, 1000.0), Some(b.end.position));
}

#[test]
fn test_position_on_empty_chain_is_none() {
    assert!(position_at_distance(&[], 5.0).is_none());
    assert!(parameter_at_distance(&[], 5.0).is_none());
}

#[test]
fn test_position_in_second_course() {
    let (a, b) = rising_chain();
    let chain = [a, b];
    let pos = position_at_distance(&chain, 75.0).expect("Position erwartet");
    assert_abs_diff_eq!(pos.x, 75.0, epsilon = 1e-6);
    assert_abs_diff_eq!(pos.y, 7.5, epsilon = 1e-6);
}

#[test]
fn test_parameter_is_monotonic_along_chain() {
    let (a, b) = rising_chain();
    let chain = [a, b];
    let mut previous = (0usize, 0.0f64);
    for step in 0..=20 {
        let distance = step as f64 * 5.0;
        let current = parameter_at_distance(&chain, distance).expect("Parameter erwartet");
        assert!(
            current.0 > previous.0 || (current.0 == previous.0 && current.1 >= previous.1),
            "Parameter springt zurueck bei Distanz {}: {:?} nach {:?}",
            distance,
            previous,
            current
        );
        previous = current;
    }
}

#[test]
fn test_parameter_respects_delta_range() {
    // Course deckt nur Delta 0.25..0.75 einer 100m-Kurve ab
    let mut partial = course(DVec3::ZERO, DVec3::new(100.0, 0.0, 0.0));
    partial.start = endpoint_at(&partial.curve, 0.25);
    partial.end = endpoint_at(&partial.curve, 0.75);
    partial.length = 50.0;

    let (index, t) = parameter_at_distance(&[partial], 25.0).expect("Parameter erwartet");
    assert_eq!(index, 0);
    assert_abs_diff_eq!(t, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(partial.curve_length(), 50.0, epsilon = 1e-6);
}

// ── Steigung ────────────────────────────────────────────────────

#[test]
fn test_slope_ten_percent() {
    let slope = slope_percent(0.0, 10.0, 100.0).expect("Steigung erwartet");
    assert_abs_diff_eq!(slope, 10.0, epsilon = 1e-12);
    let descent = slope_percent(10.0, 0.0, 100.0).expect("Gefaelle erwartet");
    assert_abs_diff_eq!(descent, -10.0, epsilon = 1e-12);
}

#[test]
fn test_slope_length_threshold_is_inclusive() {
    assert!(slope_percent(0.0, 1.0, 12.0).is_some());
    assert!(slope_percent(0.0, 1.0, 11.999).is_none());
    assert!(slope_percent(0.0, 1.0, f64::NAN).is_none());
}

#[test]
fn test_small_slope_snaps_to_zero() {
    assert_eq!(slope_percent(0.0, 0.004, 100.0), Some(0.0));
    assert_eq!(slope_percent(0.0, -0.004, 100.0), Some(0.0));
    let visible = slope_percent(0.0, 0.06, 100.0).expect("Steigung erwartet");
    assert_abs_diff_eq!(visible, 0.06, epsilon = 1e-12);
}

// ── Aggregation ─────────────────────────────────────────────────

#[test]
fn test_aggregate_rising_chain() {
    let (a, b) = rising_chain();
    let mut aggregator = CourseAggregator::new();
    let summary = aggregator.aggregate(&[b, a]).expect("Zusammenfassung erwartet");

    assert_eq!(summary.course_count, 2);
    assert_abs_diff_eq!(summary.total_length, 100.0, epsilon = 1e-6);
    assert_abs_diff_eq!(summary.curve_length, 100.0, epsilon = 1e-6);
    assert_eq!(summary.start_elevation, 0.0);
    assert_eq!(summary.end_elevation, 10.0);

    let slope = summary.slope.expect("Steigung erwartet");
    assert_abs_diff_eq!(slope.slope_percent, 10.0, epsilon = 1e-6);
    assert_abs_diff_eq!(slope.midpoint.x, 50.0, epsilon = 1e-6);
    assert_abs_diff_eq!(slope.midpoint.y, 5.0, epsilon = 1e-6);

    assert_eq!(aggregator.chain(), &[a, b]);
}

#[test]
fn test_aggregate_short_chain_has_no_slope() {
    let short = course(DVec3::ZERO, DVec3::new(10.0, 3.0, 0.0)).first();
    let summary = CourseAggregator::new()
        .aggregate(&[short])
        .expect("Zusammenfassung erwartet");
    assert_abs_diff_eq!(summary.curve_length, 10.0, epsilon = 1e-9);
    assert!(summary.slope.is_none());
}

#[test]
fn test_aggregate_excludes_unmeasured_courses() {
    let (a, b) = rising_chain();
    let mut parallel = b;
    parallel.start.flags.is_parallel = true;
    let mut upgrade = b;
    upgrade.creation.upgrade = true;
    let mut replacing = b;
    replacing.original = Some(42);

    let summary = CourseAggregator::new()
        .aggregate(&[a, parallel, upgrade, replacing])
        .expect("Zusammenfassung erwartet");
    assert_eq!(summary.course_count, 1);
    assert_abs_diff_eq!(summary.total_length, 50.0, epsilon = 1e-6);
}

#[test]
fn test_aggregate_without_measured_courses_is_none() {
    let mut aggregator = CourseAggregator::new();
    assert!(aggregator.aggregate(&[]).is_none());

    let (a, _) = rising_chain();
    let mut excluded = a;
    excluded.creation.delete = true;
    assert!(aggregator.aggregate(&[excluded]).is_none());
    assert!(aggregator.chain().is_empty());
}

#[test]
fn test_aggregate_reuses_buffer_between_cycles() {
    let (a, b) = rising_chain();
    let mut aggregator = CourseAggregator::new();
    aggregator.aggregate(&[a, b]);
    let summary = aggregator.aggregate(&[a]).expect("Zusammenfassung erwartet");
    assert_eq!(summary.course_count, 1);
    assert_eq!(aggregator.chain().len(), 1);
}
