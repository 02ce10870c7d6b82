//! Basis function checks against the worked examples of "The NURBS Book", ch. 2.

use approx::assert_abs_diff_eq;
use knotwork_geometry::basis::{active_basis, basis, basis_family, basis_fn, knot_span_for};

const EX_2_1: [f64; 6] = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
const EX_2_2: [f64; 11] = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0, 5.0, 5.0, 5.0];

/// Compare `actual` with `expected` at 100 samples of `[lower, upper)`.
fn assert_matches_on<F, G>(actual: F, expected: G, lower: f64, upper: f64)
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    for step in 0..100 {
        let u = lower + (upper - lower) * step as f64 / 100.0;
        let (a, e) = (actual(u), expected(u));
        assert!((a - e).abs() < 1e-5, "when u = {}: got {}, expected {}", u, a, e);
    }
}

fn linspace(count: usize, start: f64, end: f64) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| start + (end - start) * i as f64 / (count - 1) as f64)
}

#[test]
fn test_example_2_1() {
    let n = |i, p| basis_fn(&EX_2_1, p, i);

    assert_matches_on(|u| n(0, 0).eval(u), |_| 0.0, -10.0, 10.0);
    assert_eq!(n(1, 0).eval(-10.0), 0.0);
    assert_matches_on(|u| n(2, 0).eval(u), |_| 1.0, 0.0, 1.0);
    assert_eq!(n(3, 0).eval(-10.0), 0.0);
    assert_eq!(n(4, 0).eval(-10.0), 0.0);

    assert_matches_on(|u| n(0, 1).eval(u), |_| 0.0, -10.0, 10.0);
    assert_matches_on(|u| n(1, 1).eval(u), |u| 1.0 - u, 0.0, 1.0);
    assert_matches_on(|u| n(1, 1).eval(u), |_| 0.0, -10.0, 0.0);
    assert_matches_on(|u| n(1, 1).eval(u), |_| 0.0, 1.0, 10.0);

    assert_matches_on(|u| n(0, 2).eval(u), |u| (1.0 - u).powi(2), 0.0, 1.0);
    assert_matches_on(|u| n(1, 2).eval(u), |u| 2.0 * u * (1.0 - u), 0.0, 1.0);
    assert_matches_on(|u| n(2, 2).eval(u), |u| u * u, 0.0, 1.0);
}

#[test]
fn test_example_2_2_degree_zero() {
    let n = |i| basis_fn(&EX_2_2, 0, i);

    assert_matches_on(|u| n(0).eval(u), |_| 0.0, -10.0, 10.0);
    assert_matches_on(|u| n(1).eval(u), |_| 0.0, -10.0, 10.0);
    assert_matches_on(|u| n(2).eval(u), |_| 1.0, 0.0, 1.0);
    assert_matches_on(|u| n(3).eval(u), |_| 1.0, 1.0, 2.0);
    assert_matches_on(|u| n(4).eval(u), |_| 1.0, 2.0, 3.0);
    assert_matches_on(|u| n(5).eval(u), |_| 1.0, 3.0, 4.0);
    assert_matches_on(|u| n(6).eval(u), |_| 0.0, -10.0, 10.0);
    assert_matches_on(|u| n(7).eval(u), |_| 1.0, 4.0, 5.0);
    assert_matches_on(|u| n(8).eval(u), |_| 0.0, -10.0, 10.0);
    assert_matches_on(|u| n(9).eval(u), |_| 0.0, -10.0, 10.0);
}

#[test]
fn test_example_2_2_higher_degree() {
    let family = |p| basis_family(&EX_2_2, p);
    let n1 = family(1);
    let n2 = family(2);

    assert_matches_on(|u| n1.eval(0, u), |_| 0.0, -10.0, 10.0);
    assert_matches_on(|u| n1.eval(1, u), |u| 1.0 - u, 0.0, 1.0);

    assert_matches_on(|u| n1.eval(2, u), |_| 0.0, -10.0, 0.0);
    assert_matches_on(|u| n1.eval(2, u), |u| u, 0.0, 1.0);
    assert_matches_on(|u| n1.eval(2, u), |u| 2.0 - u, 1.0, 2.0);
    assert_matches_on(|u| n1.eval(2, u), |_| 0.0, 2.0, 10.0);

    assert_matches_on(|u| n1.eval(3, u), |_| 0.0, -10.0, 1.0);
    assert_matches_on(|u| n1.eval(3, u), |u| u - 1.0, 1.0, 2.0);
    assert_matches_on(|u| n1.eval(3, u), |u| 3.0 - u, 2.0, 3.0);
    assert_matches_on(|u| n1.eval(3, u), |_| 0.0, 3.0, 10.0);

    assert_matches_on(|u| n2.eval(0, u), |u| (1.0 - u).powi(2), 0.0, 1.0);
    assert_matches_on(|u| n2.eval(1, u), |u| 2.0 * u - 1.5 * u * u, 0.0, 1.0);
    assert_matches_on(|u| n2.eval(1, u), |u| 0.5 * (2.0 - u).powi(2), 1.0, 2.0);
    assert_matches_on(|u| n2.eval(5, u), |u| (u - 3.0).powi(2), 3.0, 4.0);
    assert_matches_on(|u| n2.eval(5, u), |u| (5.0 - u).powi(2), 4.0, 5.0);
}

#[test]
fn test_partition_of_unity() {
    let p = 2;
    let n = basis_family(&EX_2_2, p);
    for u in linspace(100, 0.0, 4.9999) {
        let span = knot_span_for(&EX_2_2, u).unwrap();
        let sum: f64 = (span - p..=span).map(|j| n.eval(j, u)).sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_partition_of_unity_cubic() {
    let knots = [0.0, 0.0, 0.0, 0.0, 0.3, 0.5, 0.5, 0.9, 1.0, 1.0, 1.0, 1.0];
    for u in linspace(200, 0.0, 0.9999) {
        let (_, values) = active_basis(&knots, 3, u).unwrap();
        assert_abs_diff_eq!(values.iter().sum::<f64>(), 1.0, epsilon = 1e-5);
        assert!(values.iter().all(|&v| v >= -1e-15));
    }
}

#[test]
fn test_knot_span_search() {
    assert_eq!(knot_span_for(&EX_2_2, 0.0), Some(2));
    assert_eq!(knot_span_for(&EX_2_2, 0.5), Some(2));
    assert_eq!(knot_span_for(&EX_2_2, 1.0), Some(3));
    assert_eq!(knot_span_for(&EX_2_2, 2.0), Some(4));
    assert_eq!(knot_span_for(&EX_2_2, 5.0), Some(10));
}

#[test]
fn test_repeated_evaluation_is_bit_identical() {
    let n = basis_fn(&EX_2_2, 2, 4);
    for u in linspace(30, 0.0, 5.0) {
        let first = n.eval(u);
        assert_eq!(n.eval(u).to_bits(), first.to_bits());
        assert_eq!(basis(&EX_2_2, 2, 4, u).to_bits(), first.to_bits());
    }
}
