//! Integration tests for the real root solver
//!
//! Tests verify:
//! - Round trip: expanding (x − r₁)…(x − r_k) and solving recovers the roots
//! - Roots are reported in ascending order
//! - Polynomials without real roots yield nothing

use eigr::algorithm::polynomial::{Polynomial, find_roots, root_bounds};
use rand::Rng;

mod common;
use common::assert_allclose_f64;

#[test]
fn test_round_trip_fixed() {
    let cases: &[&[f64]] = &[
        &[3.0],
        &[-1.0, 2.0],
        &[-2.0, 1.0, 4.0],
        &[-3.5, -1.0, 0.25, 2.0, 6.0],
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    ];
    for roots in cases {
        let p = Polynomial::from_roots(roots);
        let found = find_roots(&p);
        assert_allclose_f64(&found, roots, 0.0, 1e-9, &format!("roots {roots:?}"));
    }
}

#[test]
fn test_round_trip_random_separated() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let k = rng.random_range(1..=6);
        // consecutive roots at least 1 apart
        let roots: Vec<f64> = (0..k)
            .map(|i| 2.0 * i as f64 - k as f64 + rng.random_range(0.0..1.0))
            .collect();
        let p = Polynomial::from_roots(&roots);
        let found = find_roots(&p);
        assert_allclose_f64(&found, &roots, 0.0, 1e-9, &format!("roots {roots:?}"));
    }
}

#[test]
fn test_scaled_polynomial_has_same_roots() {
    let p = Polynomial::from_roots(&[-1.5, 0.5, 3.0]);
    let scaled = Polynomial::new(p.coeffs().iter().map(|c| -4.0 * c).collect());
    assert_allclose_f64(&find_roots(&scaled), &[-1.5, 0.5, 3.0], 0.0, 1e-9, "scaled");
}

#[test]
fn test_only_real_roots_reported() {
    // (x² + 1)(x − 2)
    let p = Polynomial::new(vec![1.0, 0.0, 1.0]).multiply(&Polynomial::new(vec![-2.0, 1.0]));
    assert_allclose_f64(&find_roots(&p), &[2.0], 0.0, 1e-12, "mixed");

    // x⁴ + 1
    assert!(find_roots(&Polynomial::new(vec![1.0, 0.0, 0.0, 0.0, 1.0])).is_empty());
}

#[test]
fn test_roots_inside_bounds() {
    let p = Polynomial::from_roots(&[-12.0, 0.1, 30.0]);
    let (low, high) = root_bounds(&p);
    for r in find_roots(&p) {
        assert!(low < r && r < high, "{r} outside ({low}, {high})");
    }
}
