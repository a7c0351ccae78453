//! Real root isolation for real polynomials
//!
//! # Algorithm
//!
//! 1. Degree 1: closed form `-c₀/c₁`.
//! 2. Otherwise find the real roots of p' recursively. Together with the
//!    Cauchy bound `(-1 - M/|cₙ|, 1 + M/|cₙ|)`, where M is the largest
//!    non-leading coefficient magnitude, they split the line into brackets on
//!    which p is monotone.
//! 3. Each bracket holds at most one root. An endpoint that evaluates to
//!    exactly zero is returned as is; equal endpoint signs mean no root.
//! 4. Bisect until the midpoint satisfies the Fourier condition
//!    `p(x)·p''(x) > 0`, then run Newton from there until two successive
//!    estimates differ by less than [`NEWTON_ACCURACY`].
//!
//! A root of even multiplicity that is not hit exactly at a critical point
//! produces equal endpoint signs and is not reported.

use super::types::Polynomial;
use log::{debug, trace};

/// Newton stops once successive estimates are this close
pub const NEWTON_ACCURACY: f64 = 1e-12;

/// Hard cap on bisection steps per bracket
pub const MAX_BISECTIONS: usize = 2_000;

/// Hard cap on Newton steps per bracket
pub const MAX_NEWTON_STEPS: usize = 200;

/// Find all real roots of `polynomial`, in ascending order
///
/// Exact-zero leading coefficients are ignored. Constant and empty
/// polynomials have no roots.
pub fn find_roots(polynomial: &Polynomial) -> Vec<f64> {
    let mut coeffs = polynomial.coeffs().to_vec();
    while coeffs.last() == Some(&0.0) {
        coeffs.pop();
    }
    find_roots_trimmed(&Polynomial::new(coeffs))
}

fn find_roots_trimmed(p: &Polynomial) -> Vec<f64> {
    let coeffs = p.coeffs();
    match coeffs.len() {
        0 | 1 => return Vec::new(),
        2 => return vec![-coeffs[0] / coeffs[1]],
        _ => {}
    }

    let (low, high) = root_bounds(p);
    let dp = p.derivative();
    let d2p = dp.derivative();
    let extremes = find_roots_trimmed(&dp);

    let mut edges = Vec::with_capacity(extremes.len() + 2);
    edges.push(low);
    edges.extend_from_slice(&extremes);
    edges.push(high);

    let roots: Vec<f64> = edges
        .windows(2)
        .filter_map(|w| solve_bracket(p, &dp, &d2p, w[0], w[1]))
        .collect();

    trace!(
        "degree {} polynomial: {} critical points, {} real roots",
        p.degree(),
        extremes.len(),
        roots.len()
    );
    roots
}

/// Cauchy-style interval containing every real root
pub fn root_bounds(p: &Polynomial) -> (f64, f64) {
    let coeffs = p.coeffs();
    let lead = p.leading().abs();
    let max = coeffs[..coeffs.len() - 1]
        .iter()
        .fold(0.0, |acc: f64, c| acc.max(c.abs()));
    (-1.0 - max / lead, 1.0 + max / lead)
}

/// True when Newton started at x converges monotonically
#[inline]
fn fourier_condition(p: &Polynomial, d2p: &Polynomial, x: f64) -> bool {
    d2p.eval(x) * p.eval(x) > 0.0
}

fn solve_bracket(
    p: &Polynomial,
    dp: &Polynomial,
    d2p: &Polynomial,
    mut left: f64,
    mut right: f64,
) -> Option<f64> {
    if left == right {
        return None;
    }

    let left_value = p.eval(left);
    let right_value = p.eval(right);

    if left_value == 0.0 {
        return Some(left);
    }
    if right_value == 0.0 {
        return Some(right);
    }
    if left_value.is_sign_negative() == right_value.is_sign_negative() {
        return None;
    }

    let right_negative = right_value.is_sign_negative();
    let mut middle = (left + right) / 2.0;
    let mut steps = 0;
    while !fourier_condition(p, d2p, middle) {
        let value = p.eval(middle);
        if value == 0.0 {
            return Some(middle);
        }
        if steps == MAX_BISECTIONS {
            debug!("bisection cap reached on [{left}, {right}], using midpoint {middle}");
            break;
        }
        if value.is_sign_negative() == right_negative {
            right = middle;
        } else {
            left = middle;
        }
        let next = (left + right) / 2.0;
        if next == left || next == right {
            // bracket collapsed to adjacent floats
            return Some(next);
        }
        middle = next;
        steps += 1;
    }

    Some(newton(p, dp, middle, left, right))
}

/// Newton refinement from `start`, falling back to `start` if the iteration
/// leaves `[left, right]` or the derivative vanishes.
fn newton(p: &Polynomial, dp: &Polynomial, start: f64, left: f64, right: f64) -> f64 {
    let mut prev = start;
    for _ in 0..MAX_NEWTON_STEPS {
        let slope = dp.eval(prev);
        if slope == 0.0 {
            return prev;
        }
        let cur = prev - p.eval(prev) / slope;
        if !cur.is_finite() || cur < left || cur > right {
            debug!("newton left bracket [{left}, {right}] from {start}");
            return start;
        }
        if (prev - cur).abs() < NEWTON_ACCURACY {
            return cur;
        }
        prev = cur;
    }
    debug!("newton step cap reached from {start}");
    prev
}
