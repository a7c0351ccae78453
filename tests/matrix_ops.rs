//! Integration tests for matrix primitives
//!
//! Tests verify:
//! - Parallel products equal a sequential reference on random matrices
//! - Row × matrix agrees with transpose × column
//! - Dimension mismatches are reported as errors

use eigr::error::Error;
use eigr::matrix::{Column, Matrix, Row, matmul, mul_column, row_mul};

mod common;
use common::assert_allclose_f64;

fn reference_matmul(a: &Matrix, b: &Matrix) -> Vec<f64> {
    let n = a.dim();
    let mut out = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a.get(i, k) * b.get(k, j);
            }
            out[i * n + j] = sum;
        }
    }
    out
}

#[test]
fn test_matmul_matches_sequential_reference() {
    for n in [1, 3, 8, 33] {
        let a = Matrix::random(n, -1.0, 1.0);
        let b = Matrix::random(n, -1.0, 1.0);
        let c = matmul(&a, &b).unwrap();
        assert_eq!(c.as_slice(), reference_matmul(&a, &b).as_slice(), "n = {n}");
    }
}

#[test]
fn test_mul_column_matches_sequential_reference() {
    let n = 100;
    let a = Matrix::random(n, -5.0, 5.0);
    let x: Vec<f64> = (0..n).map(|i| (i as f64).sin()).collect();
    let y = mul_column(&a, &Column::new(x.clone())).unwrap();

    let expected: Vec<f64> = (0..n)
        .map(|i| (0..n).map(|k| a.get(i, k) * x[k]).sum())
        .collect();
    assert_allclose_f64(y.as_slice(), &expected, 1e-12, 1e-12, "mul_column");
}

#[test]
fn test_row_mul_is_transposed_product() {
    let n = 20;
    let a = Matrix::random(n, -1.0, 1.0);
    let x: Vec<f64> = (0..n).map(|i| i as f64 - 10.0).collect();

    let left = row_mul(&Row::new(x.clone()), &a).unwrap();
    let mut at = a.clone();
    at.transpose_in_place();
    let right = at.mul_column(&Column::new(x)).unwrap();
    assert_allclose_f64(left.as_slice(), right.as_slice(), 1e-12, 1e-12, "row_mul");
}

#[test]
fn test_identity_is_neutral() {
    let a = Matrix::random(12, 0.0, 3.0);
    let i = Matrix::identity(12);
    assert_eq!(a.matmul(&i).unwrap(), a);
    assert_eq!(i.matmul(&a).unwrap(), a);
}

#[test]
fn test_random_respects_range() {
    let a = Matrix::random(10, 2.0, 3.0);
    assert!(a.as_slice().iter().all(|&v| (2.0..=3.0).contains(&v)));
}

#[test]
fn test_dimension_mismatch() {
    let a = Matrix::identity(3);
    assert!(matches!(
        mul_column(&a, &Column::zeros(2)),
        Err(Error::ShapeMismatch { .. })
    ));
    assert!(matches!(
        row_mul(&Row::zeros(4), &a),
        Err(Error::ShapeMismatch { .. })
    ));
    assert!(matches!(
        matmul(&a, &Matrix::identity(2)),
        Err(Error::ShapeMismatch { .. })
    ));
}

#[test]
fn test_ragged_rows_rejected() {
    let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert!(matches!(err, Error::NotSquare { row: 1, len: 1, .. }));
}
