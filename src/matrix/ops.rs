//! Dense products
//!
//! Each product computes every output cell as an independent fixed-order dot
//! product, fanned out through [`parallel::fill_cells`](super::parallel). The
//! order of accumulation inside a cell never changes, so parallel and serial
//! runs are bit-identical.

use super::parallel::fill_cells;
use super::{Column, Matrix, Row};
use crate::error::{Error, Result};

/// Matrix × column: y = A·x
pub fn mul_column(a: &Matrix, x: &Column) -> Result<Column> {
    let n = a.dim();
    if x.len() != n {
        return Err(Error::shape_mismatch(&[n], &[x.len()]));
    }

    let xs = x.as_slice();
    let mut out = vec![0.0; n];
    fill_cells(&mut out, |i| dot(a.row(i), xs));
    Ok(Column::new(out))
}

/// Row × matrix: y = x·A
pub fn row_mul(x: &Row, a: &Matrix) -> Result<Row> {
    let n = a.dim();
    if x.len() != n {
        return Err(Error::shape_mismatch(&[n], &[x.len()]));
    }

    let xs = x.as_slice();
    let data = a.as_slice();
    let mut out = vec![0.0; n];
    fill_cells(&mut out, |j| {
        let mut sum = 0.0;
        for (k, &xk) in xs.iter().enumerate() {
            sum += xk * data[k * n + j];
        }
        sum
    });
    Ok(Row::new(out))
}

/// Matrix × matrix: C = A·B
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let n = a.dim();
    if b.dim() != n {
        return Err(Error::shape_mismatch(&[n, n], &[b.dim(), b.dim()]));
    }

    let bd = b.as_slice();
    let mut out = Matrix::zeros(n);
    fill_cells(out.as_mut_slice(), |cell| {
        let (i, j) = (cell / n, cell % n);
        let mut sum = 0.0;
        for (k, &aik) in a.row(i).iter().enumerate() {
            sum += aik * bd[k * n + j];
        }
        sum
    });
    Ok(out)
}

#[inline]
pub(crate) fn dot(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs).map(|(a, b)| a * b).sum()
}
