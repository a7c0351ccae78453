//! Dense square matrices and real vectors
//!
//! [`Matrix`] is an n×n row-major block of `f64`. [`Column`] and [`Row`] are
//! owned length-n vectors that take part in matrix-vector products. All
//! products live in [`ops`] and fan out one task per output cell.
//!
//! Solvers never mutate a caller's matrix: each entry point clones it first
//! and works on the copy.

pub mod io;
pub mod ops;
pub(crate) mod parallel;

pub use ops::{matmul, mul_column, row_mul};

use crate::error::{Error, Result};
use rand::Rng;

/// Dense n×n real matrix, row-major
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from nested rows
    ///
    /// Fails with [`Error::NotSquare`] when any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::NotSquare {
                    rows: n,
                    row: i,
                    len: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Build an n×n matrix from row-major data of length n²
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        let cells = n
            .checked_mul(n)
            .ok_or_else(|| Error::invalid_argument("n", format!("{n}x{n} overflows usize")))?;
        if data.len() != cells {
            return Err(Error::shape_mismatch(&[cells], &[data.len()]));
        }
        Ok(Self { n, data })
    }

    /// All-zero n×n matrix
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// n×n identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Diagonal matrix with the given entries
    pub fn diagonal(values: &[f64]) -> Self {
        let n = values.len();
        let mut m = Self::zeros(n);
        for (i, &v) in values.iter().enumerate() {
            m.data[i * n + i] = v;
        }
        m
    }

    /// n×n matrix with entries drawn uniformly from `[min, max)`
    ///
    /// Intended for benchmarks and randomized tests.
    pub fn random(n: usize, min: f64, max: f64) -> Self {
        let mut rng = rand::rng();
        let data = (0..n * n)
            .map(|_| min + rng.random::<f64>() * (max - min))
            .collect();
        Self { n, data }
    }

    /// Dimension n
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Entry at (i, j)
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Overwrite entry (i, j)
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
    }

    /// Row i as a slice
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Column j copied out
    pub fn column(&self, j: usize) -> Vec<f64> {
        (0..self.n).map(|i| self.data[i * self.n + j]).collect()
    }

    /// Nested-row copy of the matrix
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n).map(|i| self.row(i).to_vec()).collect()
    }

    /// Row-major backing storage
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Transpose in place
    pub fn transpose_in_place(&mut self) {
        let n = self.n;
        for i in 1..n {
            for j in 0..i {
                self.data.swap(i * n + j, j * n + i);
            }
        }
    }

    /// Swap rows a and b
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let n = self.n;
        for j in 0..n {
            self.data.swap(a * n + j, b * n + j);
        }
    }

    /// Swap columns a and b
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let n = self.n;
        for i in 0..n {
            self.data.swap(i * n + a, i * n + b);
        }
    }

    /// Multiply by a column: A·x
    pub fn mul_column(&self, x: &Column) -> Result<Column> {
        ops::mul_column(self, x)
    }

    /// Multiply by another matrix: A·B
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        ops::matmul(self, rhs)
    }

    /// Largest absolute difference to another matrix of the same size
    pub fn max_abs_diff(&self, other: &Matrix) -> Result<f64> {
        if self.n != other.n {
            return Err(Error::shape_mismatch(
                &[self.n, self.n],
                &[other.n, other.n],
            ));
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max))
    }
}

/// Implement an owned real vector type
///
/// Column and row vectors share storage and norms; they differ only in which
/// side of a matrix product they sit on.
macro_rules! impl_real_vector {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            data: Vec<f64>,
        }

        impl $name {
            /// Wrap existing data
            #[inline]
            pub fn new(data: Vec<f64>) -> Self {
                Self { data }
            }

            /// All-zero vector of length n
            pub fn zeros(n: usize) -> Self {
                Self { data: vec![0.0; n] }
            }

            /// Number of entries
            #[inline]
            pub fn len(&self) -> usize {
                self.data.len()
            }

            /// True when the vector has no entries
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.data.is_empty()
            }

            /// Borrow the entries
            #[inline]
            pub fn as_slice(&self) -> &[f64] {
                &self.data
            }

            /// Take ownership of the entries
            #[inline]
            pub fn into_vec(self) -> Vec<f64> {
                self.data
            }

            /// Max-norm: largest absolute entry
            pub fn max_norm(&self) -> f64 {
                max_norm(&self.data)
            }

            /// Divide by the max-norm in place
            ///
            /// Returns the norm used. A zero vector is left untouched and
            /// reports a norm of 0.
            pub fn normalize_max(&mut self) -> f64 {
                let norm = self.max_norm();
                if norm > 0.0 {
                    for v in &mut self.data {
                        *v /= norm;
                    }
                }
                norm
            }
        }

        impl From<Vec<f64>> for $name {
            fn from(data: Vec<f64>) -> Self {
                Self { data }
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = f64;

            #[inline]
            fn index(&self, i: usize) -> &f64 {
                &self.data[i]
            }
        }
    };
}

impl_real_vector!(Column, "Owned column vector");
impl_real_vector!(Row, "Owned row vector");

/// Largest absolute entry of a slice
pub fn max_norm(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}
