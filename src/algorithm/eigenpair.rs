//! Eigenvalue/eigenvector pair shared by the solvers

use crate::dtype::{Complex, as_interleaved, complexify};

/// An eigenvalue together with one eigenvector
///
/// Real eigenpairs are stored with zero imaginary parts.
#[derive(Clone, Debug, PartialEq)]
pub struct Eigenpair {
    /// Eigenvalue λ
    pub value: Complex,
    /// Eigenvector v with A·v ≈ λ·v
    pub vector: Vec<Complex>,
}

impl Eigenpair {
    /// Pair a complex eigenvalue with a complex eigenvector
    pub fn new(value: Complex, vector: Vec<Complex>) -> Self {
        Self { value, vector }
    }

    /// Pair a real eigenvalue with a real eigenvector
    pub fn real(value: f64, vector: &[f64]) -> Self {
        Self {
            value: Complex::real(value),
            vector: complexify(vector),
        }
    }

    /// Eigenvector as interleaved `[re₀, im₀, re₁, im₁, …]` without copying
    #[inline]
    pub fn vector_interleaved(&self) -> &[f64] {
        as_interleaved(&self.vector)
    }

    /// Largest entry magnitude of the eigenvector
    pub fn vector_max_norm(&self) -> f64 {
        self.vector
            .iter()
            .fold(0.0, |acc: f64, z| acc.max(z.magnitude()))
    }

    /// Scale the eigenvector so its largest entry magnitude is 1
    ///
    /// Returns `false` (leaving the vector untouched) when every entry is at or
    /// below `zero_threshold`.
    pub fn normalize(&mut self, zero_threshold: f64) -> bool {
        let norm = self.vector_max_norm();
        if norm <= zero_threshold {
            return false;
        }
        for z in &mut self.vector {
            *z = *z / norm;
        }
        true
    }
}
