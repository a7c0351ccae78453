//! Plane rotations and Hessenberg reduction

use crate::matrix::Matrix;
use crate::matrix::parallel::for_each_row;
use log::trace;

/// Rotation in the (p, q) plane
///
/// Acting on rows it maps `(r_p, r_q)` to `(c·r_p − s·r_q, s·r_p + c·r_q)`.
/// The same coefficients act on columns through [`Givens::rotate_columns`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Givens {
    /// Cosine
    pub cos: f64,
    /// Sine
    pub sin: f64,
}

impl Givens {
    /// Rotation with `cos = x / r`, `sin = y / r` where `r = hypot(x, y)`
    ///
    /// Returns `None` when both entries are zero.
    #[inline]
    pub fn from_pair(x: f64, y: f64) -> Option<Self> {
        let r = x.hypot(y);
        if r == 0.0 {
            return None;
        }
        Some(Self {
            cos: x / r,
            sin: y / r,
        })
    }

    /// The transposed rotation
    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            cos: self.cos,
            sin: -self.sin,
        }
    }

    /// Apply to rows p and q (left multiplication)
    pub fn rotate_rows(self, m: &mut Matrix, p: usize, q: usize) {
        debug_assert!(p < q);
        let n = m.dim();
        let (head, tail) = m.as_mut_slice().split_at_mut(q * n);
        let rp = &mut head[p * n..(p + 1) * n];
        let rq = &mut tail[..n];
        for (a, b) in rp.iter_mut().zip(rq.iter_mut()) {
            let (x, y) = (*a, *b);
            *a = self.cos * x - self.sin * y;
            *b = self.sin * x + self.cos * y;
        }
    }

    /// Apply to columns p and q (right multiplication)
    ///
    /// Every row owns its two affected entries, so rows are updated in
    /// parallel.
    pub fn rotate_columns(self, m: &mut Matrix, p: usize, q: usize) {
        let n = m.dim();
        for_each_row(m.as_mut_slice(), n, n, |_, row| {
            let (x, y) = (row[p], row[q]);
            row[p] = self.cos * x - self.sin * y;
            row[q] = self.sin * x + self.cos * y;
        });
    }
}

/// Reduce `a` to upper Hessenberg form in place
///
/// Entry (i, j) with `i > j + 1` is zeroed against (j+1, j). Each rotation is
/// applied from both sides of `a` and accumulated into `transform` from the
/// right, preserving `transformᵀ·A·transform = a`.
pub fn hessenberg(a: &mut Matrix, transform: &mut Matrix) {
    let n = a.dim();
    for j in 0..n.saturating_sub(2) {
        for i in j + 2..n {
            let target = a.get(i, j);
            if target == 0.0 {
                continue;
            }
            let Some(g) = Givens::from_pair(a.get(j + 1, j), target) else {
                continue;
            };
            // G·A·Gᵀ with G mapping (x, y) to (r, 0)
            let left = g.transpose();
            left.rotate_rows(a, j + 1, i);
            left.rotate_columns(a, j + 1, i);
            left.rotate_columns(transform, j + 1, i);
            trace!("hessenberg: zeroed ({i}, {j})");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pair() {
        let g = Givens::from_pair(3.0, 4.0).unwrap();
        assert_eq!(g, Givens { cos: 0.6, sin: 0.8 });
        assert!(Givens::from_pair(0.0, 0.0).is_none());
    }

    #[test]
    fn test_rotate_rows_zeroes_entry() {
        let mut m = Matrix::from_rows(&[vec![3.0, 1.0], vec![4.0, 2.0]]).unwrap();
        let g = Givens::from_pair(3.0, 4.0).unwrap().transpose();
        g.rotate_rows(&mut m, 0, 1);
        assert!((m.get(0, 0) - 5.0).abs() < 1e-15);
        assert!(m.get(1, 0).abs() < 1e-15);
    }

    #[test]
    fn test_rotate_columns_is_orthogonal() {
        let mut m = Matrix::identity(3);
        let g = Givens::from_pair(1.0, 1.0).unwrap();
        g.rotate_columns(&mut m, 0, 2);
        g.transpose().rotate_columns(&mut m, 0, 2);
        assert!(m.max_abs_diff(&Matrix::identity(3)).unwrap() < 1e-15);
    }

    #[test]
    fn test_hessenberg_form_and_similarity() {
        let original = Matrix::from_rows(&[
            vec![4.0, 1.0, 2.0, 3.0],
            vec![2.0, 3.0, 1.0, 0.0],
            vec![1.0, 5.0, 2.0, 1.0],
            vec![3.0, 1.0, 1.0, 6.0],
        ])
        .unwrap();
        let mut a = original.clone();
        let mut z = Matrix::identity(4);
        hessenberg(&mut a, &mut z);

        for i in 2..4 {
            for j in 0..i - 1 {
                assert!(a.get(i, j).abs() < 1e-12, "({i}, {j}) = {}", a.get(i, j));
            }
        }

        let mut zt = z.clone();
        zt.transpose_in_place();
        let back = zt.matmul(&original).unwrap().matmul(&z).unwrap();
        assert!(back.max_abs_diff(&a).unwrap() < 1e-12);
    }
}
