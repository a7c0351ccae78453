//! Rotation sweeps and block structure of the quasi-triangular form

use super::givens::Givens;
use crate::dtype::Complex;
use crate::matrix::Matrix;

/// Diagonal block of a quasi-triangular matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// 1×1 block at the given index: a real eigenvalue
    Single(usize),
    /// 2×2 block starting at the given index
    Pair(usize),
}

/// One unshifted QR step made of adjacent-row rotations
///
/// Every subdiagonal entry above `threshold` gets a left rotation. All left
/// rotations are applied before any right rotation; the right rotations go
/// to both `a` and `transform`.
pub fn sweep(a: &mut Matrix, transform: &mut Matrix, threshold: f64) {
    let n = a.dim();
    let mut pending = Vec::with_capacity(n.saturating_sub(1));

    for i in 1..n {
        let j = i - 1;
        let below = a.get(i, j);
        if below.abs() < threshold {
            continue;
        }
        let Some(g) = Givens::from_pair(a.get(j, j), -below) else {
            continue;
        };
        g.rotate_rows(a, j, i);
        pending.push((j, i, g));
    }

    for (j, i, g) in pending {
        g.rotate_columns(a, j, i);
        g.rotate_columns(transform, j, i);
    }
}

/// Split the diagonal into converged blocks, or `None` if not converged
///
/// A 2×2 block counts only if its eigenvalues are complex and the next
/// subdiagonal entry is negligible.
pub fn converged_blocks(a: &Matrix, threshold: f64) -> Option<Vec<Block>> {
    let n = a.dim();
    let mut blocks = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        if i + 1 == n || a.get(i + 1, i).abs() <= threshold {
            blocks.push(Block::Single(i));
            i += 1;
            continue;
        }
        if i + 2 < n && a.get(i + 2, i + 1).abs() > threshold {
            return None;
        }
        let (trace, det) = trace_det(a, i);
        if trace * trace - 4.0 * det >= 0.0 {
            return None;
        }
        blocks.push(Block::Pair(i));
        i += 2;
    }
    Some(blocks)
}

/// Best-effort block split used when the iteration stopped early
///
/// Every non-negligible subdiagonal entry starts a 2×2 block.
pub fn current_blocks(a: &Matrix, threshold: f64) -> Vec<Block> {
    let n = a.dim();
    let mut blocks = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        if i + 1 == n || a.get(i + 1, i).abs() <= threshold {
            blocks.push(Block::Single(i));
            i += 1;
        } else {
            blocks.push(Block::Pair(i));
            i += 2;
        }
    }
    blocks
}

fn trace_det(a: &Matrix, i: usize) -> (f64, f64) {
    let (p, q) = (a.get(i, i), a.get(i, i + 1));
    let (r, s) = (a.get(i + 1, i), a.get(i + 1, i + 1));
    (p + s, p * s - q * r)
}

/// Eigenvalues of a 2×2 block: (trace ± √(trace² − 4·det)) / 2
pub fn pair_eigenvalues(a: &Matrix, i: usize) -> [Complex; 2] {
    let (trace, det) = trace_det(a, i);
    let root = Complex::real(trace * trace - 4.0 * det).sqrt();
    let half = Complex::real(trace);
    [(half + root) / 2.0, (half - root) / 2.0]
}

/// Solve (T − λI)·y = 0 for the real eigenvalue at `index`
///
/// `y[index] = 1`, entries below are zero, and the rows above are solved
/// bottom-up. A 2×2 block above `index` is solved as a 2×2 system. The
/// result is normalized to unit Euclidean length.
pub fn back_substitute(t: &Matrix, blocks: &[Block], index: usize) -> Vec<f64> {
    let n = t.dim();
    let lambda = t.get(index, index);
    let eps = f64::EPSILON * frobenius_norm(t).max(f64::MIN_POSITIVE);

    let mut y = vec![0.0; n];
    y[index] = 1.0;

    // Σ_{j=from..=index} T[row][j]·y[j]
    let tail = |y: &[f64], row: usize, from: usize| -> f64 {
        (from..=index).map(|j| t.get(row, j) * y[j]).sum()
    };

    for block in blocks.iter().rev() {
        match *block {
            Block::Single(k) if k < index => {
                let mut diag = t.get(k, k) - lambda;
                if diag.abs() < eps {
                    // repeated eigenvalue
                    diag = eps;
                }
                y[k] = -tail(&y, k, k + 1) / diag;
            }
            Block::Pair(k) if k + 1 < index => {
                let a11 = t.get(k, k) - lambda;
                let a12 = t.get(k, k + 1);
                let a21 = t.get(k + 1, k);
                let a22 = t.get(k + 1, k + 1) - lambda;
                let b1 = -tail(&y, k, k + 2);
                let b2 = -tail(&y, k + 1, k + 2);

                // Complex block eigenvalues keep this away from zero
                let mut det = a11 * a22 - a12 * a21;
                if det.abs() < eps {
                    det = eps;
                }
                y[k] = (b1 * a22 - a12 * b2) / det;
                y[k + 1] = (a11 * b2 - a21 * b1) / det;
            }
            _ => {}
        }
    }

    let norm = y.iter().map(|v| v * v).sum::<f64>().sqrt();
    for v in &mut y {
        *v /= norm;
    }
    y
}

fn frobenius_norm(t: &Matrix) -> f64 {
    t.as_slice().iter().map(|v| v * v).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(t: &Matrix, lambda: f64, y: &[f64]) -> f64 {
        (0..t.dim())
            .map(|i| {
                let ty: f64 = t.row(i).iter().zip(y).map(|(a, b)| a * b).sum();
                (ty - lambda * y[i]).abs()
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_converged_blocks() {
        let t = Matrix::from_rows(&[
            vec![1.0, -2.0, 3.0],
            vec![2.0, 1.0, 1.0],
            vec![0.0, 0.0, 5.0],
        ])
        .unwrap();
        assert_eq!(
            converged_blocks(&t, 1e-10),
            Some(vec![Block::Pair(0), Block::Single(2)])
        );
    }

    #[test]
    fn test_real_pair_is_not_converged() {
        // [[1, 2], [3, 4]] has two real eigenvalues
        let t = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(converged_blocks(&t, 1e-10), None);
        assert_eq!(current_blocks(&t, 1e-10), vec![Block::Pair(0)]);
    }

    #[test]
    fn test_adjacent_blocks_are_not_converged() {
        let t = Matrix::from_rows(&[
            vec![0.0, -1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
        ])
        .unwrap();
        assert_eq!(converged_blocks(&t, 1e-10), None);
    }

    #[test]
    fn test_pair_eigenvalues() {
        let t = Matrix::from_rows(&[vec![1.0, -2.0], vec![2.0, 1.0]]).unwrap();
        let [a, b] = pair_eigenvalues(&t, 0);
        assert_eq!(a, Complex::new(1.0, 2.0));
        assert_eq!(b, Complex::new(1.0, -2.0));
    }

    #[test]
    fn test_back_substitute_below_pair() {
        let t = Matrix::from_rows(&[
            vec![1.0, -2.0, 3.0],
            vec![2.0, 1.0, 1.0],
            vec![0.0, 0.0, 5.0],
        ])
        .unwrap();
        let blocks = [Block::Pair(0), Block::Single(2)];
        let y = back_substitute(&t, &blocks, 2);
        assert!(residual(&t, 5.0, &y) < 1e-12);
        let norm: f64 = y.iter().map(|v| v * v).sum();
        assert!((norm - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_back_substitute_triangular() {
        let t = Matrix::from_rows(&[
            vec![2.0, 1.0, 4.0],
            vec![0.0, 3.0, 1.0],
            vec![0.0, 0.0, 7.0],
        ])
        .unwrap();
        let blocks = [Block::Single(0), Block::Single(1), Block::Single(2)];
        for (index, lambda) in [(0, 2.0), (1, 3.0), (2, 7.0)] {
            let y = back_substitute(&t, &blocks, index);
            assert!(residual(&t, lambda, &y) < 1e-12, "λ = {lambda}");
        }
    }

    #[test]
    fn test_sweep_keeps_similarity() {
        let original = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut a = original.clone();
        let mut z = Matrix::identity(2);
        for _ in 0..5 {
            sweep(&mut a, &mut z, 1e-10);
        }
        let mut zt = z.clone();
        zt.transpose_in_place();
        let back = zt.matmul(&original).unwrap().matmul(&z).unwrap();
        assert!(back.max_abs_diff(&a).unwrap() < 1e-12);
        // trace is invariant
        assert!((a.get(0, 0) + a.get(1, 1) - 5.0).abs() < 1e-12);
    }
}
