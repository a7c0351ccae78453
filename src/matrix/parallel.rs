//! Per-call fan-out helpers
//!
//! Every helper here hands each task a disjoint output location, so the
//! result does not depend on scheduling. With the `rayon` feature disabled,
//! or for outputs below [`PARALLEL_THRESHOLD`], the same closures run on the
//! calling thread.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Parallelization threshold: skip Rayon for small outputs (overhead > benefit)
pub(crate) const PARALLEL_THRESHOLD: usize = 64;

/// Compute `out[i] = cell(i)` for every index
pub(crate) fn fill_cells<T, F>(out: &mut [T], cell: F)
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    #[cfg(feature = "rayon")]
    if out.len() >= PARALLEL_THRESHOLD {
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, o)| *o = cell(i));
        return;
    }

    for (i, o) in out.iter_mut().enumerate() {
        *o = cell(i);
    }
}

/// Collect `cell(i)` for `i in 0..len`
pub(crate) fn map_cells<T, F>(len: usize, cell: F) -> Vec<T>
where
    T: Send + Default + Clone,
    F: Fn(usize) -> T + Sync + Send,
{
    let mut out = vec![T::default(); len];
    fill_cells(&mut out, cell);
    out
}

/// Apply `update(i, row_i)` to rows `0..rows` of a row-major n-wide buffer
pub(crate) fn for_each_row<F>(data: &mut [f64], n: usize, rows: usize, update: F)
where
    F: Fn(usize, &mut [f64]) + Sync + Send,
{
    if n == 0 {
        return;
    }
    let head = &mut data[..rows * n];

    #[cfg(feature = "rayon")]
    if rows * n >= PARALLEL_THRESHOLD {
        head.par_chunks_mut(n)
            .enumerate()
            .for_each(|(i, row)| update(i, row));
        return;
    }

    for (i, row) in head.chunks_mut(n).enumerate() {
        update(i, row);
    }
}
