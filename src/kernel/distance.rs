//! Pairwise Euclidean distances between two sets of row vectors
//!
//! Distances are computed with the expansion
//!
//! ||a - b||² = ||a||² + ||b||² - 2·aᵀb
//!
//! so that the whole (n1, n2) matrix costs one dense matrix product plus
//! two row-norm passes, instead of a loop over every pair of rows.

use crate::core::Matrix;
use ndarray::{ArrayView2, Axis};

/// Squared Euclidean distance between every row of `a` and every row of `b`
///
/// Cancellation in the expansion can leave tiny negative values where the
/// true distance is zero. Those are clamped to exactly `0.0`, so the result
/// is always safe to pass to `sqrt` or `powf`. When `a` and `b` are the same
/// view, the diagonal is set to exactly `0.0`. Non-finite input yields NaN
/// or infinite distances, never a clamped zero.
///
/// Both inputs must have the same number of columns.
pub fn squared_euclidean_distances(a: ArrayView2<f64>, b: ArrayView2<f64>) -> Matrix {
    let a_norms = a.map_axis(Axis(1), |row| row.dot(&row));
    let b_norms = b.map_axis(Axis(1), |row| row.dot(&row));

    let mut dists = a.dot(&b.t());
    dists.mapv_inplace(|v| -2.0 * v);
    dists += &a_norms.insert_axis(Axis(1));
    dists += &b_norms;

    // Rounding only ever pushes zero distances slightly below zero.
    // NaN (from NaN or infinite input) must pass through unchanged.
    dists.mapv_inplace(|v| if v < 0.0 { 0.0 } else { v });

    if same_view(&a, &b) {
        dists
            .diag_mut()
            .mapv_inplace(|v| if v.is_nan() { v } else { 0.0 });
    }

    dists
}

/// Euclidean distance between every row of `a` and every row of `b`
pub fn euclidean_distances(a: ArrayView2<f64>, b: ArrayView2<f64>) -> Matrix {
    let mut dists = squared_euclidean_distances(a, b);
    dists.mapv_inplace(f64::sqrt);
    dists
}

fn same_view(a: &ArrayView2<f64>, b: &ArrayView2<f64>) -> bool {
    a.as_ptr() == b.as_ptr() && a.dim() == b.dim() && a.strides() == b.strides()
}
