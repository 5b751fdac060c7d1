//! Determinant by Gaussian elimination with partial pivoting

use crate::dense::{is_negligible, pivot_row, swap_rows};
use ndarray::Array2;

/// Compute det(M) for a square matrix.
///
/// Sizes 1 and 2 use the closed forms; larger matrices are reduced to upper
/// triangular form on a private copy, swapping in the largest remaining entry of
/// each column as pivot. A pivot below [`ZERO_TOLERANCE`](crate::ZERO_TOLERANCE)
/// means the matrix is singular and `0.0` is returned.
///
/// The input is never modified.
pub fn determinant(m: &Array2<f64>) -> f64 {
    let n = m.nrows();
    debug_assert_eq!(n, m.ncols(), "determinant requires a square matrix");

    match n {
        0 => 1.0,
        1 => m[[0, 0]],
        2 => m[[0, 0]] * m[[1, 1]] - m[[0, 1]] * m[[1, 0]],
        _ => eliminate(m.to_owned()),
    }
}

fn eliminate(mut work: Array2<f64>) -> f64 {
    let n = work.nrows();
    let mut det = 1.0;

    for i in 0..n {
        let max_row = pivot_row(&work, i, i);
        if max_row != i {
            swap_rows(&mut work, i, max_row);
            det = -det;
        }

        let pivot = work[[i, i]];
        if is_negligible(pivot) {
            return 0.0;
        }
        det *= pivot;

        for k in (i + 1)..n {
            let factor = work[[k, i]] / pivot;
            for j in i..n {
                let update = factor * work[[i, j]];
                work[[k, j]] -= update;
            }
        }
    }

    det
}
