//! Matrix inversion by Gauss-Jordan elimination on `[M | I]`

use crate::dense::{augment_with_identity, is_negligible, pivot_row, swap_rows};
use ndarray::{Array2, s};
use serde::{Deserialize, Serialize};

/// Pivot selection policy for the inversion engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pivoting {
    /// Use the diagonal entry in place.
    ///
    /// Fails on matrices such as `[[0, 1], [1, 0]]` whose determinant is
    /// nonzero but which meet a zero on the diagonal during elimination.
    None,
    /// Swap in the row with the largest magnitude in the pivot column
    #[default]
    Partial,
}

/// Compute M⁻¹ with partial pivoting.
///
/// Returns `None` when a pivot falls below the zero tolerance, i.e. the matrix
/// is singular.
pub fn invert(m: &Array2<f64>) -> Option<Array2<f64>> {
    invert_with(m, Pivoting::Partial)
}

/// Compute M⁻¹ with an explicit pivoting policy.
///
/// The `n × 2n` matrix `[M | I]` is reduced until its left half is the
/// identity; the right half is then the inverse. The input is never modified.
pub fn invert_with(m: &Array2<f64>, pivoting: Pivoting) -> Option<Array2<f64>> {
    let n = m.nrows();
    debug_assert_eq!(n, m.ncols(), "inverse requires a square matrix");

    let mut aug = augment_with_identity(m);
    let width = 2 * n;

    for i in 0..n {
        if pivoting == Pivoting::Partial {
            let max_row = pivot_row(&aug, i, i);
            swap_rows(&mut aug, i, max_row);
        }

        let pivot = aug[[i, i]];
        if is_negligible(pivot) {
            log::debug!(
                "inversion failed: pivot {:.3e} at column {} ({:?} pivoting)",
                pivot,
                i,
                pivoting
            );
            return None;
        }

        let inv_pivot = 1.0 / pivot;
        for j in 0..width {
            aug[[i, j]] *= inv_pivot;
        }

        for k in 0..n {
            if k == i {
                continue;
            }
            let factor = aug[[k, i]];
            for j in 0..width {
                let update = factor * aug[[i, j]];
                aug[[k, j]] -= update;
            }
        }
    }

    Some(aug.slice(s![.., n..]).to_owned())
}
