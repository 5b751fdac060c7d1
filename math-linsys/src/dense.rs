//! Dense matrix helpers shared by the engines and the solvers
//!
//! All routines operate on `ndarray` containers of `f64` that are allocated at
//! their final size up front; nothing here grows or shrinks a matrix.

use ndarray::{Array1, Array2, s};

/// Magnitude below which a value is treated as exactly zero for singularity
/// and pivot decisions.
pub const ZERO_TOLERANCE: f64 = 1e-10;

/// Check whether a value is numerically zero
#[inline]
pub fn is_negligible(value: f64) -> bool {
    value.abs() < ZERO_TOLERANCE
}

/// Row in `[start, nrows)` holding the largest magnitude in `col`.
///
/// Ties keep the earliest row, so an already-maximal pivot never moves.
#[inline]
pub fn pivot_row(m: &Array2<f64>, start: usize, col: usize) -> usize {
    let mut max_row = start;
    let mut max_val = m[[start, col]].abs();
    for k in (start + 1)..m.nrows() {
        let val = m[[k, col]].abs();
        if val > max_val {
            max_val = val;
            max_row = k;
        }
    }
    max_row
}

/// Swap two full rows in place
#[inline]
pub fn swap_rows(m: &mut Array2<f64>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for j in 0..m.ncols() {
        m.swap([a, j], [b, j]);
    }
}

/// Build the `n × (n+1)` augmented matrix `[A | b]`
pub fn augment_with_constants(a: &Array2<f64>, b: &Array1<f64>) -> Array2<f64> {
    let n = a.nrows();
    let mut aug = Array2::zeros((n, n + 1));
    aug.slice_mut(s![.., ..n]).assign(a);
    aug.slice_mut(s![.., n]).assign(b);
    aug
}

/// Build the `n × 2n` augmented matrix `[A | I]`
pub fn augment_with_identity(a: &Array2<f64>) -> Array2<f64> {
    let n = a.nrows();
    let mut aug = Array2::zeros((n, 2 * n));
    aug.slice_mut(s![.., ..n]).assign(a);
    for i in 0..n {
        aug[[i, n + i]] = 1.0;
    }
    aug
}

/// Copy of `a` with column `col` replaced by `b`
pub fn replace_column(a: &Array2<f64>, col: usize, b: &Array1<f64>) -> Array2<f64> {
    let mut replaced = a.to_owned();
    replaced.column_mut(col).assign(b);
    replaced
}

/// Matrix-vector product `y = M x`
#[inline]
pub fn matvec(m: &Array2<f64>, x: &Array1<f64>) -> Array1<f64> {
    m.dot(x)
}

/// Render a matrix as one bracketed line per row.
///
/// Every value is right-aligned to 8 characters with 3 decimals, e.g.
/// `[    2.000    1.000    3.000 ]`.
pub fn format_matrix(m: &Array2<f64>) -> String {
    m.rows()
        .into_iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| format!("{:>8.3}", clean_zero(v)))
                .collect();
            format!("[ {} ]", cells.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fixed-point rendering used in step logs and reports
#[inline]
pub fn format_fixed(v: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, clean_zero(v))
}

/// Fold `-0.0` into `0.0` so it never renders with a sign
#[inline]
fn clean_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
