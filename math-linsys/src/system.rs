//! Validated square systems and the entry points that run every method
//!
//! The solvers trust their inputs; [`LinearSystem`] is where shapes and values
//! are checked before anything is solved.

use crate::direct::Pivoting;
use crate::error::{LinsysError, Result};
use crate::methods::{CramerSolver, GaussJordanSolver, InverseSolver};
use crate::parallel::join;
use crate::solution::SystemSolutions;
use crate::traits::LinearSystemSolver;
use ndarray::{Array1, Array2};

/// Options shared by a run of all three methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Pivoting policy of the inversion engine
    pub inversion_pivoting: Pivoting,
    /// Run the methods, and Cramer's column determinants, concurrently
    pub parallel: bool,
}

/// Run all three methods on `Ax = b` with default options
pub fn solve_all(a: &Array2<f64>, b: &Array1<f64>) -> SystemSolutions {
    solve_all_with(a, b, &SolveOptions::default())
}

/// Run all three methods on `Ax = b`.
///
/// A failure in one method never affects the others.
pub fn solve_all_with(
    a: &Array2<f64>,
    b: &Array1<f64>,
    options: &SolveOptions,
) -> SystemSolutions {
    let inverse = InverseSolver::new(options.inversion_pivoting);
    let cramer = CramerSolver {
        parallel: options.parallel,
    };
    let gauss_jordan = GaussJordanSolver;

    let (inverse, (cramer, gauss_jordan)) = if options.parallel {
        join(
            || inverse.solve(a, b),
            || join(|| cramer.solve(a, b), || gauss_jordan.solve(a, b)),
        )
    } else {
        (
            inverse.solve(a, b),
            (cramer.solve(a, b), gauss_jordan.solve(a, b)),
        )
    };

    let solutions = SystemSolutions {
        inverse,
        cramer,
        gauss_jordan,
    };
    log::info!(
        "solved {}x{} system: inverse={}, cramer={}, gauss-jordan={}",
        a.nrows(),
        a.ncols(),
        solutions.inverse.is_solved(),
        solutions.cramer.is_solved(),
        solutions.gauss_jordan.is_solved()
    );
    solutions
}

/// A square system `Ax = b` with consistent dimensions and finite coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: Array2<f64>,
    constants: Array1<f64>,
}

impl LinearSystem {
    /// Validate and wrap a coefficient matrix and constants vector
    pub fn new(matrix: Array2<f64>, constants: Array1<f64>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows == 0 {
            return Err(LinsysError::EmptySystem);
        }
        if rows != cols {
            return Err(LinsysError::NotSquare { rows, cols });
        }
        if constants.len() != rows {
            return Err(LinsysError::DimensionMismatch {
                expected: rows,
                got: constants.len(),
            });
        }
        if let Some(((row, col), _)) = matrix.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(LinsysError::NonFinite { row, col });
        }
        if let Some(row) = constants.iter().position(|v| !v.is_finite()) {
            return Err(LinsysError::NonFinite { row, col: rows });
        }
        Ok(Self { matrix, constants })
    }

    /// Build a system from coefficient rows and constants
    pub fn from_rows(rows: &[Vec<f64>], constants: &[f64]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(LinsysError::EmptySystem);
        }
        let mut matrix = Array2::zeros((n, n));
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(LinsysError::RaggedRow {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
            for (j, &v) in row.iter().enumerate() {
                matrix[[i, j]] = v;
            }
        }
        Self::new(matrix, Array1::from_vec(constants.to_vec()))
    }

    /// Parse a system written inline, rows separated by `;` and values by `,`.
    ///
    /// `parse("2,1;1,1", "3,2")` is the system 2x + y = 3, x + y = 2.
    pub fn parse(matrix: &str, constants: &str) -> Result<Self> {
        let rows = matrix
            .split(';')
            .map(parse_values)
            .collect::<Result<Vec<_>>>()?;
        let constants = parse_values(constants)?;
        Self::from_rows(&rows, &constants)
    }

    /// An all-zero system of size `n`
    pub fn zeros(n: usize) -> Result<Self> {
        Self::new(Array2::zeros((n, n)), Array1::zeros(n))
    }

    /// Built-in example systems, available for sizes 2 and 3
    pub fn example(n: usize) -> Option<Self> {
        let (rows, constants): (Vec<Vec<f64>>, Vec<f64>) = match n {
            2 => (vec![vec![2.0, 1.0], vec![1.0, 1.0]], vec![3.0, 2.0]),
            3 => (
                vec![
                    vec![2.0, 1.0, -1.0],
                    vec![-3.0, -1.0, 2.0],
                    vec![-2.0, 1.0, 2.0],
                ],
                vec![8.0, -11.0, -3.0],
            ),
            _ => return None,
        };
        Self::from_rows(&rows, &constants).ok()
    }

    /// Number of equations (and unknowns)
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// Coefficient matrix A
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// Constants vector b
    pub fn constants(&self) -> &Array1<f64> {
        &self.constants
    }

    /// Run all three methods sequentially
    pub fn solve_all(&self) -> SystemSolutions {
        solve_all(&self.matrix, &self.constants)
    }

    /// Run all three methods concurrently
    pub fn solve_all_parallel(&self) -> SystemSolutions {
        self.solve_with(&SolveOptions {
            parallel: true,
            ..SolveOptions::default()
        })
    }

    /// Run all three methods with explicit options
    pub fn solve_with(&self, options: &SolveOptions) -> SystemSolutions {
        solve_all_with(&self.matrix, &self.constants, options)
    }
}

fn parse_values(input: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<f64>().map_err(|e| LinsysError::Parse {
                input: token.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
