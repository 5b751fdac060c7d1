//! Result records returned by the solvers

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three independent solution strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionMethod {
    /// x = A⁻¹ b
    Inverse,
    /// xᵢ = det(Aᵢ) / det(A)
    Cramer,
    /// Reduction of `[A | b]` to reduced row echelon form
    GaussJordan,
}

impl SolutionMethod {
    /// All methods, in display order
    pub const ALL: [SolutionMethod; 3] = [
        SolutionMethod::Inverse,
        SolutionMethod::Cramer,
        SolutionMethod::GaussJordan,
    ];

    /// Human-readable title, also used as the first recorded step
    pub fn title(self) -> &'static str {
        match self {
            SolutionMethod::Inverse => "Matrix Inverse Method",
            SolutionMethod::Cramer => "Cramer's Rule",
            SolutionMethod::GaussJordan => "Gauss-Jordan Elimination",
        }
    }

    /// Stable machine-readable key
    pub fn key(self) -> &'static str {
        match self {
            SolutionMethod::Inverse => "inverse",
            SolutionMethod::Cramer => "cramer",
            SolutionMethod::GaussJordan => "gauss_jordan",
        }
    }

    /// Whether this method computes and reports det(A)
    pub fn reports_determinant(self) -> bool {
        !matches!(self, SolutionMethod::GaussJordan)
    }
}

impl fmt::Display for SolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of one solve call
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionResult {
    /// Method that produced this result
    pub method: SolutionMethod,
    /// Solution vector, `None` if the system has no unique solution under this method
    pub solution: Option<Array1<f64>>,
    /// Steps taken, oldest first
    pub steps: Vec<String>,
    /// det(A) of the original coefficient matrix, for methods that compute it
    pub determinant: Option<f64>,
}

impl SolutionResult {
    /// Whether a solution vector was found
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// The results of all three methods on the same system
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSolutions {
    /// Matrix inverse method
    pub inverse: SolutionResult,
    /// Cramer's rule
    pub cramer: SolutionResult,
    /// Gauss-Jordan elimination
    pub gauss_jordan: SolutionResult,
}

impl SystemSolutions {
    /// Results in display order
    pub fn iter(&self) -> impl Iterator<Item = &SolutionResult> + '_ {
        SolutionMethod::ALL.into_iter().map(move |method| self.get(method))
    }

    /// Result for a given method
    pub fn get(&self, method: SolutionMethod) -> &SolutionResult {
        match method {
            SolutionMethod::Inverse => &self.inverse,
            SolutionMethod::Cramer => &self.cramer,
            SolutionMethod::GaussJordan => &self.gauss_jordan,
        }
    }

    /// Whether every method found a solution
    pub fn all_solved(&self) -> bool {
        self.iter().all(SolutionResult::is_solved)
    }

    /// Largest component-wise difference between any two solved methods.
    ///
    /// Returns `None` when fewer than two methods produced a solution.
    pub fn max_discrepancy(&self) -> Option<f64> {
        let solved: Vec<&Array1<f64>> = self
            .iter()
            .filter_map(|r| r.solution.as_ref())
            .collect();
        if solved.len() < 2 {
            return None;
        }
        let mut max_diff = 0.0_f64;
        for (i, x) in solved.iter().enumerate() {
            for y in &solved[i + 1..] {
                for (a, b) in x.iter().zip(y.iter()) {
                    max_diff = max_diff.max((a - b).abs());
                }
            }
        }
        Some(max_diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn result(method: SolutionMethod, solution: Option<Array1<f64>>) -> SolutionResult {
        SolutionResult {
            method,
            solution,
            steps: vec![method.title().to_string()],
            determinant: None,
        }
    }

    #[test]
    fn test_method_names() {
        assert_eq!(SolutionMethod::Cramer.to_string(), "Cramer's Rule");
        assert_eq!(SolutionMethod::GaussJordan.key(), "gauss_jordan");
        assert!(SolutionMethod::Inverse.reports_determinant());
        assert!(!SolutionMethod::GaussJordan.reports_determinant());
    }

    #[test]
    fn test_iter_follows_display_order() {
        let solutions = SystemSolutions {
            inverse: result(SolutionMethod::Inverse, None),
            cramer: result(SolutionMethod::Cramer, Some(array![1.0])),
            gauss_jordan: result(SolutionMethod::GaussJordan, Some(array![1.0])),
        };
        let methods: Vec<_> = solutions.iter().map(|r| r.method).collect();
        assert_eq!(methods, SolutionMethod::ALL);
        for method in SolutionMethod::ALL {
            assert_eq!(solutions.get(method).method, method);
        }
    }

    #[test]
    fn test_max_discrepancy() {
        let solutions = SystemSolutions {
            inverse: result(SolutionMethod::Inverse, Some(array![1.0, 2.0])),
            cramer: result(SolutionMethod::Cramer, Some(array![1.0, 2.5])),
            gauss_jordan: result(SolutionMethod::GaussJordan, Some(array![0.75, 2.0])),
        };
        assert!(solutions.all_solved());
        assert_relative_eq!(solutions.max_discrepancy().unwrap(), 0.5);
        assert_eq!(
            solutions.get(SolutionMethod::Cramer).method,
            SolutionMethod::Cramer
        );
    }

    #[test]
    fn test_max_discrepancy_needs_two_solutions() {
        let solutions = SystemSolutions {
            inverse: result(SolutionMethod::Inverse, None),
            cramer: result(SolutionMethod::Cramer, None),
            gauss_jordan: result(SolutionMethod::GaussJordan, Some(array![1.0])),
        };
        assert!(!solutions.all_solved());
        assert!(solutions.max_discrepancy().is_none());
    }
}
