//! Small dense linear system solvers with step-by-step traces
//!
//! This crate solves square systems `Ax = b` (typically 2×2 up to about 10×10)
//! with three independent methods and reports, for each one, either a solution
//! or a definitive "no unique solution" outcome together with a human-readable
//! log of the steps taken.
//!
//! # Features
//!
//! - **Determinant**: Gaussian elimination with partial pivoting
//! - **Inverse**: Gauss-Jordan on `[M | I]`, with selectable pivoting
//! - **Methods**: matrix inverse, Cramer's rule, Gauss-Jordan elimination
//! - **Parallelism**: Cramer columns and whole methods on rayon (`native` feature)
//! - **I/O**: JSON system files, text and JSON reports
//!
//! All arithmetic is `f64`; values below [`ZERO_TOLERANCE`] are treated as zero.
//!
//! # Example
//!
//! ```
//! use math_audio_linsys::{LinearSystem, report};
//!
//! let system = LinearSystem::parse("2,1;1,1", "3,2")?;
//! let solutions = system.solve_all();
//!
//! let x = solutions.gauss_jordan.solution.as_ref().unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! println!("{}", report::render_solutions(&solutions));
//! # Ok::<(), math_audio_linsys::LinsysError>(())
//! ```

pub mod config;
pub mod dense;
pub mod direct;
pub mod error;
pub mod methods;
pub mod parallel;
pub mod report;
pub mod solution;
pub mod steps;
pub mod system;
pub mod traits;

// Re-export main types
pub use config::SystemConfig;
pub use dense::{ZERO_TOLERANCE, format_matrix};
pub use error::{LinsysError, Result};
pub use solution::{SolutionMethod, SolutionResult, SystemSolutions};
pub use steps::StepRecorder;
pub use system::{LinearSystem, SolveOptions, solve_all, solve_all_with};
pub use traits::LinearSystemSolver;

// Re-export engines and solvers
pub use direct::{Pivoting, determinant, invert, invert_with};
pub use methods::{
    CramerSolver, GaussJordanSolver, InverseSolver, solve_by_cramer, solve_by_gauss_jordan,
    solve_by_inverse,
};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
