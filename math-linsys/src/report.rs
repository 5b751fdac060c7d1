//! Text and JSON presentation of solver results

use crate::dense::format_fixed;
use crate::solution::{SolutionResult, SystemSolutions};
use std::fmt;

/// Render one method's result as a text block.
///
/// A solved result lists the determinant (when the method computes one), the
/// solution components and the numbered steps. An unsolved result states that
/// the method could not solve the system, followed by the steps explaining why.
pub fn render_result(result: &SolutionResult) -> String {
    result.to_string()
}

impl fmt::Display for SolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_result(f, self)
    }
}

fn write_result(out: &mut impl fmt::Write, result: &SolutionResult) -> fmt::Result {
    let title = result.method.title();

    match &result.solution {
        Some(x) => {
            writeln!(out, "{} [solved]", title)?;
            if let Some(det) = result.determinant {
                writeln!(out, "Determinant: {}", format_fixed(det, 4))?;
            }
            writeln!(out, "Solution:")?;
            for (i, xi) in x.iter().enumerate() {
                writeln!(out, "  x{} = {}", i + 1, format_fixed(*xi, 4))?;
            }
        }
        None => {
            writeln!(out, "{} [unsolved]", title)?;
            writeln!(out, "Could not solve the system with this method.")?;
        }
    }

    if !result.steps.is_empty() {
        writeln!(out, "Steps:")?;
        for (i, step) in result.steps.iter().enumerate() {
            let mut lines = step.lines();
            if let Some(first) = lines.next() {
                writeln!(out, "{:>3}. {}", i + 1, first)?;
            }
            for line in lines {
                writeln!(out, "     {}", line)?;
            }
        }
    }
    Ok(())
}

/// Render all three results, separated by blank lines
pub fn render_solutions(solutions: &SystemSolutions) -> String {
    solutions
        .iter()
        .map(render_result)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Machine-readable view of one result
pub fn result_to_json(result: &SolutionResult) -> serde_json::Value {
    serde_json::json!({
        "method": result.method.key(),
        "title": result.method.title(),
        "solved": result.is_solved(),
        "determinant": result.determinant,
        "solution": result.solution.as_ref().map(|x| x.to_vec()),
        "steps": result.steps,
    })
}

/// Machine-readable view of all three results
pub fn solutions_to_json(solutions: &SystemSolutions) -> serde_json::Value {
    serde_json::json!({
        "all_solved": solutions.all_solved(),
        "max_discrepancy": solutions.max_discrepancy(),
        "results": solutions.iter().map(result_to_json).collect::<Vec<_>>(),
    })
}
