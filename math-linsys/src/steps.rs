//! Ordered, append-only log of human-readable solver steps

use crate::dense::format_matrix;
use ndarray::Array2;

/// Records the progress of one solve call as a list of strings.
///
/// Steps can only be appended; their order is the chronological order of the
/// algorithm. Every step is also forwarded to the `log` facade at trace level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepRecorder {
    steps: Vec<String>,
}

impl StepRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one step
    pub fn record(&mut self, step: impl Into<String>) {
        let step = step.into();
        log::trace!("{}", step);
        self.steps.push(step);
    }

    /// Append a snapshot of a matrix, one bracketed line per row
    pub fn record_matrix(&mut self, m: &Array2<f64>) {
        self.record(format_matrix(m));
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Recorded steps, oldest first
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Consume the recorder and return the steps
    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}
