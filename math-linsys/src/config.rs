//! JSON system files
//!
//! ```json
//! {
//!   "matrix": [[2, 1], [1, 1]],
//!   "constants": [3, 2],
//!   "inversion_pivoting": "partial",
//!   "parallel": false
//! }
//! ```
//!
//! Only `matrix` and `constants` are required.

use crate::direct::Pivoting;
use crate::error::Result;
use crate::system::{LinearSystem, SolveOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A linear system and its solve options as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Coefficient rows
    pub matrix: Vec<Vec<f64>>,
    /// Right-hand side, one value per row
    pub constants: Vec<f64>,
    /// Pivoting policy of the inversion engine
    #[serde(default)]
    pub inversion_pivoting: Pivoting,
    /// Run the methods concurrently
    #[serde(default)]
    pub parallel: bool,
}

impl SystemConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::debug!(
            "loaded {}x{} system from {}",
            config.matrix.len(),
            config.matrix.len(),
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Parse a configuration from a JSON string
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Capture an existing system with default options
    pub fn from_system(system: &LinearSystem) -> Self {
        Self {
            matrix: system
                .matrix()
                .rows()
                .into_iter()
                .map(|row| row.to_vec())
                .collect(),
            constants: system.constants().to_vec(),
            inversion_pivoting: Pivoting::default(),
            parallel: false,
        }
    }

    /// Validate the stored matrix and constants
    pub fn to_system(&self) -> Result<LinearSystem> {
        LinearSystem::from_rows(&self.matrix, &self.constants)
    }

    /// Solve options described by this configuration
    pub fn options(&self) -> SolveOptions {
        SolveOptions {
            inversion_pivoting: self.inversion_pivoting,
            parallel: self.parallel,
        }
    }
}
