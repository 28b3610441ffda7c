//! # Error Types
//!
//! Structured error types for beam_core. Every failure carries enough
//! context to identify the offending input and fix it programmatically,
//! rather than surfacing as a bare string or a silent NaN.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_length(length: f64) -> BeamResult<()> {
//!     if length <= 0.0 {
//!         return Err(BeamError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam analysis operations.
///
/// Geometry and load validation problems are reported as [`BeamError::InvalidInput`]
/// before any array work begins; a numerical failure mid-pipeline (which valid
/// inputs cannot produce) is reported as [`BeamError::CalculationFailed`].
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (out of range, non-finite, inconsistent)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A pipeline stage produced an unusable result
    #[error("Calculation failed in {stage}: {reason}")]
    CalculationFailed { stage: String, reason: String },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::CalculationFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}
