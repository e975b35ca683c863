//! # Error Types
//!
//! Structured error types for composite_core. Every variant carries enough
//! context (which field, which stage, which quantity) for a front end to show
//! a precise message without re-deriving anything.
//!
//! ## Example
//!
//! ```rust
//! use composite_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_ft: f64) -> CalcResult<()> {
//!     if span_ft <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_ft",
//!             span_ft.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for composite_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A text field could not be parsed as a number
    #[error("Invalid number for '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },

    /// An input value is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Beam section label not present in the section table
    #[error("Section not found: {label}")]
    SectionNotFound { label: String },

    /// A stage hit a zero, near-zero or non-finite denominator
    #[error("Degenerate geometry in {stage}: {quantity} = {value}")]
    DegenerateGeometry {
        stage: String,
        quantity: String,
        value: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidNumber error
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(label: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            label: label.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(stage: impl Into<String>, quantity: impl Into<String>, value: f64) -> Self {
        CalcError::DegenerateGeometry {
            stage: stage.into(),
            quantity: quantity.into(),
            value: value.to_string(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether retrying the same request could succeed.
    ///
    /// Input, selection and geometry errors describe an invalid design and
    /// are never retried; only I/O can be transient.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidNumber { .. } => "INVALID_NUMBER",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Guard a denominator before dividing by it.
///
/// Returns the value unchanged when it is finite and not vanishingly small,
/// otherwise a [`CalcError::DegenerateGeometry`] naming the stage and quantity.
pub fn nonzero(stage: &str, quantity: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() || value.abs() < f64::EPSILON {
        return Err(CalcError::degenerate_geometry(stage, quantity, value));
    }
    Ok(value)
}
