//! # Error Types
//!
//! Structured error types for calc_core. Compute functions never fail: they
//! degrade to zero or documented defaults. These errors belong to the layers
//! around them: catalog lookups, catalog files, and form parsing.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//! use calc_core::catalog::Catalog;
//!
//! fn title_of(id: &str) -> CalcResult<String> {
//!     Ok(Catalog::builtin().require(id)?.title.clone())
//! }
//!
//! assert!(title_of("asphalt-tonnage").is_ok());
//! assert_eq!(title_of("nope").unwrap_err().error_code(), "UNKNOWN_CALCULATOR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of any fallible catalog or file operation
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for everything around the calculators.
///
/// Serializes as `{"type": "...", "details": {...}}` so web clients can
/// branch on the variant without parsing messages.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value could not be interpreted
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No calculator with this id exists in the catalog
    #[error("Unknown calculator: {id}")]
    UnknownCalculator { id: String },

    /// Two catalog entries share an id
    #[error("Duplicate calculator id in catalog: {id}")]
    DuplicateCalculator { id: String },

    /// Reading, writing or renaming a catalog file failed
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Catalog JSON could not be read or written
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Catalog schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// A form value that could not be read for `field`
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_calculator(id: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { id: id.into() }
    }

    pub fn duplicate_calculator(id: impl Into<String>) -> Self {
        CalcError::DuplicateCalculator { id: id.into() }
    }

    /// I/O failure while handling a catalog file
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Stable code for clients that branch on the error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::DuplicateCalculator { .. } => "DUPLICATE_CALCULATOR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("length", "abc", "expected key=value");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_calculator("x").error_code(), "UNKNOWN_CALCULATOR");
        assert_eq!(CalcError::duplicate_calculator("x").error_code(), "DUPLICATE_CALCULATOR");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
