//! Registry error types
//!
//! Defines all errors that can occur in the in-memory registry layer.

use thiserror::Error;

/// Errors that can occur when mutating or reading a collection
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A required field was submitted empty
    #[error("{kind}: required field '{field}' must not be empty")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    /// A field value failed validation
    #[error("{kind}: invalid value for '{field}': {reason}")]
    InvalidValue {
        kind: &'static str,
        field: &'static str,
        reason: String,
    },

    /// The requested record does not exist
    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: u32 },

    /// The export target names an unknown collection
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Check that a required text field is non-empty (whitespace counts as empty)
pub fn require(
    kind: &'static str,
    field: &'static str,
    value: &str,
) -> RegistryResult<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::MissingField { kind, field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::MissingField {
            kind: "doctor",
            field: "name",
        };
        assert_eq!(err.to_string(), "doctor: required field 'name' must not be empty");

        let err = RegistryError::NotFound { kind: "patient", id: 7 };
        assert_eq!(err.to_string(), "patient with id 7 not found");
    }

    #[test]
    fn test_require() {
        assert!(require("doctor", "name", "Asha Verma").is_ok());
        assert!(require("doctor", "name", "").is_err());
        assert!(require("doctor", "name", "   ").is_err());
    }
}
