//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Absence of optional clinical data is never an error anywhere in the
//! engine; these variants cover rejected input, missing aggregates,
//! analytics over empty data, and the I/O boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type used throughout the engine
#[derive(Debug, Error)]
pub enum IctusError {
    /// Rejected input at entity-construction time (invalid enum value,
    /// out-of-range scale, non-positive duration, malformed format)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup of an unknown patient identifier, distinct from validation
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    /// Document transformation failure
    #[error("Transformation error: {0}")]
    Transform(String),

    /// Analytics over insufficient data (e.g. no timestamped events)
    #[error("Analytics error: {0}")]
    Analytics(String),

    /// Durable-export failure, carrying the attempted path
    #[error("I/O error at {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl IctusError {
    /// Wrap an I/O error with the path that was being accessed
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        IctusError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IctusError {
    fn from(err: serde_json::Error) -> Self {
        IctusError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for IctusError {
    fn from(err: toml::de::Error) -> Self {
        IctusError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = IctusError::Validation("severity must be between 1 and 10".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: severity must be between 1 and 10"
        );
    }

    #[test]
    fn test_io_error_carries_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IctusError::io("/tmp/out.json", &io_err);
        assert!(err.to_string().contains("/tmp/out.json"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_not_found_distinct_from_validation() {
        let err = IctusError::PatientNotFound("p-123".to_string());
        assert!(matches!(err, IctusError::PatientNotFound(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: IctusError = json_err.into();
        assert!(matches!(err, IctusError::Serialization(_)));
    }

    #[test]
    fn test_implements_std_error() {
        let err = IctusError::Transform("bad document".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
