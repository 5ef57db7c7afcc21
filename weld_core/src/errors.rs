//! # Error Types
//!
//! Structured error types for weld_core. Errors fall into two categories:
//!
//! - **Configuration** errors are raised eagerly when a mutation would store
//!   invalid state (unknown weld type, non-positive size), or when an
//!   aggregate query is made on an empty collection.
//! - **Geometry** errors are raised at query time when the current geometry
//!   cannot be evaluated (a segment whose endpoints coincide).
//!
//! No error is ever downgraded to a default value such as `0.0` or `NaN`.
//!
//! ## Example
//!
//! ```rust
//! use weld_core::errors::{WeldError, WeldResult};
//!
//! fn validate_size(size: f64) -> WeldResult<()> {
//!     if size <= 0.0 {
//!         return Err(WeldError::invalid_input(
//!             "size",
//!             size.to_string(),
//!             "Weld size must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_size(-0.25).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for weld_core operations
pub type WeldResult<T> = Result<T, WeldError>;

/// Broad classification of a [`WeldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Invalid input or an unusable collection state
    Configuration,
    /// Geometry that cannot be evaluated
    Geometry,
}

/// Structured error type for weld calculations.
///
/// Each variant carries enough context for a caller (or an editing UI) to
/// point at the offending input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum WeldError {
    /// Weld process type is not one of the supported kinds
    #[error("Unsupported weld type: '{value}' (expected 'fillet' or 'groove')")]
    UnsupportedWeldType { value: String },

    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Segment endpoints coincide so no direction can be normalized
    #[error("Degenerate segment #{index}: endpoints {from:?} and {to:?} coincide")]
    DegenerateSegment {
        index: usize,
        from: [f64; 3],
        to: [f64; 3],
    },

    /// Centroid or inertia requested on a group without segments
    #[error("Weld group '{name}' has no segments")]
    EmptyGroup { name: String },

    /// Centroid or inertia requested on an assembly without groups
    #[error("Weld assembly has no groups")]
    EmptyAssembly,

    /// Segment or group index does not exist
    #[error("Index {index} out of range for {collection} of length {len}")]
    IndexOutOfRange {
        collection: String,
        index: usize,
        len: usize,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl WeldError {
    /// Create an UnsupportedWeldType error
    pub fn unsupported_weld_type(value: impl Into<String>) -> Self {
        WeldError::UnsupportedWeldType {
            value: value.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        WeldError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an EmptyGroup error
    pub fn empty_group(name: impl Into<String>) -> Self {
        WeldError::EmptyGroup { name: name.into() }
    }

    /// Create an IndexOutOfRange error
    pub fn index_out_of_range(collection: impl Into<String>, index: usize, len: usize) -> Self {
        WeldError::IndexOutOfRange {
            collection: collection.into(),
            index,
            len,
        }
    }

    /// Which family of failure this is
    pub fn category(&self) -> ErrorCategory {
        match self {
            WeldError::DegenerateSegment { .. } => ErrorCategory::Geometry,
            _ => ErrorCategory::Configuration,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            WeldError::UnsupportedWeldType { .. } => "UNSUPPORTED_WELD_TYPE",
            WeldError::InvalidInput { .. } => "INVALID_INPUT",
            WeldError::DegenerateSegment { .. } => "DEGENERATE_SEGMENT",
            WeldError::EmptyGroup { .. } => "EMPTY_GROUP",
            WeldError::EmptyAssembly => "EMPTY_ASSEMBLY",
            WeldError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            WeldError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for WeldError {
    fn from(err: serde_json::Error) -> Self {
        WeldError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject sizes and dimensions that are not strictly positive and finite.
pub(crate) fn ensure_positive(field: &str, value: f64) -> WeldResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(WeldError::invalid_input(
            field,
            value.to_string(),
            "Must be a positive, finite number",
        ));
    }
    Ok(())
}

/// Reject degenerate-length tolerances that are negative or not finite.
pub(crate) fn ensure_tolerance(field: &str, value: f64) -> WeldResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(WeldError::invalid_input(
            field,
            value.to_string(),
            "Tolerance must be zero or positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = WeldError::invalid_input("size", "-0.25", "Weld size must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: WeldError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);

        let json = serde_json::to_string(&WeldError::EmptyAssembly).unwrap();
        assert!(json.contains("EmptyAssembly"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(WeldError::empty_group("WG").error_code(), "EMPTY_GROUP");
        assert_eq!(
            WeldError::unsupported_weld_type("plug").error_code(),
            "UNSUPPORTED_WELD_TYPE"
        );
        assert_eq!(WeldError::EmptyAssembly.error_code(), "EMPTY_ASSEMBLY");
    }

    #[test]
    fn test_error_categories() {
        let degenerate = WeldError::DegenerateSegment {
            index: 0,
            from: [0.0; 3],
            to: [0.0; 3],
        };
        assert_eq!(degenerate.category(), ErrorCategory::Geometry);
        assert_eq!(WeldError::EmptyAssembly.category(), ErrorCategory::Configuration);
        assert_eq!(
            WeldError::unsupported_weld_type("spot").category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("size", 0.25).is_ok());
        assert!(ensure_positive("size", 0.0).is_err());
        assert!(ensure_positive("size", -1.0).is_err());
        assert!(ensure_positive("size", f64::NAN).is_err());
        assert!(ensure_positive("size", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_tolerance() {
        assert!(ensure_tolerance("tol", 0.0).is_ok());
        assert!(ensure_tolerance("tol", 1e-12).is_ok());
        assert!(ensure_tolerance("tol", -1.0).is_err());
        assert!(ensure_tolerance("tol", f64::NAN).is_err());
    }
}
