//! # PolySet Errors
//!
//! Error types for PolySet building and merging.
//!
//! ## Error Policy
//!
//! - Conversion failures are recoverable: logged, fragment skipped
//! - Degenerate polygons are dropped silently and never become errors
//! - Unsupported geometry variants are contract violations, not errors

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while feeding geometry into a builder.
#[derive(Debug, Error)]
pub enum PolySetError {
    /// A foreign solid representation could not be converted to a PolySet.
    #[error("{source_kind} conversion failed: {message}")]
    ConversionFailed {
        /// Name of the source representation (e.g. "Nef")
        source_kind: &'static str,
        /// Adapter supplied details
        message: String,
    },

    /// A face or color index refers to an entry that does not exist.
    #[error("Index {index} out of range for {what} of length {len}")]
    IndexOutOfRange {
        /// Which array was indexed
        what: &'static str,
        /// Offending index
        index: usize,
        /// Length of the indexed array
        len: usize,
    },

    /// A face has fewer than three distinct corners.
    #[error("Face {face} is degenerate")]
    DegenerateFace {
        /// Position of the face in the index array
        face: usize,
    },

    /// Two parallel arrays disagree in length.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Which array has the wrong length
        what: &'static str,
        /// Required length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Invalid builder configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl PolySetError {
    /// Creates a conversion failed error.
    pub fn conversion_failed(source_kind: &'static str, message: impl Into<String>) -> Self {
        Self::ConversionFailed {
            source_kind,
            message: message.into(),
        }
    }

    /// Creates an index out of range error.
    pub fn index_out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { what, index, len }
    }

    /// Creates a degenerate face error.
    pub fn degenerate_face(face: usize) -> Self {
        Self::DegenerateFace { face }
    }

    /// Creates a length mismatch error.
    pub fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            actual,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for PolySet operations.
pub type PolySetResult<T> = Result<T, PolySetError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = PolySetError::conversion_failed("Nef", "non-manifold input");
        assert_eq!(err.to_string(), "Nef conversion failed: non-manifold input");

        let err = PolySetError::index_out_of_range("vertices", 9, 4);
        assert!(err.to_string().contains("vertices"));
        assert!(err.to_string().contains('9'));

        let err = PolySetError::degenerate_face(2);
        assert_eq!(err.to_string(), "Face 2 is degenerate");
    }

    #[test]
    fn test_config_error_converts() {
        let err: PolySetError = ConfigError::InvalidDimension(5).into();
        assert!(matches!(err, PolySetError::InvalidConfig(_)));
    }

    /// Test error types are Send + Sync for parallel batch building.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PolySetError>();
    }
}
