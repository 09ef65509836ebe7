//! Error types for the chart conversion pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern conversion operations
#[derive(Debug)]
pub enum PatternError {
    /// Failed to decode a source image
    Decode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Requested grid dimensions are unusable
    InvalidDimensions {
        /// The offending canvas-size string or dimension value
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Distinct color count exceeds the symbol alphabet capacity
    ///
    /// Raised after reduction when more distinct palette indices remain
    /// than there are printable symbols to assign. Lowering `max_colors`
    /// resolves it.
    TooManyColors {
        /// Number of distinct colors needing symbols
        needed: usize,
        /// Number of symbols in the alphabet
        available: usize,
    },

    /// Failed to save a rendered chart to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to serialize the pattern data structure
    PatternExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Pipeline parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::InvalidDimensions { value, reason } => {
                write!(f, "Invalid canvas dimensions '{value}': {reason}")
            }
            Self::TooManyColors { needed, available } => {
                write!(
                    f,
                    "Pattern uses {needed} colors but only {available} symbols are available; reduce max colors"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export chart to '{}': {source}",
                    path.display()
                )
            }
            Self::PatternExport { path, source } => {
                write!(
                    f,
                    "Failed to write pattern data to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::PatternExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<image::ImageError> for PatternError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid dimensions error
pub fn invalid_dimensions(value: &impl ToString, reason: &impl ToString) -> PatternError {
    PatternError::InvalidDimensions {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_colors_message_mentions_counts() {
        let err = PatternError::TooManyColors {
            needed: 95,
            available: 90,
        };
        let message = err.to_string();
        assert!(message.contains("95"));
        assert!(message.contains("90"));
    }

    #[test]
    fn test_invalid_dimensions_helper() {
        let err = invalid_dimensions(&"0x10", &"width must be positive");
        match err {
            PatternError::InvalidDimensions { value, reason } => {
                assert_eq!(value, "0x10");
                assert!(reason.contains("positive"));
            }
            _ => unreachable!("Expected InvalidDimensions error type"),
        }
    }
}
