//! Error types and path context for grid configuration and layout processing

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all snapping operations
#[derive(Debug)]
pub enum SnapError {
    /// Grid parameters violate the grid invariants
    ///
    /// Raised when:
    /// - The cell size is zero, negative or not finite
    /// - The minimum cell bound is not strictly below the maximum on an axis
    InvalidGrid {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Footprint geometry cannot be snapped
    InvalidFootprint {
        /// Description of what's wrong with the footprint
        reason: String,
    },

    /// Layout file content is not valid JSON for a layout
    LayoutParse {
        /// Path to the layout file
        path: PathBuf,
        /// Underlying deserialization error
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

    /// CLI target is neither a layout file nor a directory
    InvalidTarget {
        /// Description of the rejected target
        reason: String,
    },
}

impl fmt::Display for SnapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid grid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidFootprint { reason } => {
                write!(f, "Invalid footprint: {reason}")
            }
            Self::LayoutParse { path, source } => {
                write!(f, "Failed to parse layout '{}': {source}", path.display())
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
            Self::InvalidTarget { reason } => {
                write!(f, "Invalid target: {reason}")
            }
        }
    }
}

impl std::error::Error for SnapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LayoutParse { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for snapping results
pub type Result<T> = std::result::Result<T, SnapError>;

impl From<std::io::Error> for SnapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the file being worked on to I/O and parse failures
pub trait WithPath<T> {
    /// Tag the error with a path and the operation that failed
    ///
    /// # Errors
    ///
    /// Propagates the original error rewritten to carry `path`
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| SnapError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl<T> WithPath<T> for std::result::Result<T, serde_json::Error> {
    fn with_path(self, path: &Path, _operation: &'static str) -> Result<T> {
        self.map_err(|source| SnapError::LayoutParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Create an invalid grid parameter error
pub fn invalid_grid(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SnapError {
    SnapError::InvalidGrid {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid footprint error
pub fn invalid_footprint(reason: &impl ToString) -> SnapError {
    SnapError::InvalidFootprint {
        reason: reason.to_string(),
    }
}

/// Create an invalid target error
pub fn invalid_target(reason: &impl ToString) -> SnapError {
    SnapError::InvalidTarget {
        reason: reason.to_string(),
    }
}
