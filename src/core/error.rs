//! Error types for compnet-fix
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for compnet-fix operations
#[derive(Debug, Error)]
pub enum CompnetError {
    /// Coordinate file header did not match its format
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// File could not be read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension does not name a known coordinate format
    #[error("Unsupported coordinate file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Tolerance must be a finite, non-negative number
    #[error("Invalid {axis} tolerance: {value}")]
    InvalidTolerance { axis: &'static str, value: f64 },
}

impl CompnetError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompnetError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while reading a coordinate file header
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The header line at `line` (1-based) lacks the expected marker
    #[error("{format} header: line {line} does not contain '{marker}'")]
    MissingHeaderMarker {
        format: &'static str,
        line: usize,
        marker: &'static str,
    },

    /// The file ends before the header does
    #[error("{format} header: expected at least {expected} lines, found {found}")]
    TruncatedHeader {
        format: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Result type alias for compnet-fix operations
pub type Result<T> = std::result::Result<T, CompnetError>;

/// Result type alias for coordinate parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;
