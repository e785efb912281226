//! Error types for reader operations

use std::io;

use thiserror::Error;

/// Result alias used throughout the crate
pub type ReaderResult<T> = Result<T, ReaderError>;

/// Errors returned by [`InputReader`](crate::InputReader)
///
/// Invalid answers typed by the user are never reported here; they are
/// answered with a diagnostic and a fresh prompt instead.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// R001: Input ended or failed before a full line was available
    #[error("R001: failed to read input: {0}")]
    Read(#[from] io::Error),

    /// R002: The configured default is not one of the options
    #[error("R002: default {default:?} is not in options")]
    DefaultNotInOptions { default: String },
}

impl ReaderError {
    /// Error for a stream that ended before a line terminator
    pub(crate) fn end_of_input() -> Self {
        ReaderError::Read(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input before a complete line",
        ))
    }

    /// Get the error code (e.g., "R001")
    pub fn code(&self) -> &'static str {
        match self {
            ReaderError::Read(_) => "R001",
            ReaderError::DefaultNotInOptions { .. } => "R002",
        }
    }

    /// Get the process exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            ReaderError::Read(_) => 2,
            ReaderError::DefaultNotInOptions { .. } => 4,
        }
    }

    /// True when the input stream simply ran out
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ReaderError::Read(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
