//! Error types shared by the exercises.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for exercise operations
pub type Result<T> = std::result::Result<T, ExerciseError>;

/// Errors that can occur in any of the exercises.
#[derive(Error, Debug)]
pub enum ExerciseError {
    /// Path does not exist or is not a regular file
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Access to the file was denied
    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other read, seek or write failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line is not valid UTF-8
    #[error("Invalid UTF-8 in line starting at byte {offset}")]
    Decoding { offset: u64 },

    /// Zero-sized read buffer
    #[error("Buffer size must be at least 1 byte")]
    InvalidBufferSize,

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed transaction record
    #[error("Invalid transaction at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Reconciliation margin that is negative or out of range
    #[error("Invalid date margin: {days} days")]
    InvalidMargin { days: i64 },

    /// Assignment to a computed property without a setter
    #[error("Computed property has no setter")]
    ReadOnlyProperty,

    /// Deletion of a computed property without a deleter
    #[error("Computed property has no deleter")]
    NotDeletable,

    /// Missing input file argument
    #[error("Missing input file argument. Usage: reconcile <left.csv> <right.csv>")]
    MissingArgument,
}

impl ExerciseError {
    /// Maps an error from opening `path` onto the path-aware variants.
    pub fn from_open(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }
}
