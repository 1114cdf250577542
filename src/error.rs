//! Error types shared by every layer

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the imaging, hashing and custody operations
#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("I/O error while {operation} {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Source and destination are the same file: {}", .0.display())]
    SameFile(PathBuf),

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

impl ImagingError {
    pub fn io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Underlying OS error kind, if this is an I/O failure
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImagingError>;

/// Attaches operation and path context to raw `io::Result`s
pub(crate) trait IoContext<T> {
    fn with_path(self, operation: &'static str, path: &Path) -> Result<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn with_path(self, operation: &'static str, path: &Path) -> Result<T> {
        self.map_err(|e| ImagingError::io(operation, path, e))
    }
}
