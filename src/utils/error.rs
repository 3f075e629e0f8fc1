//! Error types for the thumbnail squarer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.
//! Per-file failures ([`SquareError`]) are wrapped with the originating file name
//! ([`FileFailure`]) and collected by the batch driver into [`BatchError::Files`].

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of the single-file decode → composite → encode pipeline.
#[derive(Error, Debug)]
pub enum SquareError {
    /// Input file could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input bytes are not a recognised or decodable image
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output could not be created, written or flushed
    #[error("cannot encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Convenience result type for single-file operations.
pub type SquareResult<T> = Result<T, SquareError>;

// Helper methods for error creation
impl SquareError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode { path: path.into(), source }
    }

    pub fn encode(path: impl Into<PathBuf>, source: impl Into<image::ImageError>) -> Self {
        Self::Encode { path: path.into(), source: source.into() }
    }
}

/// One file that failed inside a batch, tagged with its file name.
#[derive(Error, Debug)]
#[error("failed to resize {file_name}: {source}")]
pub struct FileFailure {
    pub file_name: String,
    #[source]
    pub source: SquareError,
}

/// Every per-file failure of a batch, in order of occurrence.
#[derive(Debug, Default)]
pub struct FileFailures(Vec<FileFailure>);

impl FileFailures {
    pub fn push(&mut self, failure: FileFailure) {
        self.0.push(failure);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileFailure> {
        self.0.iter()
    }

    /// File names of the failed entries, in order.
    pub fn file_names(&self) -> Vec<&str> {
        self.0.iter().map(|f| f.file_name.as_str()).collect()
    }

    pub fn into_inner(self) -> Vec<FileFailure> {
        self.0
    }
}

impl fmt::Display for FileFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, failure) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FileFailures {}

/// Outcome of a whole batch that did not fully succeed.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The directory listing failed; no file was processed
    #[error("cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One or more files failed; the rest of the batch still ran
    #[error(transparent)]
    Files(#[from] FileFailures),
}

/// Convenience result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

impl BatchError {
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir { path: path.into(), source }
    }

    /// Per-file failures, `None` for a directory-level error.
    pub fn failures(&self) -> Option<&FileFailures> {
        match self {
            Self::Files(failures) => Some(failures),
            Self::ReadDir { .. } => None,
        }
    }
}
