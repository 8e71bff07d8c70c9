//! Error kinds shared by the converters.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::notion::NotionError;

/// Errors that can occur while converting, splitting or exporting documents.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path does not exist.
    #[error("'{0}' not found")]
    NotFound(PathBuf),

    /// Input path lacks the expected suffix.
    #[error("'{path}' must have a .{expected} extension")]
    WrongExtension { path: PathBuf, expected: &'static str },

    /// Read or write failure on the underlying storage.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote page source failed or returned malformed data.
    #[error("remote fetch failed: {0}")]
    RemoteFetch(#[from] NotionError),

    /// Two sections map to the same output file under the `fail` policy.
    #[error("sections '{first}' and '{second}' both map to '{slug}.qmd'")]
    SlugCollision { slug: String, first: String, second: String },
}

/// Discriminant of [`ConvertError`] for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    WrongExtension,
    Io,
    RemoteFetch,
    SlugCollision,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::InputNotFound,
            Self::WrongExtension { .. } => ErrorKind::WrongExtension,
            Self::Io { .. } => ErrorKind::Io,
            Self::RemoteFetch(_) => ErrorKind::RemoteFetch,
            Self::SlugCollision { .. } => ErrorKind::SlugCollision,
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}
