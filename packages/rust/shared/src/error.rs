//! Error types for mdtut.
//!
//! Library crates use [`MdtutError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all mdtut operations.
#[derive(Debug, thiserror::Error)]
pub enum MdtutError {
    /// A lesson file could not be read.
    #[error("read error at {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A directory listing could not be obtained.
    #[error("cannot list directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Nothing to build a tutorial from: no paths given, or everything was
    /// filtered out or pruned.
    #[error("{message}")]
    NoInput { message: String },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error outside of tutorial scanning.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Rendering an artifact to JSON failed.
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MdtutError>;

impl MdtutError {
    /// Wrap a failed file read.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Wrap a failed directory listing.
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// Create a no-input error from any displayable message.
    pub fn no_input(msg: impl Into<String>) -> Self {
        Self::NoInput {
            message: msg.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the "nothing usable" family of failures, as opposed to
    /// hard I/O failures during the build.
    pub fn is_no_input(&self) -> bool {
        matches!(self, Self::NoInput { .. })
    }
}
