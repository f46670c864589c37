//! Extraction errors.

use std::path::PathBuf;

/// Errors that can occur while extracting a document or running a batch.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("The file '{}' does not exist.", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Cannot decode '{}' with any supported encoding", path.display())]
    DecodeFailure { path: PathBuf },

    #[error("No HTML files found in '{}'", dir.display())]
    EmptyBatch { dir: PathBuf },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to compile Sass: {0}")]
    CompileFailure(#[from] SassError),

    #[error("Settings I/O failed: {0}")]
    SettingsIo(String),
}

impl ExtractError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

/// Error reported by a Sass compiler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SassError {
    #[error("No Sass compiler available")]
    Unavailable,

    #[error("{0}")]
    Compile(String),
}
