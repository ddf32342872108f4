//! Error types for add-urp.
//!
//! All operations return `Result<T>` which aliases `Result<T, PatchError>`.

use crate::paths::to_forward_slashes;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from manifest patch operations.
#[derive(Debug, Error)]
pub enum PatchError {
    /// Wrong number (or shape) of command-line arguments.
    #[error("Incorrect arguments, expected 2: {0}")]
    InvalidArguments(String),

    /// No manifest could be located from the supplied project path.
    #[error("Can not find manifest at path {}", to_forward_slashes(.0))]
    ManifestNotFound(PathBuf),

    /// Graphics repository path is not an existing directory.
    #[error("Can not find graphics repo folder in {}", to_forward_slashes(.0))]
    GraphicsRepoNotFound(PathBuf),

    /// An expected literal marker is missing from the manifest text.
    #[error("Manifest unexpected structure: {0}")]
    ManifestMalformed(String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for add-urp operations.
pub type Result<T> = std::result::Result<T, PatchError>;
