use std::path::PathBuf;

use thiserror::Error;

use crate::object::{FrameError, Id, ParseIdError, UnknownKindError};

/// Describes the potential error conditions that might arise from `Repo` operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("configuration file missing: {0}")]
    ConfigMissing(PathBuf),

    #[error("invalid configuration in {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("unsupported repositoryformatversion: {0}")]
    UnsupportedFormatVersion(String),

    #[error("{0} is not a directory")]
    TargetNotDirectory(PathBuf),

    #[error("repository already exists: {0}")]
    RepositoryAlreadyExists(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("no git directory found in {0} or any of its parents")]
    RepositoryNotFound(PathBuf),

    #[error("malformed object {id}: {source}")]
    MalformedObject {
        id: Id,
        #[source]
        source: FrameError,
    },

    #[error(transparent)]
    UnknownObjectKind(#[from] UnknownKindError),

    #[error(transparent)]
    InvalidObjectId(#[from] ParseIdError),

    #[error("unrecognized HEAD in {0}")]
    InvalidHead(PathBuf),

    #[error(transparent)]
    IoFailure(#[from] std::io::Error),
}

/// A specialized `Result` type for `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
