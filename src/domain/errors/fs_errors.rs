use crate::domain::value_objects::ObjectPath;

use super::{ClientError, ValidationError};

/// Errors surfaced by the path-oriented file system API.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// The path could not be decoded into container and key
    #[error(transparent)]
    InvalidPath(#[from] ValidationError),

    /// A provider URI could not be parsed
    #[error("invalid uri '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// Metadata or content was requested for a folder or missing entry
    #[error("not a file: {path}")]
    NotAFile { path: ObjectPath },

    /// The single upload issued on close failed; the spool was still removed
    #[error("upload failed for {path}")]
    Upload {
        path: ObjectPath,
        #[source]
        source: ClientError,
    },

    /// A store failure other than the not-found resolution outcome
    #[error(transparent)]
    Storage(#[from] ClientError),

    /// Local spool i/o failed
    #[error("spool i/o error")]
    Spool(#[from] std::io::Error),
}

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;
