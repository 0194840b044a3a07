/// Errors surfaced at the object-store client boundary.
///
/// `NotFound` is deliberately its own variant: resolution branches on it,
/// treating absence at a key as evidence rather than failure. Every other
/// store failure is fatal to the operation that triggered it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    #[error("object not found: {container}/{key}")]
    NotFound { container: String, key: String },

    /// Any storage-service failure other than not-found
    #[error("storage service error: {message}")]
    Service { message: String },

    /// The client itself could not be constructed for a container
    #[error("client configuration error: {message}")]
    Configuration { message: String },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
