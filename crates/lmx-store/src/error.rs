/// Errors from byte-source operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A stream was requested past the end of the object.
    #[error("offset {offset} beyond object length {length}")]
    OffsetOutOfRange { offset: u64, length: u64 },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend could not be reached or refused the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
