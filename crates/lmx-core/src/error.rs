use lmx_exec::ExecError;
use lmx_store::StoreError;
use lmx_types::TypeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("execution error: {0}")]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Type(#[from] TypeError),

    /// The stream ended before the corrected span was fully read.
    #[error("short read at offset {offset}: expected {expected} bytes, got {actual}")]
    ShortRead {
        offset: u64,
        expected: u64,
        actual: u64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A unit of work panicked or its blocking task was torn down.
    #[error("worker task aborted: {0}")]
    TaskAborted(String),

    #[error("invalid job config: {0}")]
    InvalidConfig(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
