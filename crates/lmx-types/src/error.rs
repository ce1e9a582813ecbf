use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("node identifier {0} outside [1, {max}]", max = crate::MAX_NODES)]
    InvalidNodeId(u32),

    #[error("invalid partition range: start {start} > end {end}")]
    InvalidRange { start: u64, end: u64 },
}
