use lmx_types::NodeId;
use thiserror::Error;

/// Failure raised inside a unit of work.
pub type WorkError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ExecError {
    /// The node identifier is outside the executor's valid range. This is a
    /// usage error: the unit of work was never started.
    #[error("invalid node {node}: valid range is [1, {node_count}]")]
    InvalidNode { node: u32, node_count: u32 },

    /// The unit of work ran and raised a failure.
    #[error("work on {node} failed: {source}")]
    WorkFailed {
        node: NodeId,
        #[source]
        source: WorkError,
    },

    #[error("invalid executor config: {0}")]
    InvalidConfig(String),
}

pub type ExecResult<T> = Result<T, ExecError>;
