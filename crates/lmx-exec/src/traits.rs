use lmx_types::NodeId;

use crate::error::{ExecError, ExecResult, WorkError};

/// Runs units of work on numbered remote nodes.
///
/// `run` blocks the calling thread until the unit of work has completed or
/// failed. Implementations must reject node identifiers outside
/// `[1, node_count()]` before doing any work, and must surface a failure
/// raised inside the unit of work as [`ExecError::WorkFailed`].
pub trait RemoteExecutor: Send + Sync {
    /// Number of nodes this executor can address.
    fn node_count(&self) -> u32;

    /// Run `work` on `node` and return its result.
    fn run<T, F>(&self, node: NodeId, work: F) -> ExecResult<T>
    where
        T: Send,
        F: FnOnce() -> Result<T, WorkError> + Send;

    /// Reject a node identifier this executor cannot address.
    fn check_node(&self, node: NodeId) -> ExecResult<()> {
        let node_count = self.node_count();
        if node.get() > node_count {
            return Err(ExecError::InvalidNode {
                node: node.get(),
                node_count,
            });
        }
        Ok(())
    }
}

impl<X: RemoteExecutor> RemoteExecutor for std::sync::Arc<X> {
    fn node_count(&self) -> u32 {
        (**self).node_count()
    }

    fn run<T, F>(&self, node: NodeId, work: F) -> ExecResult<T>
    where
        T: Send,
        F: FnOnce() -> Result<T, WorkError> + Send,
    {
        (**self).run(node, work)
    }
}
