use lmx_types::NodeId;
use tracing::debug;

use crate::config::ExecutorConfig;
use crate::error::{ExecError, ExecResult, WorkError};
use crate::traits::RemoteExecutor;

/// In-process executor: runs each unit of work on the calling thread as if
/// it were node `node`.
///
/// Validates node identifiers exactly like a networked executor would and
/// optionally sleeps for a configured startup latency before each unit of
/// work, so timing behaviour of a real cluster can be reproduced locally.
#[derive(Clone, Debug)]
pub struct LocalExecutor {
    config: ExecutorConfig,
}

impl LocalExecutor {
    pub fn new(config: ExecutorConfig) -> ExecResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// An executor addressing `node_count` nodes with no simulated latency.
    pub fn with_nodes(node_count: u32) -> ExecResult<Self> {
        Self::new(ExecutorConfig {
            node_count,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }
}

impl RemoteExecutor for LocalExecutor {
    fn node_count(&self) -> u32 {
        self.config.node_count
    }

    fn run<T, F>(&self, node: NodeId, work: F) -> ExecResult<T>
    where
        T: Send,
        F: FnOnce() -> Result<T, WorkError> + Send,
    {
        self.check_node(node)?;

        let latency = self.config.startup_latency();
        if !latency.is_zero() {
            std::thread::sleep(latency);
        }

        debug!(%node, "running unit of work");
        work().map_err(|source| ExecError::WorkFailed { node, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::{Duration, Instant};

    fn node(raw: u32) -> NodeId {
        NodeId::new(raw).unwrap()
    }

    #[test]
    fn returns_work_result() {
        let exec = LocalExecutor::new(ExecutorConfig::default()).unwrap();
        let out = exec.run(node(2), || Ok(10 + 20)).unwrap();
        assert_eq!(out, 30);
        let s = exec
            .run(node(1), || Ok("Hello from remote machine!".to_string()))
            .unwrap();
        assert_eq!(s, "Hello from remote machine!");
    }

    #[test]
    fn accepts_both_ends_of_range() {
        let exec = LocalExecutor::new(ExecutorConfig::default()).unwrap();
        assert_eq!(exec.run(node(1), || Ok("first")).unwrap(), "first");
        assert_eq!(exec.run(node(100), || Ok("last")).unwrap(), "last");
    }

    #[test]
    fn rejects_node_beyond_configured_count_without_running() {
        let exec = LocalExecutor::with_nodes(4).unwrap();
        let ran = AtomicBool::new(false);
        let err = exec
            .run(node(5), || {
                ran.store(true, Ordering::SeqCst);
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ExecError::InvalidNode { node: 5, node_count: 4 }
        ));
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    fn propagates_work_failure() {
        let exec = LocalExecutor::with_nodes(1).unwrap();
        let err = exec
            .run::<(), _>(node(1), || Err("remote execution failed".into()))
            .unwrap_err();
        match err {
            ExecError::WorkFailed { node, source } => {
                assert_eq!(node.get(), 1);
                assert_eq!(source.to_string(), "remote execution failed");
            }
            other => panic!("expected WorkFailed, got {other}"),
        }
    }

    #[test]
    fn passes_through_optional_results() {
        let exec = LocalExecutor::with_nodes(1).unwrap();
        let out: Option<u32> = exec.run(node(1), || Ok(None)).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn startup_latency_is_paid_per_run() {
        let exec = LocalExecutor::new(ExecutorConfig {
            node_count: 1,
            startup_latency_ms: 15,
        })
        .unwrap();
        let started = Instant::now();
        exec.run(node(1), || Ok(())).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(LocalExecutor::with_nodes(0).is_err());
    }
}
