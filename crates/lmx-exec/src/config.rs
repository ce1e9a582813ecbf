use std::time::Duration;

use lmx_types::MAX_NODES;
use serde::{Deserialize, Serialize};

use crate::error::{ExecError, ExecResult};

/// Configuration for the [`LocalExecutor`](crate::LocalExecutor).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Number of addressable nodes, in `[1, MAX_NODES]`.
    pub node_count: u32,
    /// Simulated node startup time paid on every `run`.
    pub startup_latency_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            node_count: MAX_NODES,
            startup_latency_ms: 0,
        }
    }
}

impl ExecutorConfig {
    pub fn startup_latency(&self) -> Duration {
        Duration::from_millis(self.startup_latency_ms)
    }

    pub fn validate(&self) -> ExecResult<()> {
        if self.node_count == 0 || self.node_count > MAX_NODES {
            return Err(ExecError::InvalidConfig(format!(
                "node_count must be in [1, {MAX_NODES}], got {}",
                self.node_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ExecutorConfig::default();
        assert_eq!(c.node_count, 100);
        assert_eq!(c.startup_latency(), Duration::ZERO);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_node_count() {
        let zero = ExecutorConfig { node_count: 0, ..Default::default() };
        assert!(matches!(zero.validate(), Err(ExecError::InvalidConfig(_))));
        let big = ExecutorConfig { node_count: 101, ..Default::default() };
        assert!(big.validate().is_err());
    }

    #[test]
    fn parses_partial_toml() {
        let c: ExecutorConfig = toml::from_str("startup_latency_ms = 100").unwrap();
        assert_eq!(c.node_count, 100);
        assert_eq!(c.startup_latency(), Duration::from_millis(100));
    }
}
