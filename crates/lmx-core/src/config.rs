use lmx_types::MAX_NODES;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Default number of bytes read per step while scanning for a line start.
pub const DEFAULT_SCAN_CHUNK_SIZE: usize = 1024;

/// Configuration for a [`LineMaxJob`](crate::LineMaxJob).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    /// Number of partitions, which is also the number of nodes used and the
    /// width of the dispatch pool.
    pub node_count: u32,
    /// Chunk size used by the boundary resolver.
    pub scan_chunk_size: usize,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            node_count: MAX_NODES,
            scan_chunk_size: DEFAULT_SCAN_CHUNK_SIZE,
        }
    }
}

impl JobConfig {
    /// A default configuration split across `node_count` nodes.
    pub fn with_nodes(node_count: u32) -> Self {
        Self {
            node_count,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.node_count == 0 || self.node_count > MAX_NODES {
            return Err(CoreError::InvalidConfig(format!(
                "node_count must be in [1, {MAX_NODES}], got {}",
                self.node_count
            )));
        }
        if self.scan_chunk_size == 0 {
            return Err(CoreError::InvalidConfig(
                "scan_chunk_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = JobConfig::default();
        assert_eq!(c.node_count, 100);
        assert_eq!(c.scan_chunk_size, 1024);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn node_count_bounds() {
        assert!(JobConfig::with_nodes(1).validate().is_ok());
        assert!(JobConfig::with_nodes(0).validate().is_err());
        assert!(JobConfig::with_nodes(MAX_NODES + 1).validate().is_err());
    }

    #[test]
    fn zero_chunk_size_rejected() {
        let c = JobConfig {
            scan_chunk_size: 0,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn parses_toml_table() {
        let c: JobConfig = toml::from_str("node_count = 8").unwrap();
        assert_eq!(c.node_count, 8);
        assert_eq!(c.scan_chunk_size, DEFAULT_SCAN_CHUNK_SIZE);
    }
}
