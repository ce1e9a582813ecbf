use serde::{Deserialize, Serialize};

use crate::node::NodeId;
use crate::partition::Partition;

/// What a single partition contributed to the fold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PartitionOutcome {
    /// The unit of work finished and reported its local maximum.
    Completed { max_tokens: u64 },
    /// The unit of work failed; the partition contributes `0`.
    Failed { reason: String },
}

impl PartitionOutcome {
    /// The value this outcome contributes to the `max` fold. Failures
    /// contribute the identity element.
    pub fn contribution(&self) -> u64 {
        match self {
            Self::Completed { max_tokens } => *max_tokens,
            Self::Failed { .. } => 0,
        }
    }

    /// Returns `true` if the unit of work failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Outcome of one dispatched partition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionReport {
    pub partition: Partition,
    pub node: NodeId,
    pub outcome: PartitionOutcome,
}

/// Result of a full plan/dispatch/reduce run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobReport {
    /// Maximum token count over all successful partitions.
    pub max_tokens: u64,
    /// Length of the object in bytes, as reported by the store.
    pub object_len: u64,
    /// Number of partitions (and nodes) the object was split into.
    pub node_count: u32,
    /// Per-partition outcomes, ordered by partition index.
    pub partitions: Vec<PartitionReport>,
    /// Wall-clock time of the run in milliseconds.
    pub elapsed_ms: u64,
}

impl JobReport {
    /// Number of partitions that completed.
    pub fn succeeded(&self) -> usize {
        self.partitions
            .iter()
            .filter(|p| !p.outcome.is_failed())
            .count()
    }

    /// Number of partitions whose unit of work failed.
    pub fn failed(&self) -> usize {
        self.partitions
            .iter()
            .filter(|p| p.outcome.is_failed())
            .count()
    }

    /// Iterate over failed partitions.
    pub fn failures(&self) -> impl Iterator<Item = &PartitionReport> {
        self.partitions.iter().filter(|p| p.outcome.is_failed())
    }
}
