use lmx_types::{NodeId, Partition, PartitionOutcome, PartitionReport};
use tracing::warn;

use crate::error::CoreResult;

/// What one dispatched partition produced: its local maximum or the failure
/// that stopped it.
#[derive(Debug)]
pub struct PartialResult {
    pub partition: Partition,
    pub node: NodeId,
    pub outcome: CoreResult<u64>,
}

/// Folds partial results with `max`, seeded at `0`.
///
/// Failures are logged and recorded but contribute the identity element, so
/// a single broken partition never aborts the run. Results may arrive in any
/// order; each partition index is counted once.
#[derive(Debug)]
pub struct Aggregator {
    expected: usize,
    max_tokens: u64,
    reports: Vec<PartitionReport>,
}

impl Aggregator {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            max_tokens: 0,
            reports: Vec::with_capacity(expected),
        }
    }

    /// Fold one partial result.
    pub fn record(&mut self, result: PartialResult) {
        let PartialResult {
            partition,
            node,
            outcome,
        } = result;

        if self
            .reports
            .iter()
            .any(|r| r.partition.index == partition.index)
        {
            warn!(%node, partition = partition.index, "duplicate partial result ignored");
            return;
        }

        let outcome = match outcome {
            Ok(max_tokens) => PartitionOutcome::Completed { max_tokens },
            Err(error) => {
                warn!(%node, partition = partition.index, %error,
                    "partition failed, contributing nothing");
                PartitionOutcome::Failed {
                    reason: error.to_string(),
                }
            }
        };

        self.max_tokens = self.max_tokens.max(outcome.contribution());
        self.reports.push(PartitionReport {
            partition,
            node,
            outcome,
        });
    }

    /// Number of distinct partitions folded so far.
    pub fn received(&self) -> usize {
        self.reports.len()
    }

    /// Returns `true` once every expected partition has reported.
    pub fn is_complete(&self) -> bool {
        self.reports.len() >= self.expected
    }

    /// Current value of the fold.
    pub fn max_tokens(&self) -> u64 {
        self.max_tokens
    }

    /// Consume the aggregator, returning the maximum and the per-partition
    /// reports ordered by partition index.
    pub fn finish(mut self) -> (u64, Vec<PartitionReport>) {
        if !self.is_complete() {
            warn!(
                expected = self.expected,
                received = self.reports.len(),
                "aggregation finished with missing partitions"
            );
        }
        self.reports.sort_by_key(|r| r.partition.index);
        (self.max_tokens, self.reports)
    }
}
