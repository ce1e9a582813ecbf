use std::sync::Arc;
use std::time::Instant;

use lmx_exec::{RemoteExecutor, WorkError};
use lmx_store::ByteSource;
use lmx_types::{JobReport, NodeId, Partition};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::aggregate::{Aggregator, PartialResult};
use crate::boundary::BoundaryResolver;
use crate::config::JobConfig;
use crate::error::{CoreError, CoreResult};
use crate::planner::plan_partitions;
use crate::worker::PartitionWorker;

/// One plan/dispatch/reduce pipeline over a byte source.
///
/// The source and executor are injected handles; the job holds no other
/// state, so a single job may be run repeatedly and several jobs may share
/// the same source and executor.
pub struct LineMaxJob<S: ?Sized, X> {
    source: Arc<S>,
    executor: Arc<X>,
    config: JobConfig,
}

impl<S, X> LineMaxJob<S, X>
where
    S: ByteSource + ?Sized + 'static,
    X: RemoteExecutor + 'static,
{
    pub fn new(source: Arc<S>, executor: Arc<X>, config: JobConfig) -> CoreResult<Self> {
        config.validate()?;
        if config.node_count > executor.node_count() {
            warn!(
                partitions = config.node_count,
                nodes = executor.node_count(),
                "more partitions than addressable nodes; the excess will be rejected"
            );
        }
        Ok(Self {
            source,
            executor,
            config,
        })
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// Largest number of tokens on any single line of the object.
    ///
    /// Fails only if the object length cannot be determined. Partition
    /// failures are folded in as `0`.
    pub async fn compute_max_tokens_per_line(&self) -> CoreResult<u64> {
        Ok(self.run().await?.max_tokens)
    }

    /// Run the pipeline and return the maximum together with per-partition
    /// diagnostics.
    ///
    /// Every partition gets its own blocking task for the whole dispatch, so
    /// the pool width equals the partition count. That count is capped at
    /// `MAX_NODES`, well below tokio's blocking-thread limit, so all
    /// partitions are in flight at once.
    pub async fn run(&self) -> CoreResult<JobReport> {
        let started = Instant::now();

        let source = Arc::clone(&self.source);
        let object_len = tokio::task::spawn_blocking(move || source.length())
            .await
            .map_err(|e| CoreError::TaskAborted(e.to_string()))??;

        let plan = plan_partitions(object_len, self.config.node_count)?;
        info!(
            object_len,
            partitions = plan.len(),
            "dispatching partitions"
        );

        let worker = PartitionWorker::new(
            Arc::clone(&self.source),
            BoundaryResolver::new(self.config.scan_chunk_size),
        );
        let (tx, mut rx) = mpsc::unbounded_channel::<PartialResult>();

        for partition in &plan {
            let node = partition.node_id()?;
            let partition = *partition;
            let tx = tx.clone();
            let worker = worker.clone();
            let executor = Arc::clone(&self.executor);

            tokio::spawn(async move {
                let task = tokio::task::spawn_blocking(move || {
                    dispatch(&*executor, &worker, node, &partition, object_len)
                });
                let outcome = match task.await {
                    Ok(outcome) => outcome,
                    Err(e) => Err(CoreError::TaskAborted(e.to_string())),
                };
                // The receiver outlives every sender.
                let _ = tx.send(PartialResult {
                    partition,
                    node,
                    outcome,
                });
            });
        }
        drop(tx);

        let mut aggregator = Aggregator::new(plan.len());
        while let Some(result) = rx.recv().await {
            debug!(
                partition = result.partition.index,
                received = aggregator.received() + 1,
                "partial result"
            );
            aggregator.record(result);
        }
        let (max_tokens, partitions) = aggregator.finish();

        let report = JobReport {
            max_tokens,
            object_len,
            node_count: self.config.node_count,
            partitions,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            max_tokens,
            failed = report.failed(),
            elapsed_ms = report.elapsed_ms,
            "job finished"
        );
        Ok(report)
    }
}

/// Ship one partition's unit of work to its node and wait for the answer.
fn dispatch<S, X>(
    executor: &X,
    worker: &PartitionWorker<S>,
    node: NodeId,
    partition: &Partition,
    object_len: u64,
) -> CoreResult<u64>
where
    S: ByteSource + ?Sized,
    X: RemoteExecutor,
{
    executor
        .run(node, || {
            worker
                .process(node, partition, object_len)
                .map_err(WorkError::from)
        })
        .map_err(CoreError::from)
}
