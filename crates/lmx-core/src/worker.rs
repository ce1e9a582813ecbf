use std::io::Read;
use std::sync::Arc;

use lmx_store::ByteSource;
use lmx_types::{NodeId, Partition};
use tracing::{debug, warn};

use crate::boundary::BoundaryResolver;
use crate::error::{CoreError, CoreResult};
use crate::tokens::max_tokens_per_line;

/// Computes the local maximum for one partition.
///
/// This is the body of the unit of work shipped to a node. It owns nothing
/// but a handle to the byte source, so it is cheap to clone into every
/// dispatch.
pub struct PartitionWorker<S: ?Sized> {
    source: Arc<S>,
    resolver: BoundaryResolver,
}

impl<S: ?Sized> Clone for PartitionWorker<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            resolver: self.resolver,
        }
    }
}

impl<S: ByteSource + ?Sized> PartitionWorker<S> {
    pub fn new(source: Arc<S>, resolver: BoundaryResolver) -> Self {
        Self { source, resolver }
    }

    /// Scan `partition` and return the largest token count on any line
    /// inside its corrected span.
    ///
    /// A failed boundary scan is soft: the partition contributes `0`. A
    /// failed read of the corrected span is returned as an error.
    pub fn process(&self, node: NodeId, partition: &Partition, total_length: u64) -> CoreResult<u64> {
        let start = partition.start;
        let read_start = if !partition.is_first() && start > 0 && start < total_length {
            match self.resolver.resolve(&*self.source, start, total_length) {
                Ok(offset) => offset,
                Err(error) => {
                    warn!(%node, partition = partition.index, start, %error,
                        "boundary resolution failed, partition contributes nothing");
                    return Ok(0);
                }
            }
        } else {
            start
        };

        let read_end = partition.end.min(total_length);
        if read_end <= read_start {
            debug!(%node, partition = partition.index, read_start, read_end,
                "corrected span is empty");
            return Ok(0);
        }
        let bytes_to_read = read_end - read_start;

        let span = self.read_span(read_start, bytes_to_read)?;
        let max_tokens = max_tokens_per_line(&span);
        debug!(%node, partition = partition.index, read_start, bytes_to_read, max_tokens,
            "partition scanned");
        Ok(max_tokens)
    }

    fn read_span(&self, offset: u64, len: u64) -> CoreResult<Vec<u8>> {
        let stream = self.source.open_stream(offset)?;
        let mut span = Vec::with_capacity(usize::try_from(len).unwrap_or(0));
        stream.take(len).read_to_end(&mut span)?;

        let actual = span.len() as u64;
        if actual != len {
            return Err(CoreError::ShortRead {
                offset,
                expected: len,
                actual,
            });
        }
        Ok(span)
    }
}
