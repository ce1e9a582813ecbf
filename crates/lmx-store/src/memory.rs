use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{StoreError, StoreResult};
use crate::traits::{ByteSource, ByteStream};

/// In-memory byte object.
///
/// Intended for tests, demos and embedding. The buffer is shared behind an
/// `Arc`, so every stream is a cheap cursor over the same bytes. An optional
/// latency is slept on every call to stand in for a remote store's
/// round-trip.
#[derive(Clone)]
pub struct InMemoryByteSource {
    data: Arc<[u8]>,
    latency: Duration,
}

impl InMemoryByteSource {
    /// Create a source over the given bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Arc::from(data.into()),
            latency: Duration::ZERO,
        }
    }

    /// Sleep for `latency` on every `length` and `open_stream` call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The full contents, for building expectations in tests.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }
}

impl ByteSource for InMemoryByteSource {
    fn length(&self) -> StoreResult<u64> {
        self.simulate_round_trip();
        Ok(self.data.len() as u64)
    }

    fn open_stream(&self, offset: u64) -> StoreResult<ByteStream> {
        self.simulate_round_trip();
        let length = self.data.len() as u64;
        if offset > length {
            return Err(StoreError::OffsetOutOfRange { offset, length });
        }
        let mut cursor = Cursor::new(Arc::clone(&self.data));
        cursor.set_position(offset);
        Ok(Box::new(cursor))
    }
}

impl std::fmt::Debug for InMemoryByteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryByteSource")
            .field("len", &self.data.len())
            .field("latency", &self.latency)
            .finish()
    }
}
