use std::io::Read;

use crate::error::StoreResult;

/// A readable stream of object bytes, running from some offset to the end of
/// the object.
pub type ByteStream = Box<dyn Read + Send>;

/// Read-only access to one immutable byte object.
///
/// All implementations must satisfy these invariants:
/// - `length()` is idempotent and stable for the lifetime of a run.
/// - `open_stream(length())` yields an empty stream; larger offsets are
///   rejected with [`StoreError::OffsetOutOfRange`](crate::StoreError).
/// - Concurrent calls from many workers are always safe; the object is
///   never mutated through this interface.
pub trait ByteSource: Send + Sync {
    /// Total length of the object in bytes.
    fn length(&self) -> StoreResult<u64>;

    /// Open a stream that starts at `offset` and runs to end-of-object.
    fn open_stream(&self, offset: u64) -> StoreResult<ByteStream>;
}

impl<S: ByteSource + ?Sized> ByteSource for std::sync::Arc<S> {
    fn length(&self) -> StoreResult<u64> {
        (**self).length()
    }

    fn open_stream(&self, offset: u64) -> StoreResult<ByteStream> {
        (**self).open_stream(offset)
    }
}
