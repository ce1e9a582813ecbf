//! Byte-range storage for LineMax.
//!
//! The core never loads an object in full. It asks a [`ByteSource`] for the
//! total length once, then opens independent streams at arbitrary offsets,
//! one or two per partition.
//!
//! # Storage Backends
//!
//! All backends implement the [`ByteSource`] trait:
//!
//! - [`InMemoryByteSource`] -- shared buffer for tests, demos and embedding,
//!   with optional simulated round-trip latency
//! - [`FileByteSource`] -- a file on the local filesystem
//!
//! # Design Rules
//!
//! 1. Objects are immutable for the duration of a run.
//! 2. Streams are independent: opening one never disturbs another.
//! 3. Concurrent reads are always safe.
//! 4. All I/O errors are propagated; the caller decides what is soft.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use file::FileByteSource;
pub use memory::InMemoryByteSource;
pub use traits::{ByteSource, ByteStream};
