//! Foundation types for LineMax.
//!
//! LineMax finds the largest number of whitespace-delimited tokens on any
//! single line of a large text object by cutting it into byte-range
//! partitions, scanning each partition on its own node, and folding the
//! partial maxima. Every other `lmx` crate depends on `lmx-types`.
//!
//! # Key Types
//!
//! - [`Partition`] — One contiguous byte range of the object
//! - [`NodeId`] — Identifier of a remote execution node, in `[1, MAX_NODES]`
//! - [`PartitionOutcome`] — What one partition contributed to the fold
//! - [`JobReport`] — Aggregated result of a whole run, with diagnostics

pub mod error;
pub mod node;
pub mod partition;
pub mod report;

pub use error::TypeError;
pub use node::{NodeId, MAX_NODES};
pub use partition::Partition;
pub use report::{JobReport, PartitionOutcome, PartitionReport};
