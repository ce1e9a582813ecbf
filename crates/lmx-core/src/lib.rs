//! Partitioned max-tokens-per-line engine.
//!
//! Given a [`ByteSource`](lmx_store::ByteSource) and a
//! [`RemoteExecutor`](lmx_exec::RemoteExecutor), a [`LineMaxJob`] finds the
//! largest number of whitespace-delimited tokens on any single line of the
//! object without ever holding more than one partition's bytes per worker.
//!
//! # Pipeline
//!
//! 1. Query the object length once.
//! 2. [`plan_partitions`] cuts `[0, length)` into one range per node.
//! 3. Each range becomes a unit of work dispatched on its own pool slot.
//!    Inside it, the [`BoundaryResolver`] moves the start of every partition
//!    but the first past the line fragment the previous partition owns, and
//!    the [`PartitionWorker`] scans the corrected span.
//! 4. The [`Aggregator`] folds every partial result with `max`.
//!
//! # Failure policy
//!
//! Only a failed length query fails the run. A failed boundary scan makes
//! its partition contribute `0`; a failed read, a rejected node or a
//! panicking unit of work is recorded in the [`JobReport`](lmx_types::JobReport)
//! and folded in as `0`.
//!
//! # Known limitation
//!
//! A line that straddles a cut is counted only from the bytes inside the
//! partition where it starts, and the next partition skips it entirely. The
//! result can therefore undercount when the longest line crosses a cut; it
//! never overcounts.

pub mod aggregate;
pub mod boundary;
pub mod config;
pub mod error;
pub mod job;
pub mod planner;
pub mod tokens;
pub mod worker;

pub use aggregate::{Aggregator, PartialResult};
pub use boundary::BoundaryResolver;
pub use config::{JobConfig, DEFAULT_SCAN_CHUNK_SIZE};
pub use error::{CoreError, CoreResult};
pub use job::LineMaxJob;
pub use planner::plan_partitions;
pub use tokens::{count_tokens, max_tokens_per_line};
pub use worker::PartitionWorker;
