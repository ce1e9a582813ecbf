//! Execution port for LineMax.
//!
//! A [`RemoteExecutor`] runs a zero-argument unit of work on a numbered node
//! and hands back its result. The core dispatches one unit of work per
//! partition, one partition per node.
//!
//! - [`LocalExecutor`] -- in-process stand-in with node-range validation and
//!   optional simulated startup latency

pub mod config;
pub mod error;
pub mod local;
pub mod traits;

pub use config::ExecutorConfig;
pub use error::{ExecError, ExecResult, WorkError};
pub use local::LocalExecutor;
pub use traits::RemoteExecutor;
