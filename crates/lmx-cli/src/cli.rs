use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lmx",
    about = "LineMax — maximum tokens per line, computed across partitioned nodes",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the maximum tokens per line of a file
    Count(CountArgs),
    /// Run against the built-in sample document
    Demo(DemoArgs),
    /// Show how an object of the given length would be partitioned
    Plan(PlanArgs),
}

/// Knobs shared by every command that runs a job.
#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    /// Number of partitions (and nodes), 1 to 100
    #[arg(short, long)]
    pub nodes: Option<u32>,
    /// Bytes read per step while resolving partition boundaries
    #[arg(long)]
    pub chunk_size: Option<usize>,
    /// Simulated node startup latency in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,
    /// Simulated store round-trip in milliseconds (demo source only)
    #[arg(long)]
    pub store_latency_ms: Option<u64>,
    /// TOML file with [job], [executor] and [store] tables
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct CountArgs {
    pub path: PathBuf,
    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Args)]
pub struct DemoArgs {
    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Args)]
pub struct PlanArgs {
    /// Object length in bytes
    pub length: u64,
    #[arg(short, long, default_value = "100")]
    pub nodes: u32,
}
