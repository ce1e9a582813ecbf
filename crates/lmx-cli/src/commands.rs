use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use lmx_core::{max_tokens_per_line, plan_partitions, JobConfig, LineMaxJob};
use lmx_exec::{ExecutorConfig, LocalExecutor};
use lmx_store::{ByteSource, FileByteSource, InMemoryByteSource};
use lmx_types::{JobReport, PartitionOutcome};

use crate::cli::*;
use crate::config::{CliConfig, StoreConfig};

/// Five-line document used by `lmx demo`. Its longest line has 11 tokens.
pub const SAMPLE_DOCUMENT: &str = "word1 word2 word3\n\
    a b c d e f g h\n\
    This line is cut here and spans to the next part.\n\
    part 2 starts here, but the previous line was partial. \n\
    The very end line has only a few words left.";

const DEMO_NODES: u32 = 4;

/// Round-trip and startup latency the demo pays by default, so its timing
/// resembles a remote store and remote nodes.
const DEMO_LATENCY_MS: u64 = 100;

fn demo_defaults() -> CliConfig {
    CliConfig {
        job: JobConfig::with_nodes(DEMO_NODES),
        executor: ExecutorConfig {
            startup_latency_ms: DEMO_LATENCY_MS,
            ..Default::default()
        },
        store: StoreConfig {
            latency_ms: DEMO_LATENCY_MS,
        },
    }
}

fn demo_source(config: &StoreConfig) -> InMemoryByteSource {
    InMemoryByteSource::new(SAMPLE_DOCUMENT).with_latency(Duration::from_millis(config.latency_ms))
}

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Count(args) => cmd_count(args, format).await,
        Command::Demo(args) => cmd_demo(args, format).await,
        Command::Plan(args) => cmd_plan(args, format),
    }
}

async fn run_job<S>(source: Arc<S>, config: CliConfig) -> anyhow::Result<JobReport>
where
    S: ByteSource + 'static,
{
    let executor = Arc::new(LocalExecutor::new(config.executor)?);
    let job = LineMaxJob::new(source, executor, config.job)?;
    Ok(job.run().await?)
}

async fn cmd_count(args: CountArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = CliConfig::resolve(&args.run, CliConfig::default())?;
    let source = Arc::new(FileByteSource::new(&args.path));
    let report = run_job(source, config).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("{}", args.path.display().to_string().bold());
            print_report(&report);
        }
    }
    Ok(())
}

async fn cmd_demo(args: DemoArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = CliConfig::resolve(&args.run, demo_defaults())?;
    let source = Arc::new(demo_source(&config.store));
    let exact = max_tokens_per_line(source.as_bytes());
    let report = run_job(source, config).await?;

    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({ "exact_max_tokens": exact, "report": report });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!("{}", "Sample document".bold());
            for line in SAMPLE_DOCUMENT.lines() {
                println!("  {}", line.dimmed());
            }
            println!();
            print_report(&report);
            println!("Single-pass maximum: {}", exact.to_string().bold());
            if report.max_tokens < exact {
                println!(
                    "{} a line longer than the partitioned result straddles a cut",
                    "note:".yellow()
                );
            }
        }
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs, format: OutputFormat) -> anyhow::Result<()> {
    let plan = plan_partitions(args.length, args.nodes)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Text => {
            for partition in &plan {
                let marker = if partition.is_empty() {
                    "empty".dimmed()
                } else {
                    format!("{} bytes", partition.len()).normal()
                };
                println!(
                    "{}  {:>4}  {}  {}",
                    partition.node_id()?.to_string().cyan(),
                    partition.index,
                    format!("[{}, {})", partition.start, partition.end).yellow(),
                    marker
                );
            }
        }
    }
    Ok(())
}

fn print_report(report: &JobReport) {
    println!(
        "Maximum tokens per line: {}",
        report.max_tokens.to_string().green().bold()
    );
    println!(
        "  {} bytes across {} partitions, {} ms",
        report.object_len, report.node_count, report.elapsed_ms
    );
    if report.failed() == 0 {
        println!("  {} all partitions completed", "✓".green());
        return;
    }
    println!(
        "  {} {} of {} partitions failed and contributed nothing",
        "✗".red(),
        report.failed(),
        report.partitions.len()
    );
    for failed in report.failures() {
        if let PartitionOutcome::Failed { reason } = &failed.outcome {
            println!("    {} {}: {}", failed.node.to_string().cyan(), failed.partition, reason);
        }
    }
}
