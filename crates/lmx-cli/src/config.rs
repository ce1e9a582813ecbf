use std::path::Path;

use anyhow::Context;
use lmx_core::JobConfig;
use lmx_exec::ExecutorConfig;
use serde::{Deserialize, Serialize};

use crate::cli::RunArgs;

/// Settings for the in-memory source used by `lmx demo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Simulated round-trip paid on every length query and stream open.
    pub latency_ms: u64,
}

/// Effective settings for one command: built-in defaults, then `--config`,
/// then command-line flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub job: JobConfig,
    pub executor: ExecutorConfig,
    pub store: StoreConfig,
}

impl CliConfig {
    /// Layer the TOML file at `path` over `self`. Keys the file leaves out
    /// keep their current value.
    pub fn merge_file(self, path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let overlay: toml::Table =
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;

        let toml::Value::Table(mut base) = toml::Value::try_from(&self)? else {
            anyhow::bail!("config defaults did not serialize to a table");
        };
        merge_tables(&mut base, overlay);
        toml::Value::Table(base)
            .try_into()
            .with_context(|| format!("applying config {}", path.display()))
    }

    /// Resolve the effective configuration for a command whose own defaults
    /// are `defaults`.
    pub fn resolve(args: &RunArgs, defaults: Self) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => defaults.merge_file(path)?,
            None => defaults,
        };
        if let Some(nodes) = args.nodes {
            config.job.node_count = nodes;
            config.executor.node_count = nodes;
        }
        if let Some(chunk) = args.chunk_size {
            config.job.scan_chunk_size = chunk;
        }
        if let Some(ms) = args.latency_ms {
            config.executor.startup_latency_ms = ms;
        }
        if let Some(ms) = args.store_latency_ms {
            config.store.latency_ms = ms;
        }
        Ok(config)
    }
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(over) => {
                if let Some(toml::Value::Table(inner)) = base.get_mut(&key) {
                    merge_tables(inner, over);
                    continue;
                }
                base.insert(key, toml::Value::Table(over));
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn demo_defaults() -> CliConfig {
        CliConfig {
            job: JobConfig::with_nodes(4),
            executor: ExecutorConfig {
                startup_latency_ms: 100,
                ..Default::default()
            },
            store: StoreConfig { latency_ms: 100 },
        }
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = CliConfig::resolve(&RunArgs::default(), demo_defaults()).unwrap();
        assert_eq!(config, demo_defaults());
        assert_eq!(config.executor.node_count, 100);
    }

    #[test]
    fn flags_override_file() {
        let file = config_file(
            "[job]\nnode_count = 8\nscan_chunk_size = 64\n\n[executor]\nstartup_latency_ms = 5",
        );
        let args = RunArgs {
            nodes: Some(16),
            store_latency_ms: Some(0),
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = CliConfig::resolve(&args, demo_defaults()).unwrap();
        assert_eq!(config.job.node_count, 16);
        assert_eq!(config.executor.node_count, 16);
        assert_eq!(config.job.scan_chunk_size, 64);
        assert_eq!(config.executor.startup_latency_ms, 5);
        assert_eq!(config.store.latency_ms, 0);
    }

    #[test]
    fn file_without_node_count_keeps_command_default() {
        let file = config_file("[job]\nscan_chunk_size = 16\n");
        let args = RunArgs {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = CliConfig::resolve(&args, demo_defaults()).unwrap();
        assert_eq!(config.job.node_count, 4);
        assert_eq!(config.job.scan_chunk_size, 16);
        assert_eq!(config.store.latency_ms, 100);
    }

    #[test]
    fn store_table_is_read() {
        let file = config_file("[store]\nlatency_ms = 25\n");
        let args = RunArgs {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = CliConfig::resolve(&args, CliConfig::default()).unwrap();
        assert_eq!(config.store.latency_ms, 25);
        assert_eq!(config.job.node_count, 100);
    }

    #[test]
    fn malformed_value_reports_path() {
        let file = config_file("[job]\nnode_count = \"many\"\n");
        let args = RunArgs {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = CliConfig::resolve(&args, CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("applying config"));
    }

    #[test]
    fn missing_file_reports_path() {
        let args = RunArgs {
            config: Some("/nonexistent/lmx.toml".into()),
            ..Default::default()
        };
        let err = CliConfig::resolve(&args, CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lmx.toml"));
    }
}
