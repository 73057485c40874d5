use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "esback")]
#[command(about = "Elasticsearch snapshot backups with retention", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (default: platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a full backup pass: health check, snapshot, retention
    Run {
        /// Snapshot name prefix (default from config: elasticbackup)
        #[arg(long)]
        prefix: Option<String>,

        /// Number of prefixed snapshots to keep
        #[arg(long)]
        retain: Option<usize>,

        /// Cluster base URL
        #[arg(long)]
        cluster_url: Option<String>,
    },

    /// List snapshots in the configured repository
    Snapshots,

    /// Apply retention without taking a new snapshot
    Prune {
        /// Number of prefixed snapshots to keep
        #[arg(long)]
        retain: Option<usize>,
    },
}
