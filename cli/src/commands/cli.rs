use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Sync test runner results into a case-management run")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML config file (defaults to ./railsync.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to `<dir>/railsync.log` instead of stderr.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SyncArgs {
    /// JSON-lines runner notifications (`suite_end` / `runner_end`); `-` reads stdin.
    #[arg(long)]
    pub events: PathBuf,

    /// Overrides `results_dir` from the config.
    #[arg(long)]
    pub results_dir: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct PushArgs {
    /// Run that receives the results.
    #[arg(long)]
    pub run_id: u64,

    /// Results file previously written by `sync`.
    #[arg(long)]
    pub results: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a run, map runner results onto its cases and save them.
    Sync(SyncArgs),
    /// Submit a saved results file to an existing run.
    Push(PushArgs),
}
