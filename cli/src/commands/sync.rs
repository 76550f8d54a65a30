use std::io::Read;
use std::path::Path;

use railsync_core::api::{self as core_api, HostEvent, SyncError};

use crate::commands::cli::SyncArgs;
use crate::error::CliError;

pub async fn handle_sync(args: SyncArgs, config: Option<&Path>) -> Result<i32, CliError> {
    let mut cfg = match config {
        Some(p) => core_api::load(Some(p))?,
        None => core_api::load_default()?,
    };
    if let Some(dir) = args.results_dir {
        cfg.results_dir = dir;
    }

    let mut workflow = railsync_plugins::build_workflow(cfg)?;
    let raw = read_events(&args.events)?;
    let events = parse_events(&raw)?;
    tracing::debug!(events = events.len(), "runner notifications loaded");

    match core_api::replay(&mut workflow, events).await {
        Ok(report) => {
            tracing::info!(
                run_id = report.run_id,
                run_name = %report.run_name,
                recorded = report.recorded,
                excluded = report.excluded,
                "sync complete"
            );
            Ok(0)
        }
        Err(err) => {
            // Workflow failures are already logged by the workflow itself.
            if matches!(err, SyncError::NoRunEnded | SyncError::AlreadyCompleted) {
                tracing::error!(error = %err, "results were not synced");
            }
            Ok(err.exit_code())
        }
    }
}

fn read_events(path: &Path) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(read_err)
}

fn parse_events(raw: &str) -> Result<Vec<HostEvent>, CliError> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<HostEvent>(line).map_err(|source| CliError::Event {
                line: i + 1,
                source,
            })
        })
        .collect()
}
