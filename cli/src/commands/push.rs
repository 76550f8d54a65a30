use std::path::Path;

use railsync_core::api::{self as core_api, RemoteStep, ResultsDocument, SyncError};

use crate::commands::cli::PushArgs;
use crate::error::CliError;

/// Submits a results file written by an earlier `sync`.
pub async fn handle_push(args: PushArgs, config: Option<&Path>) -> Result<(), CliError> {
    let cfg = match config {
        Some(p) => core_api::load(Some(p))?,
        None => core_api::load_default()?,
    };
    cfg.validate()?;

    let doc = read_results(&args.results)?;
    let client = railsync_plugins::build_client(&cfg)?;
    client
        .add_results_for_cases(args.run_id, &doc)
        .await
        .map_err(|e| SyncError::remote(RemoteStep::SubmitResults, e))?;

    tracing::info!(
        run_id = args.run_id,
        results = doc.results.len(),
        "run has been updated successfully"
    );
    Ok(())
}

fn read_results(path: &Path) -> Result<ResultsDocument, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Results {
        path: path.to_path_buf(),
        source,
    })
}
