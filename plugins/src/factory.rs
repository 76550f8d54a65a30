//! Builds the concrete services a [`SyncWorkflow`] runs on from configuration.
use std::sync::Arc;

use railsync_core::api::{
    FileResultsSink, RemoteRunClient, ResultsSink, SyncConfig, SyncError,
    SyncWorkflow,
};

use crate::http::HttpRunClient;

pub fn build_client(cfg: &SyncConfig) -> Result<Arc<dyn RemoteRunClient>, SyncError> {
    let client = HttpRunClient::from_config(cfg).map_err(SyncError::ClientSetup)?;
    Ok(Arc::new(client))
}

pub fn build_sink(cfg: &SyncConfig) -> Arc<dyn ResultsSink> {
    Arc::new(FileResultsSink::new(&cfg.results_dir))
}

/// Validates the configuration before anything touches the network.
pub fn build_workflow(cfg: SyncConfig) -> Result<SyncWorkflow, SyncError> {
    cfg.validate()?;
    let client = build_client(&cfg)?;
    let sink = build_sink(&cfg);
    Ok(SyncWorkflow::new(cfg, client, sink)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use railsync_core::api::{ConfigError, SyncPhase};

    #[test]
    fn incomplete_config_never_builds_a_workflow() {
        let err = build_workflow(SyncConfig::default()).err().unwrap();
        assert!(matches!(err, SyncError::Config(ConfigError::MissingFields(_))));
    }

    #[test]
    fn complete_config_builds_idle_workflow() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cfg = SyncConfig {
            base_url: "acme.testrail.io".into(),
            project_id: Some(1),
            suite_id: Some(2),
            username: "ci".into(),
            password: "pw".into(),
            results_dir: tmp.path().display().to_string(),
            ..SyncConfig::default()
        };
        let wf = build_workflow(cfg).unwrap();
        assert_eq!(wf.phase(), SyncPhase::Idle);
        assert!(!wf.is_synchronized());
    }
}
