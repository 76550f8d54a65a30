use async_trait::async_trait;

use super::types::{AddRunRequest, CreatedRun, RunTest};
use crate::errors::RemoteError;
use crate::mapping::ResultsDocument;

/// Request/response contract of the case-management service.
#[async_trait]
pub trait RemoteRunClient: Send + Sync {
    /// Creates a run inside `project_id`, scoped by the suite in `req`.
    async fn add_run(&self, project_id: u64, req: &AddRunRequest)
        -> Result<CreatedRun, RemoteError>;

    /// Tests bound to a run; their case ids are the only ones results may reference.
    async fn get_tests(&self, run_id: u64) -> Result<Vec<RunTest>, RemoteError>;

    /// Posts results for a run. The sync workflow itself never calls this.
    async fn add_results_for_cases(
        &self,
        run_id: u64,
        results: &ResultsDocument,
    ) -> Result<(), RemoteError>;
}
