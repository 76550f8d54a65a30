use std::collections::HashSet;
use std::fmt;

use crate::mapping::{CaseId, CaseResultRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    RunCreating,
    RunCreated,
    Mapping,
    Persisting,
    Synchronized,
    Failed,
}

impl SyncPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, SyncPhase::Synchronized | SyncPhase::Failed)
    }
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SyncPhase::Idle => "idle",
            SyncPhase::RunCreating => "run_creating",
            SyncPhase::RunCreated => "run_created",
            SyncPhase::Mapping => "mapping",
            SyncPhase::Persisting => "persisting",
            SyncPhase::Synchronized => "synchronized",
            SyncPhase::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// What the workflow has learned about the remote run so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    pub remote_run_id: Option<u64>,
    pub remote_run_name: Option<String>,
    pub known_case_ids: HashSet<CaseId>,
    pub accumulated_results: Vec<CaseResultRecord>,
}
