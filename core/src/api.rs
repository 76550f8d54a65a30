//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `railsync_core::api` instead of reaching into internal modules.

pub use crate::config::{load, load_default, RunTarget, SyncConfig};
pub use crate::errors::{
    ConfigError, MappingError, PersistError, RemoteError, RemoteStep, SyncError,
};
pub use crate::host::{replay, HostEvent};
pub use crate::mapping::{
    CaseId, CaseResultRecord, CaseStatus, IdentifierMatcher, ResultMapper, ResultsDocument,
    TitleMatch,
};
pub use crate::outcome::{OutcomeTree, RunSummary, SuiteFragment, SuiteOutcome, TestOutcome};
pub use crate::remote::{routes, AddRunRequest, CreatedRun, RemoteRunClient, RunTest};
pub use crate::sink::{FileResultsSink, ResultsSink};
pub use crate::workflow::{CompletionFlag, RunState, SyncPhase, SyncReport, SyncWorkflow};
