mod flag;
mod run;
mod state;

pub use flag::CompletionFlag;
pub use run::{SyncReport, SyncWorkflow};
pub use state::{RunState, SyncPhase};
