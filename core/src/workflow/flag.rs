use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "nothing more to do" signal the host polls before exiting.
///
/// It is raised on success and on failure alike; the two are told apart only
/// by the result of [`super::SyncWorkflow::on_run_ended`].
#[derive(Debug, Clone, Default)]
pub struct CompletionFlag(Arc<AtomicBool>);

impl CompletionFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub(crate) fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}
