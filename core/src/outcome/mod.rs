mod summary;
mod tree;

pub use summary::RunSummary;
pub use tree::{OutcomeTree, SuiteFragment, SuiteOutcome, TestContainer, TestError, TestOutcome};
