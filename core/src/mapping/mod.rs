mod mapper;
mod matcher;
mod record;

pub use mapper::{MappedNode, ResultMapper, TitleMiss};
pub use matcher::{IdentifierMatcher, TitleMatch};
pub use record::{CaseId, CaseResultRecord, CaseStatus, ResultsDocument};
