use std::collections::HashSet;

use super::matcher::{IdentifierMatcher, TitleMatch};
use super::record::{CaseId, CaseResultRecord, CaseStatus};
use crate::errors::MappingError;
use crate::outcome::{TestContainer, TestOutcome};

/// A test left out of the result set, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleMiss {
    NoMatch { title: String },
    Malformed { title: String, fragment: String },
    UnknownCase { title: String, case_id: CaseId },
}

impl TitleMiss {
    pub fn title(&self) -> &str {
        match self {
            TitleMiss::NoMatch { title }
            | TitleMiss::Malformed { title, .. }
            | TitleMiss::UnknownCase { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedNode {
    pub records: Vec<CaseResultRecord>,
    pub misses: Vec<TitleMiss>,
}

/// Turns runner results into case result records for the known case set.
#[derive(Debug, Clone)]
pub struct ResultMapper {
    matcher: IdentifierMatcher,
}

impl ResultMapper {
    pub fn new(matcher: IdentifierMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &IdentifierMatcher {
        &self.matcher
    }

    /// Pure with respect to its inputs; misses are returned and logged, an
    /// unknown runner state aborts the whole node.
    pub fn map_node<N: TestContainer + ?Sized>(
        &self,
        node: &N,
        known: &HashSet<CaseId>,
    ) -> Result<MappedNode, MappingError> {
        let mut out = MappedNode::default();
        for test in node.tests() {
            match self.map_test(test, known)? {
                Ok(record) => out.records.push(record),
                Err(miss) => {
                    tracing::warn!(
                        target: "railsync.mapper",
                        suite = node.label(),
                        title = miss.title(),
                        reason = ?miss,
                        "Unable to match case_id pattern in test title"
                    );
                    out.misses.push(miss);
                }
            }
        }
        Ok(out)
    }

    fn map_test(
        &self,
        test: &TestOutcome,
        known: &HashSet<CaseId>,
    ) -> Result<Result<CaseResultRecord, TitleMiss>, MappingError> {
        let case_id = match self.matcher.extract(&test.title) {
            TitleMatch::Case(id) => id,
            TitleMatch::NoMatch => {
                return Ok(Err(TitleMiss::NoMatch {
                    title: test.title.clone(),
                }))
            }
            TitleMatch::Malformed(fragment) => {
                return Ok(Err(TitleMiss::Malformed {
                    title: test.title.clone(),
                    fragment,
                }))
            }
        };
        if !known.contains(&case_id) {
            return Ok(Err(TitleMiss::UnknownCase {
                title: test.title.clone(),
                case_id,
            }));
        }

        let status_id =
            CaseStatus::from_runner_state(&test.state).ok_or_else(|| MappingError::UnknownStatus {
                title: test.title.clone(),
                state: test.state.clone(),
            })?;

        let comment = match status_id {
            CaseStatus::Failed => Some(test.failure_message().unwrap_or_default().to_string()),
            _ => None,
        };

        Ok(Ok(CaseResultRecord {
            case_id,
            elapsed: elapsed_millis(test.duration),
            status_id,
            comment,
        }))
    }
}

fn elapsed_millis(duration: f64) -> u64 {
    if duration.is_finite() && duration > 0.0 {
        duration.round() as u64
    } else {
        0
    }
}
