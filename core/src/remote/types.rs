use serde::{Deserialize, Serialize};

use crate::mapping::CaseId;

/// Body of the create-run call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRunRequest {
    pub description: String,
    pub name: String,
    pub suite_id: u64,
    pub include_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRun {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// A test entry of a run; only `case_id` matters for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTest {
    pub case_id: CaseId,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
}
