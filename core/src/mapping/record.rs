use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type CaseId = u64;

/// Result status understood by the case-management service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStatus {
    Passed,
    Skipped,
    Failed,
}

impl CaseStatus {
    pub fn code(self) -> u8 {
        match self {
            CaseStatus::Passed => 1,
            CaseStatus::Skipped => 3,
            CaseStatus::Failed => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(CaseStatus::Passed),
            3 => Some(CaseStatus::Skipped),
            5 => Some(CaseStatus::Failed),
            _ => None,
        }
    }

    /// Maps a runner state; `None` for anything outside the closed set.
    pub fn from_runner_state(state: &str) -> Option<Self> {
        match state {
            "passed" => Some(CaseStatus::Passed),
            "failed" => Some(CaseStatus::Failed),
            "skipped" => Some(CaseStatus::Skipped),
            _ => None,
        }
    }
}

impl Serialize for CaseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for CaseStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        CaseStatus::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown status_id: {code}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResultRecord {
    pub case_id: CaseId,
    pub elapsed: u64,
    pub status_id: CaseStatus,
    /// Set only for failed results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body persisted to disk and accepted by the add-results route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsDocument {
    pub results: Vec<CaseResultRecord>,
}
