use regex::Regex;

use super::record::CaseId;
use crate::errors::ConfigError;

/// Outcome of looking for a case identifier in a test title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleMatch {
    Case(CaseId),
    NoMatch,
    /// The pattern matched but the remainder after the marker is not a number.
    Malformed(String),
}

impl TitleMatch {
    pub fn case_id(&self) -> Option<CaseId> {
        match self {
            TitleMatch::Case(id) => Some(*id),
            _ => None,
        }
    }
}

/// Pulls a case identifier such as `#123456` out of a free-form test title.
#[derive(Debug, Clone)]
pub struct IdentifierMatcher {
    pattern: Regex,
}

impl IdentifierMatcher {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern).map_err(|source| ConfigError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Only the first occurrence counts. A leading non-digit marker is dropped
    /// before the remainder is parsed.
    pub fn extract(&self, title: &str) -> TitleMatch {
        let Some(m) = self.pattern.find(title) else {
            return TitleMatch::NoMatch;
        };
        let fragment = m.as_str();
        let digits = match fragment.chars().next() {
            Some(c) if !c.is_ascii_digit() => &fragment[c.len_utf8()..],
            _ => fragment,
        };
        match digits.parse::<CaseId>() {
            Ok(id) => TitleMatch::Case(id),
            Err(_) => TitleMatch::Malformed(fragment.to_string()),
        }
    }
}
