use crate::domain::ids::{ContactId, ContactNumberId};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// How a stored number pattern is compared against an incoming number.
///
/// The stored value is always the pattern; the incoming number is the
/// candidate being tested against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
}

impl MatchKind {
    pub fn as_i64(self) -> i64 {
        match self {
            MatchKind::Equals => 0,
            MatchKind::Contains => 1,
            MatchKind::StartsWith => 2,
            MatchKind::EndsWith => 3,
        }
    }

    pub fn from_i64(value: i64) -> Result<Self, CoreError> {
        match value {
            0 => Ok(MatchKind::Equals),
            1 => Ok(MatchKind::Contains),
            2 => Ok(MatchKind::StartsWith),
            3 => Ok(MatchKind::EndsWith),
            other => Err(CoreError::UnknownMatchKind(other)),
        }
    }

    pub fn matches(self, pattern: &str, candidate: &str) -> bool {
        match self {
            MatchKind::Equals => candidate == pattern,
            MatchKind::Contains => candidate.contains(pattern),
            MatchKind::StartsWith => candidate.starts_with(pattern),
            MatchKind::EndsWith => candidate.ends_with(pattern),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNumber {
    pub id: ContactNumberId,
    pub number: String,
    pub kind: MatchKind,
    pub contact_id: ContactId,
}
