use crate::domain::ids::ContactId;
use crate::domain::number::ContactNumber;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// List kind of a screening rule contact.
///
/// Stored as an integer; value 1 is reserved for a block-list kind that
/// never shipped, and unknown values decode as `Unclassified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Unclassified,
    WhiteList,
}

impl ContactKind {
    pub fn as_i64(self) -> i64 {
        match self {
            ContactKind::Unclassified => 0,
            ContactKind::WhiteList => 2,
        }
    }

    pub fn from_i64(value: i64) -> Self {
        match value {
            2 => ContactKind::WhiteList,
            _ => ContactKind::Unclassified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub kind: ContactKind,
    pub numbers: Vec<ContactNumber>,
}

impl Contact {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(())
    }
}
