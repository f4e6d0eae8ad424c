use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name is required")]
    EmptyName,
    #[error("contact number is required")]
    EmptyNumber,
    #[error("unknown match kind: {0}")]
    UnknownMatchKind(i64),
}
