use thiserror::Error;

/// Errors raised while building a removal set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("removal set entry {index} is empty")]
    EmptyEntry { index: usize },
    #[error("removal set entry {0:?} appears more than once")]
    DuplicateEntry(String),
}
