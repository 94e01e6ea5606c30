use thiserror::Error;

use crate::storage::errors::StorageError;

pub type ExecResult<T> = Result<T, ExecutionError>;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ExecutionError {
    /// Lifecycle misuse: open twice, pull while closed.
    #[error("{operator}: illegal state: {reason}")]
    IllegalState {
        operator: &'static str,
        reason: &'static str,
    },

    /// `next_row` called with nothing left to return.
    #[error("{operator}: no more rows")]
    NoSuchElement { operator: &'static str },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ExecutionError {
    /// True when the underlying transaction must abort.
    pub fn is_abort(&self) -> bool {
        matches!(self, ExecutionError::Storage(e) if e.is_abort())
    }
}
