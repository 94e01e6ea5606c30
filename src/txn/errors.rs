use thiserror::Error;

use crate::txn::ids::TransactionId;

pub type TxnResult<T> = Result<T, TxnError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TxnError {
    /// The transaction must abort; callers propagate this without retrying.
    #[error("{txn} aborted: {reason}")]
    Aborted { txn: TransactionId, reason: String },

    #[error("{0} is not active")]
    NotActive(TransactionId),
}

impl TxnError {
    pub fn is_abort(&self) -> bool {
        matches!(self, TxnError::Aborted { .. })
    }
}
