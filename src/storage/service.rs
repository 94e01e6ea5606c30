use crate::{storage::errors::StorageResult, txn::ids::TransactionId, types::row::Row};

/// What mutating operators need from storage.
///
/// Implementations report a transaction that must abort through
/// `StorageError::Transaction`, which `StorageError::is_abort` recognises.
/// Every other error is a failure of this one request only.
pub trait StorageService {
    /// Removes the stored record `row` was read from, on behalf of `txn`.
    fn delete_row(&self, txn: TransactionId, row: &Row) -> StorageResult<()>;
}
