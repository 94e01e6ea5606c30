use std::sync::Arc;

use crate::{
    db_debug,
    debugger::Component,
    storage::{buffer::BufferPool, errors::StorageResult},
    txn::ids::TransactionId,
};

/// Begins and finishes transactions against a buffer pool.
///
/// The pool owns the set of running transactions, so storage calls made
/// after `commit` or `abort` are refused there.
pub struct TransactionManager {
    pool: Arc<BufferPool>,
}

impl TransactionManager {
    pub fn new(pool: Arc<BufferPool>) -> Self {
        Self { pool }
    }

    pub fn begin(&self) -> TransactionId {
        let txn = self.pool.begin_transaction();
        db_debug!(Component::Txn, "begin {}", txn);
        txn
    }

    pub fn is_active(&self, txn: TransactionId) -> bool {
        self.pool.is_active(txn)
    }

    /// Makes the transaction's mutations permanent and releases its locks.
    pub fn commit(&self, txn: TransactionId) -> StorageResult<()> {
        self.finish(txn, true)
    }

    /// Rolls back the transaction's mutations and releases its locks.
    pub fn abort(&self, txn: TransactionId) -> StorageResult<()> {
        self.finish(txn, false)
    }

    fn finish(&self, txn: TransactionId, commit: bool) -> StorageResult<()> {
        db_debug!(
            Component::Txn,
            "{} {}",
            if commit { "commit" } else { "abort" },
            txn
        );
        self.pool.transaction_complete(txn, commit)
    }
}
