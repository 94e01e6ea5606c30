use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
};

use helium_exec::{
    storage::{StorageError, StorageResult, StorageService},
    txn::{TransactionId, TxnError},
    types::Row,
};

/// Storage double whose n-th delete request (0-based) fails or aborts.
#[allow(dead_code)]
#[derive(Default)]
pub struct FlakyStorage {
    fail_at: HashSet<usize>,
    abort_at: HashSet<usize>,
    calls: Cell<usize>,
    deleted: RefCell<Vec<Row>>,
}

#[allow(dead_code)]
impl FlakyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(mut self, calls: impl IntoIterator<Item = usize>) -> Self {
        self.fail_at.extend(calls);
        self
    }

    pub fn aborting_at(mut self, call: usize) -> Self {
        self.abort_at.insert(call);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn deleted(&self) -> Vec<Row> {
        self.deleted.borrow().clone()
    }
}

impl StorageService for FlakyStorage {
    fn delete_row(&self, txn: TransactionId, row: &Row) -> StorageResult<()> {
        let call = self.calls.get();
        self.calls.set(call + 1);

        if self.abort_at.contains(&call) {
            return Err(TxnError::Aborted {
                txn,
                reason: "injected deadlock".into(),
            }
            .into());
        }
        if self.fail_at.contains(&call) {
            return Err(StorageError::Io {
                message: "injected write failure".into(),
            });
        }

        self.deleted.borrow_mut().push(row.clone());
        Ok(())
    }
}
