use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use crate::{
    db_trace,
    debugger::Component,
    storage::page::RecordId,
    txn::{
        errors::{TxnError, TxnResult},
        ids::TransactionId,
    },
};

/// Exclusive row locks with a no-wait policy.
///
/// A request for a lock held by another transaction fails immediately with
/// `TxnError::Aborted` instead of blocking, so lock waits can never deadlock.
#[derive(Default)]
pub struct LockManager {
    table: Mutex<LockTable>,
}

#[derive(Default)]
struct LockTable {
    holders: HashMap<RecordId, TransactionId>,
    held: HashMap<TransactionId, HashSet<RecordId>>,
}

impl LockManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire_exclusive(&self, txn: TransactionId, rid: RecordId) -> TxnResult<()> {
        let mut table = self.table.lock();

        match table.holders.get(&rid) {
            Some(holder) if *holder == txn => Ok(()),
            Some(holder) => Err(TxnError::Aborted {
                txn,
                reason: format!("{rid} is locked by {holder}"),
            }),
            None => {
                table.holders.insert(rid, txn);
                table.held.entry(txn).or_default().insert(rid);
                db_trace!(Component::Txn, "{} locked {}", txn, rid);
                Ok(())
            }
        }
    }

    pub fn holds(&self, txn: TransactionId, rid: RecordId) -> bool {
        self.table.lock().holders.get(&rid) == Some(&txn)
    }

    /// Releases every lock `txn` holds. Returns how many were released.
    pub fn release_all(&self, txn: TransactionId) -> usize {
        let mut table = self.table.lock();
        let Some(rids) = table.held.remove(&txn) else {
            return 0;
        };

        for rid in &rids {
            table.holders.remove(rid);
        }
        db_trace!(Component::Txn, "{} released {} locks", txn, rids.len());
        rids.len()
    }
}
