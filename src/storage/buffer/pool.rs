use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use crate::{
    config::EngineConfig,
    db_debug, db_info, db_warn,
    debugger::Component,
    storage::{
        errors::{StorageError, StorageResult},
        heap::HeapTable,
        page::{RecordId, StorageRow, TableId},
        service::StorageService,
    },
    txn::{errors::TxnError, ids::TransactionId, lock_manager::LockManager},
    types::{row::Row, schema::Schema, value::Value},
};

/// Owner of every heap table, the set of running transactions and their
/// undo logs.
///
/// All mutations go through here so they can be locked and rolled back. A
/// mutation on behalf of a transaction that is not running fails with
/// `TxnError::Aborted`.
pub struct BufferPool {
    page_capacity: usize,
    state: Mutex<PoolState>,
    locks: LockManager,
}

#[derive(Default)]
struct PoolState {
    tables: HashMap<TableId, HeapTable>,
    next_table_id: u32,
    active: HashSet<TransactionId>,
    undo: HashMap<TransactionId, Vec<UndoEntry>>,
}

enum UndoEntry {
    Deleted { record_id: RecordId, row: StorageRow },
    Inserted { record_id: RecordId },
}

impl BufferPool {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            page_capacity: config.page_capacity(),
            state: Mutex::new(PoolState::default()),
            locks: LockManager::new(),
        }
    }

    pub fn locks(&self) -> &LockManager {
        &self.locks
    }

    /// Registers a new running transaction.
    pub fn begin_transaction(&self) -> TransactionId {
        let txn = TransactionId::new();
        self.state.lock().active.insert(txn);
        txn
    }

    pub fn is_active(&self, txn: TransactionId) -> bool {
        self.state.lock().active.contains(&txn)
    }

    pub fn create_table(&self, schema: Schema) -> TableId {
        let mut state = self.state.lock();
        let id = TableId(state.next_table_id);
        state.next_table_id += 1;
        state
            .tables
            .insert(id, HeapTable::new(id, schema, self.page_capacity));
        db_debug!(Component::Storage, "created table {}", id);
        id
    }

    pub fn schema(&self, table_id: TableId) -> StorageResult<Schema> {
        let state = self.state.lock();
        state
            .tables
            .get(&table_id)
            .map(|t| t.schema().clone())
            .ok_or(StorageError::TableNotFound(table_id))
    }

    pub fn insert_row(
        &self,
        txn: TransactionId,
        table_id: TableId,
        values: Vec<Value>,
    ) -> StorageResult<RecordId> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        ensure_active(state, txn)?;

        let table = state
            .tables
            .get_mut(&table_id)
            .ok_or(StorageError::TableNotFound(table_id))?;
        let record_id = table.insert(values)?;

        // Fresh slots are never locked by anyone else.
        self.locks.acquire_exclusive(txn, record_id)?;
        state
            .undo
            .entry(txn)
            .or_default()
            .push(UndoEntry::Inserted { record_id });

        Ok(record_id)
    }

    /// Snapshot of the table's live rows, each carrying its record id.
    pub fn scan(&self, table_id: TableId) -> StorageResult<Vec<Row>> {
        let state = self.state.lock();
        let table = state
            .tables
            .get(&table_id)
            .ok_or(StorageError::TableNotFound(table_id))?;
        Ok(table.scan().collect())
    }

    pub fn row_count(&self, table_id: TableId) -> StorageResult<usize> {
        let state = self.state.lock();
        state
            .tables
            .get(&table_id)
            .map(HeapTable::row_count)
            .ok_or(StorageError::TableNotFound(table_id))
    }

    /// Commits or rolls back everything `txn` did, then releases its locks.
    ///
    /// Rollback replays the undo log newest first. Every entry is attempted
    /// and the first failure is returned; locks are released either way.
    pub fn transaction_complete(&self, txn: TransactionId, commit: bool) -> StorageResult<()> {
        let entries = {
            let mut state = self.state.lock();
            if !state.active.remove(&txn) {
                return Err(TxnError::NotActive(txn).into());
            }
            state.undo.remove(&txn).unwrap_or_default()
        };

        let result = if commit {
            Ok(())
        } else {
            db_info!(
                Component::Storage,
                "rolling back {} change(s) of {}",
                entries.len(),
                txn
            );
            self.roll_back(entries)
        };

        self.locks.release_all(txn);
        result
    }

    fn roll_back(&self, entries: Vec<UndoEntry>) -> StorageResult<()> {
        let mut state = self.state.lock();
        let mut first_err = None;

        for entry in entries.into_iter().rev() {
            let step = match entry {
                UndoEntry::Deleted { record_id, row } => {
                    table_mut(&mut state.tables, record_id)
                        .and_then(|table| table.restore(record_id, row))
                }
                UndoEntry::Inserted { record_id } => table_mut(&mut state.tables, record_id)
                    .and_then(|table| table.delete(record_id))
                    .map(drop),
            };
            if let Err(e) = step {
                db_warn!(Component::Storage, "undo step failed: {}", e);
                first_err.get_or_insert(e);
            }
        }

        first_err.map_or(Ok(()), Err)
    }
}

fn ensure_active(state: &PoolState, txn: TransactionId) -> StorageResult<()> {
    if state.active.contains(&txn) {
        return Ok(());
    }
    Err(TxnError::Aborted {
        txn,
        reason: "transaction is not running".to_string(),
    }
    .into())
}

fn table_mut(
    tables: &mut HashMap<TableId, HeapTable>,
    record_id: RecordId,
) -> StorageResult<&mut HeapTable> {
    let table_id = record_id.page_id.table_id;
    tables
        .get_mut(&table_id)
        .ok_or(StorageError::TableNotFound(table_id))
}

impl StorageService for BufferPool {
    fn delete_row(&self, txn: TransactionId, row: &Row) -> StorageResult<()> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        ensure_active(state, txn)?;

        let record_id = row.record_id.ok_or(StorageError::MissingRecordId)?;
        self.locks.acquire_exclusive(txn, record_id)?;
        let removed = table_mut(&mut state.tables, record_id)?.delete(record_id)?;

        state
            .undo
            .entry(txn)
            .or_default()
            .push(UndoEntry::Deleted {
                record_id,
                row: removed,
            });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{storage::page::PageId, types::datatype::DataType};

    #[test]
    fn rollback_keeps_going_after_a_failed_step() {
        let pool = BufferPool::new(&EngineConfig::default());
        let table = pool.create_table(Schema::from_pairs([("x", DataType::Int64)]));
        let setup = pool.begin_transaction();
        pool.insert_row(setup, table, vec![Value::Int64(7)]).unwrap();
        pool.transaction_complete(setup, true).unwrap();

        let before = pool.scan(table).unwrap();
        let txn = pool.begin_transaction();
        pool.delete_row(txn, &before[0]).unwrap();

        let dangling = RecordId::new(PageId::new(TableId(99), 0), 0);
        pool.state
            .lock()
            .undo
            .entry(txn)
            .or_default()
            .push(UndoEntry::Inserted { record_id: dangling });

        assert_eq!(
            pool.transaction_complete(txn, false),
            Err(StorageError::TableNotFound(TableId(99)))
        );
        assert_eq!(pool.scan(table).unwrap(), before);
        assert!(!pool.locks().holds(txn, before[0].record_id.unwrap()));
    }
}
