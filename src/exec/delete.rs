use std::sync::Arc;

use crate::{
    db_debug, db_info,
    debugger::Component,
    exec::{
        errors::{ExecResult, ExecutionError},
        operator::{Operator, Producer},
    },
    storage::service::StorageService,
    txn::ids::TransactionId,
    types::{datatype::DataType, row::Row, schema::Schema, value::Value},
};

/// Name of the single output column.
pub const COUNT_COLUMN: &str = "count";

/// Where a delete is in its open/emit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState {
    Closed,
    /// Open, child not drained yet.
    Pending,
    /// Summary row produced; end of stream until rewind.
    Emitted,
    /// The drain failed; end of stream until rewind.
    Aborted,
}

/// Counters for the most recent drain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeleteStats {
    pub rows_consumed: u64,
    pub rows_deleted: u64,
    pub rows_skipped: u64,
}

/// Removes every row its child produces and reports how many went.
///
/// The child is drained completely on the first pull after open. Rows whose
/// deletion fails are skipped and left out of the count, unless storage says
/// the transaction must abort, in which case the error is returned and no
/// count is emitted for this cycle.
pub struct DeleteExec {
    txn: TransactionId,
    child: Box<dyn Operator>,
    storage: Arc<dyn StorageService>,
    schema: Schema,
    state: DeleteState,
    stats: DeleteStats,
}

impl DeleteExec {
    pub fn new(
        txn: TransactionId,
        child: Box<dyn Operator>,
        storage: Arc<dyn StorageService>,
    ) -> Self {
        Self {
            txn,
            child,
            storage,
            schema: Schema::from_pairs([(COUNT_COLUMN, DataType::Int64)]),
            state: DeleteState::Closed,
            stats: DeleteStats::default(),
        }
    }

    pub fn transaction_id(&self) -> TransactionId {
        self.txn
    }

    pub fn state(&self) -> DeleteState {
        self.state
    }

    pub fn stats(&self) -> DeleteStats {
        self.stats
    }

    fn drain(&mut self) -> ExecResult<u64> {
        while self.child.has_next()? {
            let row = self.child.next_row()?;
            self.stats.rows_consumed += 1;

            match self.storage.delete_row(self.txn, &row) {
                Ok(()) => self.stats.rows_deleted += 1,
                Err(e) if e.is_abort() => {
                    db_info!(Component::Exec, "delete in {} aborted: {}", self.txn, e);
                    return Err(e.into());
                }
                Err(e) => {
                    self.stats.rows_skipped += 1;
                    db_debug!(Component::Exec, "skipping {}: {}", row, e);
                }
            }
        }

        Ok(self.stats.rows_deleted)
    }
}

impl Producer for DeleteExec {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn on_open(&mut self) -> ExecResult<()> {
        self.child.open()?;
        self.stats = DeleteStats::default();
        self.state = DeleteState::Pending;
        Ok(())
    }

    fn on_close(&mut self) {
        self.child.close();
        self.state = DeleteState::Closed;
    }

    fn fetch_next(&mut self) -> ExecResult<Option<Row>> {
        match self.state {
            DeleteState::Closed => Err(ExecutionError::IllegalState {
                operator: self.name(),
                reason: "operator is not open",
            }),
            DeleteState::Emitted | DeleteState::Aborted => Ok(None),
            DeleteState::Pending => match self.drain() {
                Ok(count) => {
                    self.state = DeleteState::Emitted;
                    db_debug!(
                        Component::Exec,
                        "{} deleted {} of {} row(s)",
                        self.txn,
                        count,
                        self.stats.rows_consumed
                    );
                    let count = i64::try_from(count).unwrap_or(i64::MAX);
                    Ok(Some(Row::new(vec![Value::Int64(count)])))
                }
                Err(e) => {
                    self.state = DeleteState::Aborted;
                    Err(e)
                }
            },
        }
    }
}
