use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
};

use crate::{
    exec::{errors::ExecResult, operator::Producer},
    storage::{
        errors::{StorageError, StorageResult},
        service::StorageService,
    },
    txn::{errors::TxnError, ids::TransactionId},
    types::{datatype::DataType, row::Row, schema::Schema, value::Value},
};

pub fn int_schema() -> Schema {
    Schema::from_pairs([("x", DataType::Int64)])
}

pub fn int_rows(vals: &[i64]) -> Vec<Row> {
    vals.iter().map(|v| Row::new(vec![Value::Int64(*v)])).collect()
}

/// Yields fixed rows and records how it was driven.
pub struct CountingProducer {
    schema: Schema,
    rows: Vec<Row>,
    pos: usize,
    pub opens: usize,
    pub closes: usize,
    pub fetches: usize,
}

impl CountingProducer {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            schema: int_schema(),
            rows,
            pos: 0,
            opens: 0,
            closes: 0,
            fetches: 0,
        }
    }
}

impl Producer for CountingProducer {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn on_open(&mut self) -> ExecResult<()> {
        self.opens += 1;
        self.pos = 0;
        Ok(())
    }

    fn on_close(&mut self) {
        self.closes += 1;
    }

    fn fetch_next(&mut self) -> ExecResult<Option<Row>> {
        self.fetches += 1;
        let row = self.rows.get(self.pos).cloned();
        if row.is_some() {
            self.pos += 1;
        }
        Ok(row)
    }
}

/// Yields the rows before `fail_at`, then fails on every further fetch.
pub struct FailingProducer {
    schema: Schema,
    rows: Vec<Row>,
    fail_at: usize,
    pos: usize,
}

impl FailingProducer {
    pub fn new(rows: Vec<Row>, fail_at: usize) -> Self {
        Self {
            schema: int_schema(),
            rows,
            fail_at,
            pos: 0,
        }
    }
}

impl Producer for FailingProducer {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn on_open(&mut self) -> ExecResult<()> {
        self.pos = 0;
        Ok(())
    }

    fn on_close(&mut self) {}

    fn fetch_next(&mut self) -> ExecResult<Option<Row>> {
        if self.pos >= self.fail_at {
            return Err(StorageError::Io {
                message: format!("child failed at row {}", self.pos),
            }
            .into());
        }
        let row = self.rows.get(self.pos).cloned();
        self.pos += 1;
        Ok(row)
    }
}

/// Storage double whose n-th delete request (0-based) can fail or abort.
#[derive(Default)]
pub struct ScriptedStorage {
    fail_at: HashSet<usize>,
    abort_at: HashSet<usize>,
    calls: Cell<usize>,
    pub deleted: RefCell<Vec<Row>>,
}

impl ScriptedStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(mut self, call: usize) -> Self {
        self.fail_at.insert(call);
        self
    }

    pub fn aborting_at(mut self, call: usize) -> Self {
        self.abort_at.insert(call);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl StorageService for ScriptedStorage {
    fn delete_row(&self, txn: TransactionId, row: &Row) -> StorageResult<()> {
        let call = self.calls.get();
        self.calls.set(call + 1);

        if self.abort_at.contains(&call) {
            return Err(TxnError::Aborted {
                txn,
                reason: "scripted abort".into(),
            }
            .into());
        }
        if self.fail_at.contains(&call) {
            return Err(StorageError::Io {
                message: format!("scripted failure on call {call}"),
            });
        }

        self.deleted.borrow_mut().push(row.clone());
        Ok(())
    }
}
