use std::{collections::VecDeque, sync::Arc};

use crate::{
    db_trace,
    debugger::Component,
    exec::{errors::ExecResult, operator::Producer},
    storage::{buffer::BufferPool, page::TableId},
    types::{row::Row, schema::Schema},
};

/// Sequential scan over one table.
///
/// The live rows are snapshotted on open; every row carries its record id.
pub struct SeqScanExec {
    pool: Arc<BufferPool>,
    table_id: TableId,
    schema: Schema,
    pending: VecDeque<Row>,
}

impl SeqScanExec {
    pub fn new(pool: Arc<BufferPool>, table_id: TableId) -> ExecResult<Self> {
        let schema = pool.schema(table_id)?;
        Ok(Self {
            pool,
            table_id,
            schema,
            pending: VecDeque::new(),
        })
    }

    pub fn table_id(&self) -> TableId {
        self.table_id
    }
}

impl Producer for SeqScanExec {
    fn name(&self) -> &'static str {
        "seq_scan"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn on_open(&mut self) -> ExecResult<()> {
        self.pending = self.pool.scan(self.table_id)?.into();
        db_trace!(
            Component::Exec,
            "scan of {} sees {} row(s)",
            self.table_id,
            self.pending.len()
        );
        Ok(())
    }

    fn on_close(&mut self) {
        self.pending.clear();
    }

    fn fetch_next(&mut self) -> ExecResult<Option<Row>> {
        Ok(self.pending.pop_front())
    }
}
