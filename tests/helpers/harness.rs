use std::sync::Arc;

use helium_exec::{
    config::EngineConfig,
    exec::{DeleteExec, Lookahead, Operator, Producer, SeqScanExec, collect},
    storage::{BufferPool, page::TableId},
    txn::{TransactionId, TransactionManager},
    types::{Row, Schema, Value},
};

#[allow(dead_code)]
pub struct TestDb {
    pub pool: Arc<BufferPool>,
    pub txns: TransactionManager,
}

#[allow(dead_code)]
impl TestDb {
    pub fn new() -> Self {
        Self::with_page_capacity(4)
    }

    pub fn with_page_capacity(page_capacity: usize) -> Self {
        super::init_debug_for_tests();

        let config = EngineConfig::default()
            .with_page_capacity(page_capacity)
            .expect("valid page capacity");
        let pool = Arc::new(BufferPool::new(&config));
        let txns = TransactionManager::new(pool.clone());
        Self { pool, txns }
    }

    /// Creates a table and commits `rows` into it.
    pub fn table(&self, schema: Schema, rows: Vec<Vec<Value>>) -> anyhow::Result<TableId> {
        let table = self.pool.create_table(schema);
        let txn = self.txns.begin();
        for row in rows {
            self.pool.insert_row(txn, table, row)?;
        }
        self.txns.commit(txn)?;
        Ok(table)
    }

    pub fn scan(&self, table: TableId) -> anyhow::Result<Lookahead<SeqScanExec>> {
        Ok(SeqScanExec::new(self.pool.clone(), table)?.into_operator())
    }

    /// `DELETE FROM table` under `txn`, as an operator.
    pub fn delete_all(
        &self,
        txn: TransactionId,
        table: TableId,
    ) -> anyhow::Result<Lookahead<DeleteExec>> {
        let child: Box<dyn Operator> = Box::new(self.scan(table)?);
        Ok(DeleteExec::new(txn, child, self.pool.clone()).into_operator())
    }

    /// Runs `op` to completion and returns the count it reported.
    pub fn run_count(&self, op: &mut dyn Operator) -> anyhow::Result<i64> {
        let rows = collect(op)?;
        single_count(&rows)
    }

    pub fn rows(&self, table: TableId) -> anyhow::Result<Vec<Row>> {
        Ok(self.pool.scan(table)?)
    }

    pub fn row_count(&self, table: TableId) -> anyhow::Result<usize> {
        Ok(self.pool.row_count(table)?)
    }
}

#[allow(dead_code)]
pub fn single_count(rows: &[Row]) -> anyhow::Result<i64> {
    match rows {
        [row] => match row.values.as_slice() {
            [Value::Int64(n)] => Ok(*n),
            other => anyhow::bail!("expected one integer column, got {:?}", other),
        },
        other => anyhow::bail!("expected exactly one row, got {}", other.len()),
    }
}
