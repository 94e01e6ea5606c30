use crate::{
    exec::{errors::ExecResult, operator::Producer},
    types::{row::Row, schema::Schema, value::Value},
};

/// Literal rows, replayed from the start on every open.
pub struct ValuesExec {
    schema: Schema,
    rows: Vec<Row>,
    pos: usize,
}

impl ValuesExec {
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self::from_rows(schema, rows.into_iter().map(Row::new).collect())
    }

    /// Like `new`, keeping whatever record ids the rows carry.
    pub fn from_rows(schema: Schema, rows: Vec<Row>) -> Self {
        Self {
            schema,
            rows,
            pos: 0,
        }
    }
}

impl Producer for ValuesExec {
    fn name(&self) -> &'static str {
        "values"
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
        let Some(row) = self.rows.get(self.pos) else {
            return Ok(None);
        };
        self.pos += 1;
        Ok(Some(row.clone()))
    }
}
