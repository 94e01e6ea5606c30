use crate::storage::page::row_id::RecordId;
use crate::types::{row::Row, value::Value};

/// Values of one stored row, as kept in a page slot.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageRow {
    pub values: Vec<Value>,
}

impl StorageRow {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Execution row for this record, tagged with where it lives.
    pub fn to_row(&self, record_id: RecordId) -> Row {
        Row::stored(self.values.clone(), record_id)
    }
}
