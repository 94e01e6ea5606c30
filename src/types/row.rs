use crate::storage::page::RecordId;
use crate::types::value::Value;

/// One record flowing through the pipeline.
///
/// `record_id` is set when the row was read from a stored table and is what
/// storage uses to locate the record again.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub values: Vec<Value>,
    pub record_id: Option<RecordId>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            values,
            record_id: None,
        }
    }

    pub fn stored(values: Vec<Value>, record_id: RecordId) -> Self {
        Self {
            values,
            record_id: Some(record_id),
        }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vals: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", vals.join(", "))
    }
}
