use thiserror::Error;

use crate::{
    storage::page::{PageId, RecordId, TableId},
    txn::errors::TxnError,
};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage error: table {0} not found")]
    TableNotFound(TableId),

    #[error("storage error: page {page_id} not found")]
    PageNotFound { page_id: PageId },

    #[error("storage error: no live row at {record_id}")]
    RowNotFound { record_id: RecordId },

    #[error("storage error: slot {record_id} is already occupied")]
    SlotOccupied { record_id: RecordId },

    #[error("storage error: row carries no record id")]
    MissingRecordId,

    #[error("storage error: row does not match the schema of table {table_id}")]
    SchemaMismatch { table_id: TableId },

    #[error("storage IO error: {message}")]
    Io { message: String },

    #[error(transparent)]
    Transaction(#[from] TxnError),
}

impl StorageError {
    /// True when the owning transaction must abort.
    pub fn is_abort(&self) -> bool {
        matches!(self, StorageError::Transaction(e) if e.is_abort())
    }
}
