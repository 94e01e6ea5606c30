use crate::{
    storage::{
        errors::{StorageError, StorageResult},
        heap::heap_cursor::HeapCursor,
        page::{PageId, RecordId, RowPage, StorageRow, TableId, traits::Page},
    },
    types::{schema::Schema, value::Value},
};

/// Unordered collection of rows spread over fixed-capacity pages.
pub struct HeapTable {
    id: TableId,
    schema: Schema,
    pub(crate) pages: Vec<RowPage>,
    page_capacity: usize,
}

impl HeapTable {
    pub fn new(id: TableId, schema: Schema, page_capacity: usize) -> Self {
        Self {
            id,
            schema,
            pages: Vec::new(),
            page_capacity,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Insert a single physical row.
    pub fn insert(&mut self, values: Vec<Value>) -> StorageResult<RecordId> {
        if !self.schema.matches(&values) {
            return Err(StorageError::SchemaMismatch { table_id: self.id });
        }

        if self.pages.last().is_none_or(|p| p.is_exhausted()) {
            let pid = PageId::new(self.id, self.pages.len() as u32);
            self.pages.push(RowPage::new(pid, self.page_capacity));
        }

        let page_id = PageId::new(self.id, self.pages.len() as u32 - 1);
        self.pages
            .last_mut()
            .and_then(|page| page.insert(values))
            .ok_or(StorageError::PageNotFound { page_id })
    }

    pub fn delete(&mut self, rid: RecordId) -> StorageResult<StorageRow> {
        self.page_mut(rid.page_id)?.delete(rid.slot_id)
    }

    pub fn restore(&mut self, rid: RecordId, row: StorageRow) -> StorageResult<()> {
        self.page_mut(rid.page_id)?.restore(rid.slot_id, row)
    }

    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|p| p.num_rows()).sum()
    }

    pub fn scan(&self) -> HeapCursor<'_> {
        HeapCursor::new(self)
    }

    fn page_mut(&mut self, pid: PageId) -> StorageResult<&mut RowPage> {
        if pid.table_id != self.id {
            return Err(StorageError::PageNotFound { page_id: pid });
        }
        self.pages
            .get_mut(pid.page_no as usize)
            .ok_or(StorageError::PageNotFound { page_id: pid })
    }
}
