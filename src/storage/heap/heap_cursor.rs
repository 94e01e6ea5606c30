use crate::{
    storage::{
        heap::heap_table::HeapTable,
        page::{Page, RecordId},
    },
    types::row::Row,
};

/// Walks the live rows of a heap table in page/slot order.
pub struct HeapCursor<'a> {
    table: &'a HeapTable,
    page_idx: usize,
    slot_idx: u16,
}

impl<'a> HeapCursor<'a> {
    pub fn new(table: &'a HeapTable) -> Self {
        Self {
            table,
            page_idx: 0,
            slot_idx: 0,
        }
    }
}

impl<'a> Iterator for HeapCursor<'a> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(page) = self.table.pages.get(self.page_idx) {
            while (self.slot_idx as usize) < page.slots_len() {
                let slot_id = self.slot_idx;
                self.slot_idx += 1;

                if let Some(row) = page.get_row(slot_id) {
                    return Some(row.to_row(RecordId::new(page.id(), slot_id)));
                }
            }

            self.page_idx += 1;
            self.slot_idx = 0;
        }
        None
    }
}
