use crate::storage::errors::{StorageError, StorageResult};
use crate::types::value::Value;

use super::row::StorageRow;
use super::row_id::RecordId;
use super::{page_id::PageId, traits::Page};

/// Fixed-capacity slotted page.
///
/// Slots are handed out in order and never reused after a delete, so a
/// rolled-back delete can always put its row back into the original slot.
pub struct RowPage {
    id: PageId,
    slots: Vec<Option<StorageRow>>,
    capacity: usize,
    live: usize,
}

impl RowPage {
    pub fn new(id: PageId, capacity: usize) -> Self {
        Self {
            id,
            slots: Vec::new(),
            capacity: capacity.min(u16::MAX as usize),
            live: 0,
        }
    }

    pub fn slots_len(&self) -> usize {
        self.slots.len()
    }

    /// True once every slot has been handed out, live or not.
    pub fn is_exhausted(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn insert(&mut self, values: Vec<Value>) -> Option<RecordId> {
        if self.is_exhausted() {
            return None;
        }

        let slot_id = self.slots.len() as u16;
        self.slots.push(Some(StorageRow::new(values)));
        self.live += 1;

        Some(RecordId::new(self.id, slot_id))
    }

    /// Empties the slot and returns the row that was in it.
    pub fn delete(&mut self, slot_id: u16) -> StorageResult<StorageRow> {
        let record_id = RecordId::new(self.id, slot_id);
        let row = self
            .slots
            .get_mut(slot_id as usize)
            .and_then(Option::take)
            .ok_or(StorageError::RowNotFound { record_id })?;

        self.live -= 1;
        Ok(row)
    }

    /// Puts `row` back into a slot emptied by `delete`.
    pub fn restore(&mut self, slot_id: u16, row: StorageRow) -> StorageResult<()> {
        let record_id = RecordId::new(self.id, slot_id);
        let slot = self
            .slots
            .get_mut(slot_id as usize)
            .ok_or(StorageError::RowNotFound { record_id })?;

        if slot.is_some() {
            return Err(StorageError::SlotOccupied { record_id });
        }

        *slot = Some(row);
        self.live += 1;
        Ok(())
    }
}

impl Page for RowPage {
    fn id(&self) -> PageId {
        self.id
    }

    fn num_rows(&self) -> usize {
        self.live
    }

    fn get_row(&self, slot_id: u16) -> Option<&StorageRow> {
        self.slots.get(slot_id as usize)?.as_ref()
    }
}
