use super::page_id::PageId;
use super::row::StorageRow;

/// Read-only view shared by page kinds.
pub trait Page {
    fn id(&self) -> PageId;

    /// Slots currently holding a row.
    fn num_rows(&self) -> usize;

    /// The live row in `slot_id`, if any.
    fn get_row(&self, slot_id: u16) -> Option<&StorageRow>;
}
