pub mod heap_cursor;
pub mod heap_table;

pub use heap_cursor::HeapCursor;
pub use heap_table::HeapTable;
