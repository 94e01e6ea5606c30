pub mod page_id;
pub mod row;
pub mod row_id;
pub mod row_page;
pub mod traits;

pub use page_id::{PageId, TableId};
pub use row::StorageRow;
pub use row_id::RecordId;
pub use row_page::RowPage;
pub use traits::Page;
